use yew::{html, AttrValue, Component, Context, Html, Properties};

use common::model::series::PointGroup;

use super::scale::LinearScale;
use super::{empty_note, theme, MARGIN, VIEW_HEIGHT, VIEW_WIDTH};

#[derive(Properties, PartialEq)]
pub struct ScatterChartProps {
    pub groups: Vec<PointGroup>,
    pub x_title: AttrValue,
    pub y_title: AttrValue,
}

/// Point clouds colored per group. Points whose raw cells do not read as
/// finite numbers on both axes are dropped, which is the consumer half of
/// the builders' pass-through contract.
pub struct ScatterChart;

impl Component for ScatterChart {
    type Message = ();
    type Properties = ScatterChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ScatterChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.groups.is_empty() {
            return empty_note();
        }

        // Numeric points per group, group order preserved for the legend.
        let plotted: Vec<(usize, &str, Vec<(f64, f64)>)> = props
            .groups
            .iter()
            .enumerate()
            .map(|(i, group)| {
                let points = group
                    .points
                    .iter()
                    .filter_map(|p| match (p.x.as_number(), p.y.as_number()) {
                        (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
                        _ => None,
                    })
                    .collect();
                (i, group.label.as_str(), points)
            })
            .collect();

        let x_scale = LinearScale::fit(
            plotted.iter().flat_map(|(_, _, pts)| pts.iter().map(|p| p.0)),
            MARGIN,
            VIEW_WIDTH - MARGIN,
        );
        let y_scale = LinearScale::fit(
            plotted.iter().flat_map(|(_, _, pts)| pts.iter().map(|p| p.1)),
            VIEW_HEIGHT - MARGIN,
            MARGIN,
        );

        html! {
            <svg viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)} class="chart">
                { for y_scale.ticks(4).into_iter().map(|tick| {
                    let y = y_scale.position(tick);
                    html! {
                        <>
                            <line
                                x1={MARGIN.to_string()} x2={(VIEW_WIDTH - MARGIN).to_string()}
                                y1={format!("{:.1}", y)} y2={format!("{:.1}", y)}
                                stroke={theme::GRID_COLOR} stroke-width="1"
                            />
                            <text
                                x={(MARGIN - 6.0).to_string()} y={format!("{:.1}", y + 3.0)}
                                text-anchor="end" class="tick" fill={theme::TICK_COLOR}
                            >
                                { format!("{:.1}", tick) }
                            </text>
                        </>
                    }
                }) }
                { for x_scale.ticks(4).into_iter().map(|tick| {
                    let x = x_scale.position(tick);
                    html! {
                        <text
                            x={format!("{:.1}", x)} y={(VIEW_HEIGHT - MARGIN + 16.0).to_string()}
                            text-anchor="middle" class="tick" fill={theme::TICK_COLOR}
                        >
                            { format!("{:.1}", tick) }
                        </text>
                    }
                }) }
                <text
                    x={(VIEW_WIDTH / 2.0).to_string()} y={(VIEW_HEIGHT - 6.0).to_string()}
                    text-anchor="middle" class="tick" fill={theme::TICK_COLOR}
                >
                    { props.x_title.clone() }
                </text>
                <text
                    x="12" y={(VIEW_HEIGHT / 2.0).to_string()}
                    text-anchor="middle" class="tick" fill={theme::TICK_COLOR}
                    transform={format!("rotate(-90 12 {})", VIEW_HEIGHT / 2.0)}
                >
                    { props.y_title.clone() }
                </text>

                { for plotted.iter().flat_map(|(i, _, points)| {
                    let color = theme::series_color(*i);
                    points.iter().map(move |(x, y)| html! {
                        <circle
                            cx={format!("{:.1}", x_scale.position(*x))}
                            cy={format!("{:.1}", y_scale.position(*y))}
                            r="3.5" fill={color} opacity="0.85"
                        />
                    }).collect::<Vec<_>>()
                }) }

                { for plotted.iter().map(|(i, label, _)| {
                    let x = MARGIN + *i as f64 * 110.0;
                    html! {
                        <>
                            <circle cx={format!("{:.1}", x)} cy="14" r="4" fill={theme::series_color(*i)} />
                            <text x={format!("{:.1}", x + 10.0)} y="18" class="tick" fill={theme::TICK_COLOR}>
                                { label.to_string() }
                            </text>
                        </>
                    }
                }) }
            </svg>
        }
    }
}
