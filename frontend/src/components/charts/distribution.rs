use yew::{html, Component, Context, Html, Properties};

use common::model::series::DistributionSeries;

use super::scale::LinearScale;
use super::{empty_note, theme, MARGIN, VIEW_HEIGHT, VIEW_WIDTH};

#[derive(Properties, PartialEq)]
pub struct DistributionChartProps {
    pub series: DistributionSeries,
}

/// Jittered temperature spread per equipment type.
///
/// The x axis is the category index; tick labels come from
/// `DistributionSeries::tick_label`, which reads the same category ordering
/// the point groups were built from, so labels and clouds cannot drift
/// apart.
pub struct DistributionChart;

impl Component for DistributionChart {
    type Message = ();
    type Properties = DistributionChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DistributionChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let series = &ctx.props().series;
        let n = series.categories.len();
        if n == 0 {
            return empty_note();
        }

        let x_scale = LinearScale::new(-0.5, n as f64 - 0.5, MARGIN, VIEW_WIDTH - MARGIN);
        let y_scale = LinearScale::fit(
            series
                .groups
                .iter()
                .flat_map(|g| g.points.iter().filter_map(|p| p.y.as_number())),
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
                // One tick per category index, labelled through the shared
                // ordering carried by the series.
                { for (0..n).map(|i| {
                    let x = x_scale.position(i as f64);
                    html! {
                        <text
                            x={format!("{:.1}", x)} y={(VIEW_HEIGHT - MARGIN + 16.0).to_string()}
                            text-anchor="middle" class="tick" fill={theme::TICK_COLOR}
                        >
                            { series.tick_label(i as f64).unwrap_or("").to_string() }
                        </text>
                    }
                }) }
                <text
                    x="12" y={(VIEW_HEIGHT / 2.0).to_string()}
                    text-anchor="middle" class="tick" fill={theme::TICK_COLOR}
                    transform={format!("rotate(-90 12 {})", VIEW_HEIGHT / 2.0)}
                >
                    {"Temperature"}
                </text>

                { for series.groups.iter().enumerate().flat_map(|(i, group)| {
                    let color = theme::series_color(i);
                    group.points.iter().filter_map(move |point| {
                        let x = point.x.as_number()?;
                        let y = point.y.as_number().filter(|v| v.is_finite())?;
                        Some(html! {
                            <circle
                                cx={format!("{:.1}", x_scale.position(x))}
                                cy={format!("{:.1}", y_scale.position(y))}
                                r="3" fill={color} opacity="0.8"
                            />
                        })
                    }).collect::<Vec<_>>()
                }) }
            </svg>
        }
    }
}
