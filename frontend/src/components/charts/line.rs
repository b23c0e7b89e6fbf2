use yew::{html, Component, Context, Html, Properties};

use common::model::record::CellValue;
use common::model::series::TrendSeries;

use super::scale::LinearScale;
use super::{empty_note, theme, MARGIN, VIEW_HEIGHT, VIEW_WIDTH};

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub series: TrendSeries,
}

/// Dual-axis trend lines: flow against the left axis, pressure against the
/// right. A row whose value does not read as a number breaks the line into
/// a gap instead of collapsing to zero.
pub struct LineChart;

impl Component for LineChart {
    type Message = ();
    type Properties = LineChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LineChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let series = &ctx.props().series;
        let n = series.labels.len();
        if n == 0 {
            return empty_note();
        }

        let x_at = |i: usize| {
            if n == 1 {
                VIEW_WIDTH / 2.0
            } else {
                MARGIN + (VIEW_WIDTH - 2.0 * MARGIN) * i as f64 / (n - 1) as f64
            }
        };
        let flow_scale = LinearScale::fit(
            series.flow.iter().filter_map(|c| c.as_number()),
            VIEW_HEIGHT - MARGIN,
            MARGIN,
        );
        let pressure_scale = LinearScale::fit(
            series.pressure.iter().filter_map(|c| c.as_number()),
            VIEW_HEIGHT - MARGIN,
            MARGIN,
        );

        let label_step = (n / 6).max(1);

        html! {
            <svg viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)} class="chart">
                { for flow_scale.ticks(4).into_iter().map(|tick| {
                    let y = flow_scale.position(tick);
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
                { for pressure_scale.ticks(4).into_iter().map(|tick| {
                    let y = pressure_scale.position(tick);
                    html! {
                        <text
                            x={(VIEW_WIDTH - MARGIN + 6.0).to_string()} y={format!("{:.1}", y + 3.0)}
                            text-anchor="start" class="tick" fill={theme::SECONDARY_COLOR}
                        >
                            { format!("{:.1}", tick) }
                        </text>
                    }
                }) }
                { for series.labels.iter().enumerate().step_by(label_step).map(|(i, label)| html! {
                    <text
                        x={format!("{:.1}", x_at(i))} y={(VIEW_HEIGHT - MARGIN + 16.0).to_string()}
                        text-anchor="middle" class="tick" fill={theme::TICK_COLOR}
                    >
                        { label.to_string() }
                    </text>
                }) }

                { render_series(&series.flow, &x_at, &flow_scale, theme::PRIMARY_COLOR) }
                { render_series(&series.pressure, &x_at, &pressure_scale, theme::SECONDARY_COLOR) }

                <circle cx="200" cy="14" r="4" fill={theme::PRIMARY_COLOR} />
                <text x="210" y="18" class="tick" fill={theme::TICK_COLOR}>{"Flow Rate"}</text>
                <circle cx="300" cy="14" r="4" fill={theme::SECONDARY_COLOR} />
                <text x="310" y="18" class="tick" fill={theme::TICK_COLOR}>{"Pressure"}</text>
            </svg>
        }
    }
}

/// Polyline runs between gaps, plus a marker per reading.
fn render_series(
    values: &[CellValue],
    x_at: &impl Fn(usize) -> f64,
    scale: &LinearScale,
    color: &'static str,
) -> Html {
    let mut runs: Vec<String> = Vec::new();
    let mut markers: Vec<(f64, f64)> = Vec::new();
    let mut current = String::new();
    for (i, value) in values.iter().enumerate() {
        match value.as_number().filter(|v| v.is_finite()) {
            Some(v) => {
                let (x, y) = (x_at(i), scale.position(v));
                current.push_str(&format!("{:.1},{:.1} ", x, y));
                markers.push((x, y));
            }
            None => {
                if !current.is_empty() {
                    runs.push(current.trim_end().to_string());
                    current = String::new();
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current.trim_end().to_string());
    }

    html! {
        <>
            { for runs.into_iter().map(|points| html! {
                <polyline points={points} fill="none" stroke={color} stroke-width="2" />
            }) }
            { for markers.into_iter().map(|(x, y)| html! {
                <circle
                    cx={format!("{:.1}", x)} cy={format!("{:.1}", y)}
                    r="2.5" fill={color}
                />
            }) }
        </>
    }
}
