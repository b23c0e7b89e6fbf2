use yew::{html, Component, Context, Html, Properties};

use common::model::series::CategorySeries;

use super::scale::LinearScale;
use super::{empty_note, theme, MARGIN, VIEW_HEIGHT, VIEW_WIDTH};

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub series: CategorySeries,
}

/// One bar per category, colors cycled from the shared palette. The value
/// axis always includes zero so bar heights stay comparable.
pub struct BarChart;

impl Component for BarChart {
    type Message = ();
    type Properties = BarChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BarChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let series = &ctx.props().series;
        let n = series.labels.len();
        if n == 0 {
            return empty_note();
        }

        let scale = LinearScale::fit(
            series.values.iter().copied().chain(std::iter::once(0.0)),
            VIEW_HEIGHT - MARGIN,
            MARGIN,
        );
        let baseline = scale.position(0.0);
        let band = (VIEW_WIDTH - 2.0 * MARGIN) / n as f64;
        let bar_width = band * 0.6;

        html! {
            <svg viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)} class="chart">
                { for scale.ticks(4).into_iter().map(|tick| {
                    let y = scale.position(tick);
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
                { for series.labels.iter().zip(&series.values).enumerate().map(|(i, (label, value))| {
                    let x = MARGIN + band * i as f64 + (band - bar_width) / 2.0;
                    let top = scale.position(*value);
                    let y = top.min(baseline);
                    let height = (top - baseline).abs();
                    html! {
                        <>
                            <rect
                                x={format!("{:.1}", x)} y={format!("{:.1}", y)}
                                width={format!("{:.1}", bar_width)} height={format!("{:.1}", height)}
                                fill={theme::series_color(i)} opacity="0.8"
                            />
                            <text
                                x={format!("{:.1}", x + bar_width / 2.0)}
                                y={(VIEW_HEIGHT - MARGIN + 16.0).to_string()}
                                text-anchor="middle" class="tick" fill={theme::TICK_COLOR}
                            >
                                { label.clone() }
                            </text>
                        </>
                    }
                }) }
            </svg>
        }
    }
}
