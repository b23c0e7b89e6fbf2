use std::f64::consts::PI;

use yew::{html, Component, Context, Html, Properties};

use common::model::series::ShareSeries;

use super::{empty_note, theme};

const SIZE: f64 = 220.0;
const RADIUS: f64 = 84.0;

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub series: ShareSeries,
}

/// Equipment share as pie slices with a legend underneath.
pub struct PieChart;

impl Component for PieChart {
    type Message = ();
    type Properties = PieChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PieChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let series = &ctx.props().series;
        let total: u64 = series.values.iter().sum();
        if series.labels.is_empty() || total == 0 {
            return empty_note();
        }

        let center = SIZE / 2.0;
        let mut start = -PI / 2.0;
        let slices: Vec<Html> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let fraction = *value as f64 / total as f64;
                let end = start + fraction * 2.0 * PI;
                let slice = if fraction > 0.999 {
                    // A single full-share slice degenerates as an arc; draw
                    // the disc directly.
                    html! {
                        <circle
                            cx={center.to_string()} cy={center.to_string()}
                            r={RADIUS.to_string()} fill={theme::series_color(i)} opacity="0.85"
                        />
                    }
                } else {
                    html! {
                        <path
                            d={arc_path(center, RADIUS, start, end)}
                            fill={theme::series_color(i)} opacity="0.85"
                        />
                    }
                };
                start = end;
                slice
            })
            .collect();

        html! {
            <div class="pie-wrap">
                <svg viewBox={format!("0 0 {} {}", SIZE, SIZE)} class="chart pie">
                    { for slices.into_iter() }
                </svg>
                <ul class="legend">
                    { for series.labels.iter().zip(&series.values).enumerate().map(|(i, (label, value))| html! {
                        <li>
                            <span class="swatch" style={format!("background: {}", theme::series_color(i))}></span>
                            { format!("{}: {}", label, value) }
                        </li>
                    }) }
                </ul>
            </div>
        }
    }
}

fn arc_path(center: f64, radius: f64, start: f64, end: f64) -> String {
    let (x1, y1) = (center + radius * start.cos(), center + radius * start.sin());
    let (x2, y2) = (center + radius * end.cos(), center + radius * end.sin());
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        center, center, x1, y1, radius, radius, large_arc, x2, y2
    )
}
