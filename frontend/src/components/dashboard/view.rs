//! View rendering for the dashboard: upload card, chart cards, history
//! table and the summary sidebar.
//!
//! Chart series are rebuilt from the current dataset snapshot on every
//! render by the pure builders in `common::viewmodel`; nothing is cached
//! between renders.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::summary::Summary;
use common::viewmodel::{
    build_category_averages, build_correlation_series, build_distribution_series,
    build_trend_series, share_series, stat_tiles,
};

use crate::components::charts::{BarChart, DistributionChart, LineChart, PieChart, ScatterChart};

use super::messages::Msg;
use super::state::DashboardComponent;

/// Main view function for the dashboard.
pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="container">
            <header>
                <h1>{"Chemical Equipment Parameter Visualizer"}</h1>
            </header>

            <div class="dashboard-grid">
                <div class="main-column">
                    { upload_card(component, link) }
                    { chart_cards(component) }
                    { history_card(component, link) }
                </div>
                <div class="side-column">
                    { summary_cards(component.summary.as_ref()) }
                </div>
            </div>
        </div>
    }
}

fn upload_card(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Upload
    });
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });
    html! {
        <div class="card">
            <h2>{"Upload Data"}</h2>
            <form {onsubmit}>
                <input
                    type="file"
                    accept=".csv"
                    {onchange}
                    ref={component.file_input_ref.clone()}
                />
                <div class="button-row">
                    <button class="btn" type="submit" disabled={component.loading}>
                        { if component.loading { "Processing..." } else { "Analyze" } }
                    </button>
                    <button
                        class="btn btn-report"
                        type="button"
                        onclick={link.callback(|_| Msg::DownloadReport)}
                    >
                        {"Download PDF"}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// The four dataset charts. Nothing renders until the first upload.
fn chart_cards(component: &DashboardComponent) -> Html {
    let Some(dataset) = component.dataset.as_ref() else {
        return Html::default();
    };
    // Fresh seed per render; the jitter is visual only.
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    let trend = build_trend_series(dataset);
    let averages = build_category_averages(dataset);
    let correlation = build_correlation_series(dataset);
    let distribution = build_distribution_series(dataset, &mut rng);

    html! {
        <>
            <div class="card">
                <h3>{"Parameter Trends (Flow & Pressure)"}</h3>
                <LineChart series={trend} />
            </div>

            <div class="stat-grid">
                <div class="card tight">
                    <h3>{"Avg Flow by Equipment"}</h3>
                    <BarChart series={averages} />
                </div>
                <div class="card tight">
                    <h3>{"Flowrate vs Pressure"}</h3>
                    <ScatterChart groups={correlation} x_title="Flowrate" y_title="Pressure" />
                </div>
            </div>

            <div class="card">
                <h3>{"Temperature Variability by Type"}</h3>
                <DistributionChart series={distribution} />
            </div>
        </>
    }
}

fn history_card(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2>{"Upload History"}</h2>
                <button class="btn btn-danger" onclick={link.callback(|_| Msg::Clear)}>
                    {"Clear History"}
                </button>
            </div>
            <table>
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Filename"}</th>
                        <th>{"Total Count"}</th>
                        <th>{"Avg Flow"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for component.history.iter().map(|entry| html! {
                        <tr>
                            <td>{ entry.upload_date.clone() }</td>
                            <td>{ entry.filename.clone() }</td>
                            <td>{ entry.total_count }</td>
                            <td>{ format!("{:.1}", entry.avg_flowrate) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

/// Sidebar: stat tiles plus the equipment share chart. An absent
/// distribution renders nothing rather than an empty pie.
fn summary_cards(summary: Option<&Summary>) -> Html {
    let Some(summary) = summary else {
        return Html::default();
    };
    let tiles = stat_tiles(summary);
    let share = share_series(summary);

    html! {
        <>
            <div class="card">
                <h2>{"Latest Summary"}</h2>
                <div class="stat-grid">
                    { for tiles.iter().map(|tile| html! {
                        <div class="stat-box">
                            <div class="stat-label">{ tile.label }</div>
                            <div class="stat-value">{ tile.value.clone() }</div>
                        </div>
                    }) }
                </div>
            </div>
            {
                match share {
                    Some(series) => html! {
                        <div class="card">
                            <h2>{"Equipment Distribution"}</h2>
                            <PieChart series={series} />
                        </div>
                    },
                    None => Html::default(),
                }
            }
        </>
    }
}
