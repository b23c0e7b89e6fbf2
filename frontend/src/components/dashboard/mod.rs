//! Dashboard root: wires the Yew `Component` implementation with submodules
//! for state, messages, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `DashboardComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the upload history so returning users see their
//!   previous batches before uploading anything.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DashboardComponent;

use common::model::history::HistoryEntry;

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            fetch_history(ctx.link().clone());
        }
    }
}

/// Refreshes the history table. A failure only logs; the table keeps
/// whatever rows it already shows.
pub(crate) fn fetch_history(link: yew::html::Scope<DashboardComponent>) {
    spawn_local(async move {
        let response = Request::get("/api/history").send().await;
        match response {
            Ok(resp) if resp.status() == 200 => {
                if let Ok(entries) = resp.json::<Vec<HistoryEntry>>().await {
                    link.send_message(Msg::HistoryLoaded(entries));
                }
            }
            _ => gloo_console::error!("Failed to fetch history"),
        }
    });
}
