use yew::{html, Component, Context, Html};

use crate::components::dashboard::DashboardComponent;
use crate::components::login::LoginComponent;

pub enum Msg {
    LoggedIn(String),
}

/// Application shell: shows the login card until a session token is held,
/// then the dashboard.
pub struct App {
    token: Option<String>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { token: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoggedIn(token) => {
                self.token = Some(token);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.token {
            Some(_) => html! { <DashboardComponent /> },
            None => html! { <LoginComponent on_login={ctx.link().callback(Msg::LoggedIn)} /> },
        }
    }
}
