use gloo_net::http::Request;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::{LoginRequest, LoginResponse};

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    /// Receives the session token after a successful login.
    pub on_login: Callback<String>,
}

pub enum Msg {
    Submit,
    Success(LoginResponse),
    Failed,
}

/// Credential card shown until the backend hands back a session token.
pub struct LoginComponent {
    username_ref: NodeRef,
    password_ref: NodeRef,
    error: Option<String>,
    busy: bool,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username_ref: NodeRef::default(),
            password_ref: NodeRef::default(),
            error: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                let username = self
                    .username_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();
                let password = self
                    .password_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();
                self.busy = true;
                self.error = None;

                let link = ctx.link().clone();
                spawn_local(async move {
                    let request =
                        Request::post("/api/auth/login").json(&LoginRequest { username, password });
                    let response = match request {
                        Ok(request) => request.send().await,
                        Err(e) => Err(e),
                    };
                    match response {
                        Ok(resp) if resp.status() == 200 => {
                            match resp.json::<LoginResponse>().await {
                                Ok(body) => link.send_message(Msg::Success(body)),
                                Err(_) => link.send_message(Msg::Failed),
                            }
                        }
                        _ => link.send_message(Msg::Failed),
                    }
                });
                true
            }
            Msg::Success(body) => {
                self.busy = false;
                ctx.props().on_login.emit(body.token);
                true
            }
            Msg::Failed => {
                self.busy = false;
                self.error = Some("Invalid credentials".to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        html! {
            <div class="login-container">
                <div class="login-card">
                    <h2>{"Chemical Visualizer"}</h2>
                    if let Some(error) = &self.error {
                        <p class="error">{ error }</p>
                    }
                    <form {onsubmit}>
                        <input type="text" placeholder="Username" ref={self.username_ref.clone()} />
                        <input type="password" placeholder="Password" ref={self.password_ref.clone()} />
                        <button type="submit" class="btn full-width" disabled={self.busy}>
                            {"Login"}
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}
