use crate::frontend::services::auth::AuthState;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;
use std::time::Duration;
use tokio::time::sleep;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut hide_ui = use_signal(|| false);

    let submit = {
        let mut auth = auth.clone();
        move || {
            let value = username.read().clone();
            match auth.login(value) {
                Ok(()) => {
                    error.set(None);
                    hide_ui.set(true);
                    // Short fade before the workspace comes up
                    spawn(async move {
                        sleep(Duration::from_millis(400)).await;
                        nav.push("/home");
                    });
                }
                Err(message) => error.set(Some(message)),
            }
        }
    };

    let on_keypress = {
        let mut submit = submit.clone();
        move |e: KeyboardEvent| {
            if e.key() == Key::Enter {
                submit();
            }
        }
    };

    let on_click = {
        let mut submit = submit;
        move |_| submit()
    };

    rsx! {
        main { class: if hide_ui() { "login fade-out" } else { "login" },
            div { class: "login-card",
                h1 { class: "login-title", "Sign in to HR Desk" }
                input {
                    class: "login-input",
                    r#type: "text",
                    value: "{username()}",
                    maxlength: "16",
                    placeholder: "Username",
                    autofocus: true,
                    oninput: move |e| {
                        username.set(e.value());
                        error.set(None);
                    },
                    onkeypress: on_keypress,
                }
                button { class: "login-button", onclick: on_click, "Sign in" }
                div {
                    class: if error().is_some() { "error-message error-visible" } else { "error-message error-hidden" },
                    {error().unwrap_or_default()}
                }
            }
        }
    }
}
