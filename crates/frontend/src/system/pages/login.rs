use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::components::ui::{Button, Input};
use crate::shared::http::ApiError;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Email and password are required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    session.sign_in(response);
                    let _ = set_is_loading.try_set(false);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    let message = match e {
                        ApiError::Unauthorized => "Invalid email or password".to_string(),
                        other => format!("Login failed: {}", other),
                    };
                    let _ = set_error_message.try_set(Some(message));
                    let _ = set_is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <Show when=move || !session.is_authenticated() fallback=|| view! { <Redirect path="/" /> }>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Admin Console"</h1>
                    <h2>"Sign in"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit.clone()>
                        <Input
                            id="email"
                            label="Email"
                            input_type="email"
                            autocomplete="username"
                            value=email
                            on_input=Callback::new(move |v| set_email.set(v))
                            disabled=is_loading
                            required=true
                        />
                        <Input
                            id="password"
                            label="Password"
                            input_type="password"
                            autocomplete="current-password"
                            value=password
                            on_input=Callback::new(move |v| set_password.set(v))
                            disabled=is_loading
                            required=true
                        />
                        <Button button_type="submit" disabled=is_loading>
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </Button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
