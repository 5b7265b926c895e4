use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::backend::api::ApiClient;
use crate::Route;

/// Reached from the emailed reset link, which carries a one-time token
/// in the URL.
#[component]
pub fn ResetPasswordComponent(resettoken: String) -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let token = resettoken.clone();
    let on_submit = move |_| {
        if submitting() {
            return;
        }
        if password().is_empty() {
            error.set(Some("Please choose a new password.".to_string()));
            return;
        }
        if password() != confirmation() {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let api = api.clone();
        let token = token.clone();
        spawn(async move {
            match api.reset_password_with_token(&token, &password()).await {
                Ok(()) => {
                    notice.set(Some(
                        "Password updated. Taking you to the login page...".to_string(),
                    ));
                    sleep(Duration::from_secs(3)).await;
                    navigator.push(Route::LoginComponent {});
                }
                Err(err) => {
                    error.set(Some(err.message_or(
                        "This reset link is invalid or has expired. Request a new one.",
                    )));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "panel auth-card",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Choose a new password" }
                }

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }
                if let Some(message) = notice() {
                    div { class: "alert alert-success", "{message}" }
                }

                div { class: "form-group",
                    label { class: "form-label", "New password" }
                    input {
                        class: "input",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Confirm new password" }
                    input {
                        class: "input",
                        r#type: "password",
                        value: "{confirmation}",
                        oninput: move |evt| confirmation.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Updating..." } else { "Set New Password" }
                }

                div { class: "auth-links",
                    Link { to: Route::ForgotPasswordComponent {}, class: "text-link", "Need a new reset link?" }
                }
            }
        }
    }
}
