use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::backend::api::ApiClient;
use crate::backend::model::ResetWithCodeForm;
use crate::Route;

/// Two-step reset: request a code for the address, then submit the code
/// with the new password. The confirmation message never reveals whether
/// the address is registered.
#[component]
pub fn ForgotPasswordComponent() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut code_requested = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut reset_code = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let api_request = api.clone();
    let on_request_code = move |_| {
        if submitting() {
            return;
        }
        if email().trim().is_empty() {
            error.set(Some("Please enter your email address.".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let api = api_request.clone();
        spawn(async move {
            match api.forgot_password(email().trim()).await {
                Ok(message) => {
                    notice.set(Some(message.unwrap_or_else(|| {
                        "If that address is registered, a reset code is on its way.".to_string()
                    })));
                    code_requested.set(true);
                }
                Err(err) => {
                    error.set(Some(err.message_or("Could not request a reset code.")));
                }
            }
            submitting.set(false);
        });
    };

    let on_reset = move |_| {
        if submitting() {
            return;
        }
        if reset_code().trim().is_empty() || password().is_empty() {
            error.set(Some("Please enter the code and a new password.".to_string()));
            return;
        }
        if password() != confirmation() {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let api = api.clone();
        spawn(async move {
            let form = ResetWithCodeForm {
                email: email().trim().to_string(),
                reset_code: reset_code().trim().to_string(),
                password: password(),
                password_confirmation: confirmation(),
            };
            match api.reset_password_with_code(&form).await {
                Ok(()) => {
                    notice.set(Some(
                        "Password updated. Taking you to the login page...".to_string(),
                    ));
                    sleep(Duration::from_secs(3)).await;
                    navigator.push(Route::LoginComponent {});
                }
                Err(err) => {
                    error.set(Some(err.message_or("Reset failed. Check the code and try again.")));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "panel auth-card",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Reset your password" }
                }

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }
                if let Some(message) = notice() {
                    div { class: "alert alert-success", "{message}" }
                }

                div { class: "form-group",
                    label { class: "form-label", "Email" }
                    input {
                        class: "input",
                        r#type: "email",
                        value: "{email}",
                        disabled: code_requested(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                if !code_requested() {
                    button {
                        class: "btn btn-primary btn-block",
                        disabled: submitting(),
                        onclick: on_request_code,
                        if submitting() { "Sending..." } else { "Send Reset Code" }
                    }
                } else {
                    div { class: "form-group",
                        label { class: "form-label", "Reset code" }
                        input {
                            class: "input input-code",
                            value: "{reset_code}",
                            oninput: move |evt| reset_code.set(evt.value()),
                        }
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
                        onclick: on_reset,
                        if submitting() { "Updating..." } else { "Set New Password" }
                    }
                }

                div { class: "auth-links",
                    Link { to: Route::LoginComponent {}, class: "text-link", "Back to login" }
                }
            }
        }
    }
}
