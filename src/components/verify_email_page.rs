use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::backend::api::ApiClient;
use crate::backend::model::Role;
use crate::components::AppState;
use crate::Route;

const RESEND_COOLDOWN_SECS: u32 = 60;

/// Entered after registration: the user types the code mailed to them.
/// Resending is rate limited client-side with a visible countdown.
#[component]
pub fn VerifyEmailComponent(email: String) -> Element {
    let api = use_context::<ApiClient>();
    let mut app_state = use_context::<AppState>();
    let navigator = use_navigator();

    let mut code = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut cooldown = use_signal(|| 0u32);

    let address = email.clone();
    let on_verify = move |_| {
        if submitting() {
            return;
        }
        let entered = code().trim().to_string();
        if entered.is_empty() {
            error.set(Some("Please enter the verification code.".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let api = api.clone();
        let address = address.clone();
        spawn(async move {
            match api.verify_email(&address, &entered).await {
                Ok(Some(user)) => {
                    let role = user.role;
                    app_state.user.set(Some(user));
                    app_state.session_checked.set(true);
                    match role {
                        Role::Student => navigator.push(Route::CourseComponent {}),
                        _ => navigator.push(Route::HomeComponent {}),
                    };
                }
                Ok(None) => {
                    // Verified but not signed in; have them log in normally.
                    navigator.push(Route::LoginComponent {});
                }
                Err(err) => {
                    error.set(Some(err.message_or(
                        "Verification failed. Check the code and try again.",
                    )));
                }
            }
            submitting.set(false);
        });
    };

    let api_resend = use_context::<ApiClient>();
    let resend_address = email.clone();
    let on_resend = move |_| {
        if cooldown() > 0 {
            return;
        }
        cooldown.set(RESEND_COOLDOWN_SECS);
        error.set(None);
        notice.set(None);
        let api = api_resend.clone();
        let address = resend_address.clone();
        spawn(async move {
            match api.resend_verification(&address).await {
                Ok(()) => notice.set(Some(format!("A new code was sent to {address}."))),
                Err(err) => {
                    error.set(Some(err.message_or("Could not resend the code right now.")));
                }
            }
        });
        spawn(async move {
            while cooldown() > 0 {
                sleep(Duration::from_secs(1)).await;
                cooldown.set(cooldown().saturating_sub(1));
            }
        });
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "panel auth-card",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Check your inbox" }
                }
                p { class: "panel-lead", "We sent a verification code to {email}. Enter it below to activate your account." }

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }
                if let Some(message) = notice() {
                    div { class: "alert alert-success", "{message}" }
                }

                div { class: "form-group",
                    label { class: "form-label", "Verification code" }
                    input {
                        class: "input input-code",
                        value: "{code}",
                        maxlength: "8",
                        oninput: move |evt| code.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    disabled: submitting(),
                    onclick: on_verify,
                    if submitting() { "Verifying..." } else { "Verify Email" }
                }

                div { class: "auth-links",
                    if cooldown() > 0 {
                        span { class: "text-muted", "Resend available in {cooldown}s" }
                    } else {
                        button { class: "btn btn-ghost btn-sm", onclick: on_resend, "Resend code" }
                    }
                }
            }
        }
    }
}
