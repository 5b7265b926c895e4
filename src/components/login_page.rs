use dioxus::prelude::*;

use crate::backend::api::ApiClient;
use crate::backend::model::Role;
use crate::components::AppState;
use crate::Route;

#[component]
pub fn LoginComponent() -> Element {
    let api = use_context::<ApiClient>();
    let mut app_state = use_context::<AppState>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        if submitting() {
            return;
        }
        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Please enter your email and password.".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let api = api.clone();
        spawn(async move {
            match api.login(email().trim(), &password()).await {
                Ok(user) => {
                    let role = user.role;
                    app_state.user.set(Some(user));
                    app_state.session_checked.set(true);
                    match role {
                        Role::Student => navigator.push(Route::CourseComponent {}),
                        _ => navigator.push(Route::HomeComponent {}),
                    };
                }
                Err(err) => {
                    error.set(Some(
                        err.message_or("Failed to log in. Please check your credentials."),
                    ));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "panel auth-card",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Welcome back" }
                }

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }

                div { class: "form-group",
                    label { class: "form-label", "Email" }
                    input {
                        class: "input",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Password" }
                    input {
                        class: "input",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Logging in..." } else { "Log In" }
                }

                div { class: "auth-links",
                    Link { to: Route::ForgotPasswordComponent {}, class: "text-link", "Forgot your password?" }
                    span { class: "auth-links-sep" }
                    Link { to: Route::RegisterComponent {}, class: "text-link", "New here? Create an account" }
                }
            }
        }
    }
}
