use dioxus::prelude::*;

use crate::backend::api::ApiClient;
use crate::backend::model::RegisterForm;
use crate::Route;

#[component]
pub fn RegisterComponent() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        if submitting() {
            return;
        }
        if first_name().trim().is_empty()
            || last_name().trim().is_empty()
            || email().trim().is_empty()
            || password().is_empty()
        {
            error.set(Some("Please fill in all required fields.".to_string()));
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
            let form = RegisterForm {
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                email: email().trim().to_string(),
                phone_number: phone_number().trim().to_string(),
                password: password(),
                password_confirmation: confirmation(),
            };
            match api.register(&form).await {
                Ok(()) => {
                    // A verification code is on its way to this address.
                    navigator.push(Route::VerifyEmailComponent { email: form.email });
                }
                Err(err) => {
                    error.set(Some(
                        err.message_or("Registration failed. Please try again."),
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
                    h2 { class: "panel-title", "Create your account" }
                }

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }

                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", "First name" }
                        input {
                            class: "input",
                            value: "{first_name}",
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", "Last name" }
                        input {
                            class: "input",
                            value: "{last_name}",
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }
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
                    label { class: "form-label", "Phone number (optional)" }
                    input {
                        class: "input",
                        r#type: "tel",
                        value: "{phone_number}",
                        oninput: move |evt| phone_number.set(evt.value()),
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
                div { class: "form-group",
                    label { class: "form-label", "Confirm password" }
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
                    if submitting() { "Creating account..." } else { "Create Account" }
                }

                div { class: "auth-links",
                    Link { to: Route::LoginComponent {}, class: "text-link", "Already registered? Log in" }
                }
            }
        }
    }
}
