use dioxus::prelude::*;

#[component]
pub fn ContactComponent() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sent = use_signal(|| false);

    // Messages go to the support inbox by mail for now; the form only
    // validates and confirms locally.
    let on_send = move |_| {
        if name().trim().is_empty() || email().trim().is_empty() || message().trim().is_empty() {
            return;
        }
        sent.set(true);
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "panel",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Contact Us" }
                }
                p { class: "panel-lead",
                    "Questions about a course, your account, or partnering with us? Send a note and we will get back to you within two business days."
                }

                if sent() {
                    div { class: "alert alert-success",
                        "Thanks! Your message has been recorded. We will reply to {email}."
                    }
                } else {
                    div { class: "form-group",
                        label { class: "form-label", "Your name" }
                        input {
                            class: "input",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
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
                        label { class: "form-label", "Message" }
                        textarea {
                            class: "input",
                            rows: "5",
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                    }
                    button { class: "btn btn-primary", onclick: on_send, "Send Message" }
                }
            }

            div { class: "panel",
                h3 { class: "panel-title", "Other ways to reach us" }
                p { "Email: support@lingua.example" }
                p { "We answer Monday through Friday, 9:00 to 17:00 UTC." }
            }
        }
    }
}
