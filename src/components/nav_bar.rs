use dioxus::prelude::*;

use crate::backend::ApiCmd;
use crate::components::AppState;
use crate::Route;

#[component]
pub fn NavComponent() -> Element {
    let mut app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();
    let navigator = use_navigator();

    let user = app_state.user.read().clone();

    let on_logout = move |_| {
        let _ = cmd_tx.send(ApiCmd::Logout);
        app_state.reset_session();
        navigator.push(Route::HomeComponent {});
    };

    rsx! {
        div { class: "min-h-screen flex flex-col",
            nav { class: "nav-bar",
                div { class: "page-container",
                    div { class: "nav-logo",
                        div { class: "logo-icon" }
                        span { class: "logo-text", "Lingua" }
                    }

                    div { class: "nav-links",
                        Link {
                            to: Route::HomeComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Home"
                        }
                        Link {
                            to: Route::AboutComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "About"
                        }
                        Link {
                            to: Route::ContactComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Contact"
                        }
                        if user.is_some() {
                            Link {
                                to: Route::CourseComponent {},
                                class: "nav-link",
                                active_class: "active",
                                "My Course"
                            }
                        }
                    }

                    div { class: "nav-actions",
                        match &user {
                            Some(user) => rsx! {
                                span { class: "nav-user", "{user.first_name}" }
                                button { class: "btn btn-ghost btn-sm", onclick: on_logout, "Log Out" }
                            },
                            None => rsx! {
                                Link {
                                    to: Route::LoginComponent {},
                                    class: "nav-link",
                                    active_class: "active",
                                    "Log In"
                                }
                                Link {
                                    to: Route::RegisterComponent {},
                                    class: "btn btn-primary btn-sm",
                                    "Get Started"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "fixed-header-spacer" }

            div { class: "flex-1",
                Outlet::<Route> {}
            }

            footer { class: "site-footer",
                div { class: "page-container",
                    span { class: "footer-brand", "Lingua" }
                    span { class: "footer-note", "Learn your heritage language, one lesson at a time." }
                }
            }
        }
    }
}
