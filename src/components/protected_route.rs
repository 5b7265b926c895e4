use dioxus::prelude::*;

use crate::components::AppState;
use crate::Route;

/// Gate for signed-in pages. While the stored token is still being
/// verified it shows a holding state instead of bouncing to login, so a
/// returning user with a valid session never sees the login page flash.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let app_state = use_context::<AppState>();
    let navigator = use_navigator();

    use_effect(move || {
        if *app_state.session_checked.read() && app_state.user.read().is_none() {
            navigator.push(Route::LoginComponent {});
        }
    });

    if !*app_state.session_checked.read() {
        return rsx! {
            div { class: "page-container py-8",
                div { class: "empty-state",
                    div { class: "spinner" }
                    p { class: "empty-state-title", "Checking your session..." }
                }
            }
        };
    }
    if app_state.user.read().is_none() {
        // The effect above is already redirecting.
        return rsx! { div {} };
    }

    rsx! {
        {children}
    }
}
