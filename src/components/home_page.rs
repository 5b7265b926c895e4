use dioxus::prelude::*;

use crate::components::AppState;
use crate::Route;

#[component]
pub fn HomeComponent() -> Element {
    let app_state = use_context::<AppState>();
    let signed_in = app_state.user.read().is_some();

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            section { class: "hero",
                h1 { class: "hero-title", "Reconnect with your heritage language" }
                p { class: "hero-subtitle",
                    "Structured lessons, practice questions, and assessments that take you from first phrases to confident conversation."
                }
                div { class: "hero-actions",
                    if signed_in {
                        Link { to: Route::CourseComponent {}, class: "btn btn-primary", "Continue Learning" }
                    } else {
                        Link { to: Route::RegisterComponent {}, class: "btn btn-primary", "Start for Free" }
                        Link { to: Route::LoginComponent {}, class: "btn btn-secondary", "I Have an Account" }
                    }
                }
            }

            section { class: "feature-grid",
                div { class: "panel feature-card",
                    div { class: "feature-icon", "📚" }
                    h3 { class: "feature-title", "Guided Modules" }
                    p { class: "feature-text",
                        "Every course is broken into modules and topics that unlock in order, so you always know what to study next."
                    }
                }
                div { class: "panel feature-card",
                    div { class: "feature-icon", "✍️" }
                    h3 { class: "feature-title", "Practice That Counts" }
                    p { class: "feature-text",
                        "Short quizzes after each topic check your understanding before you move on, with explanations once you pass."
                    }
                }
                div { class: "panel feature-card",
                    div { class: "feature-icon", "⏱️" }
                    h3 { class: "feature-title", "Timed Assessments" }
                    p { class: "feature-text",
                        "End each module with a timed assessment that mirrors real exam conditions and tracks your progress."
                    }
                }
                div { class: "panel feature-card",
                    div { class: "feature-icon", "📈" }
                    h3 { class: "feature-title", "Pick Up Anywhere" }
                    p { class: "feature-text",
                        "Your progress is saved as you go. Sign in on any device and continue exactly where you left off."
                    }
                }
            }

            section { class: "panel cta-panel",
                h2 { "Ready to begin?" }
                p { "Create an account and your first module is waiting." }
                Link { to: Route::RegisterComponent {}, class: "btn btn-primary", "Create Account" }
            }
        }
    }
}
