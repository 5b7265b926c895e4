use dioxus::prelude::*;

use crate::backend::model::Topic;
use crate::backend::ApiCmd;
use crate::components::AppState;

/// Written lesson for a topic, rendered from the content host's markup.
/// The parent keys this component by module/topic so a navigation always
/// remounts it and refetches.
#[component]
pub fn LessonContent(
    topic: Topic,
    on_back: EventHandler<()>,
    on_practice: EventHandler<()>,
    on_complete: EventHandler<()>,
) -> Element {
    let mut app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    let file = topic.html_content.clone();
    let cmd_tx_fetch = cmd_tx.clone();
    use_effect(move || {
        app_state.lesson_html.set(None);
        app_state.lesson_error.set(None);
        match file.clone() {
            Some(file) => {
                let _ = cmd_tx_fetch.send(ApiCmd::FetchLesson { file });
            }
            None => {
                app_state
                    .lesson_error
                    .set(Some("This topic has no written lesson.".to_string()));
            }
        }
    });

    let html = app_state.lesson_html.read().clone();
    let error = app_state.lesson_error.read().clone();
    let practice_count = topic.practice_questions.len();

    rsx! {
        div { class: "panel lesson-panel",
            div { class: "panel-header",
                h2 { class: "panel-title", "{topic.title}" }
            }

            match (html, error) {
                (Some(html), _) => rsx! {
                    div { class: "prose lesson-body", dangerous_inner_html: "{html}" }
                },
                (None, Some(message)) => rsx! {
                    div { class: "alert alert-error", "{message}" }
                },
                (None, None) => rsx! {
                    div { class: "empty-state",
                        div { class: "spinner" }
                        p { class: "empty-state-title", "Loading lesson..." }
                    }
                }
            }

            div { class: "lesson-actions",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_back.call(()),
                    "Back to Overview"
                }
                if topic.has_practice() {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_practice.call(()),
                        "Practice Questions ({practice_count})"
                    }
                } else {
                    // No questions to gate on, so completion is explicit.
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_complete.call(()),
                        "Mark Complete & Continue"
                    }
                }
            }
        }
    }
}
