use dioxus::prelude::*;

use crate::components::AppState;
use crate::progress::nav::{ActivePage, NavigationState};
use crate::progress::unlock::{is_module_locked, is_topic_locked};

/// Course outline with locks, completion marks, and the overall progress
/// bar. Clicking a locked row does nothing; unlock state is recomputed
/// from the completion set on every render.
#[component]
pub fn CourseSidebar(on_navigate: EventHandler<NavigationState>) -> Element {
    let app_state = use_context::<AppState>();

    let course_ref = app_state.course.read();
    let Some(course) = course_ref.as_ref() else {
        return rsx! {
            div {}
        };
    };
    let completion = app_state.completion.read();
    let nav = *app_state.navigation.read();
    let progress = *app_state.overall_progress.read();
    let saved_label = (*app_state.progress_saved_at.read())
        .map(|saved_at| saved_at.format("Last saved %b %e, %Y").to_string());

    rsx! {
        aside { class: "course-sidebar",
            div { class: "sidebar-header",
                h3 { class: "sidebar-title", "{course.title}" }
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "width: {progress}%" }
                }
                span { class: "progress-label", "{progress}% complete" }
                if let Some(saved_label) = saved_label {
                    span { class: "progress-label", "{saved_label}" }
                }
            }

            div { class: "module-list",
                for (module_index, module) in course.modules.iter().enumerate() {
                    {
                        let module_locked = is_module_locked(&completion, module_index);
                        let module_done = completion.is_module_complete(module_index);
                        let is_active_module = nav.module == module_index;
                        let module_class = if module_locked {
                            "module-entry locked"
                        } else if is_active_module {
                            "module-entry active"
                        } else {
                            "module-entry"
                        };
                        let has_assessment = module.cat.is_some();
                        let topic_rows = module.topics.iter().enumerate().map(|(topic_index, topic)| {
                            let topic_locked = is_topic_locked(&completion, module_index, topic_index);
                            let topic_done = completion.is_topic_complete(module_index, topic_index);
                            let is_active = is_active_module
                                && nav.topic == topic_index
                                && nav.page != ActivePage::Assessment;
                            let row_class = if topic_locked {
                                "topic-row locked"
                            } else if is_active {
                                "topic-row active"
                            } else {
                                "topic-row"
                            };
                            let dot_class = if topic_done {
                                "topic-dot done"
                            } else if topic_locked {
                                "topic-dot locked"
                            } else {
                                "topic-dot"
                            };
                            rsx! {
                                button {
                                    class: "{row_class}",
                                    disabled: topic_locked,
                                    onclick: move |_| {
                                        on_navigate.call(NavigationState::at(
                                            module_index,
                                            topic_index,
                                            ActivePage::Topic,
                                        ));
                                    },
                                    span { class: "{dot_class}" }
                                    span { class: "topic-label", "{topic.title}" }
                                    if topic_locked {
                                        span { class: "lock-icon", "🔒" }
                                    }
                                }
                            }
                        });

                        rsx! {
                            div { class: "{module_class}",
                                div { class: "module-header",
                                    span { class: "module-number", "{module_index + 1}" }
                                    span { class: "module-label", "{module.title}" }
                                    if module_done {
                                        span { class: "badge badge-success", "✓" }
                                    } else if module_locked {
                                        span { class: "lock-icon", "🔒" }
                                    }
                                }
                                if is_active_module {
                                    div { class: "topic-list",
                                        {topic_rows}
                                        if has_assessment {
                                            button {
                                                class: if nav.page == ActivePage::Assessment && is_active_module {
                                                    "topic-row assessment active"
                                                } else {
                                                    "topic-row assessment"
                                                },
                                                disabled: module_locked,
                                                onclick: move |_| {
                                                    on_navigate.call(NavigationState::at(
                                                        module_index,
                                                        0,
                                                        ActivePage::Assessment,
                                                    ));
                                                },
                                                span { class: "topic-dot assessment" }
                                                span { class: "topic-label", "Module Assessment" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
