use dioxus::prelude::*;

use crate::backend::ApiCmd;
use crate::components::assessment_panel::AssessmentPanel;
use crate::components::course_sidebar::CourseSidebar;
use crate::components::lesson_content::LessonContent;
use crate::components::practice_panel::PracticePanel;
use crate::components::protected_route::RequireAuth;
use crate::components::{AppState, CourseLoad};
use crate::progress::nav::{after_assessment_pass, after_topic_pass, ActivePage, NavigationState};
use crate::progress::sync::{build_update, overall_progress};
use crate::progress::unlock::{derive_module_completion, is_module_locked, is_topic_locked};

#[component]
pub fn CourseComponent() -> Element {
    rsx! {
        RequireAuth {
            CourseView {}
        }
    }
}

/// The signed-in learning experience: sidebar outline plus the active
/// pane (topic overview, lesson, practice, or assessment). All completion
/// changes go through the handlers here, which also push the snapshot to
/// the backend.
#[component]
fn CourseView() -> Element {
    let mut app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    // Load the enrolled course once a signed-in user is known. Retry
    // resets the phase to Idle, which re-triggers this.
    let cmd_tx_load = cmd_tx.clone();
    use_effect(move || {
        if *app_state.course_load.read() != CourseLoad::Idle {
            return;
        }
        let user_id = app_state.user.read().as_ref().map(|user| user.id.clone());
        if let Some(user_id) = user_id {
            app_state.course_load.set(CourseLoad::Loading);
            let _ = cmd_tx_load.send(ApiCmd::LoadCourse { user_id });
        }
    });

    // Passing a topic's practice (or marking a practice-less topic done)
    // completes it, possibly completes its module, advances, and syncs.
    let cmd_tx_topic = cmd_tx.clone();
    let complete_current_topic = move |_: ()| {
        let course_ref = app_state.course.read();
        let Some(course) = course_ref.as_ref() else {
            return;
        };
        let nav = *app_state.navigation.read();
        let mut completion = app_state.completion.read().clone();
        completion.mark_topic(nav.module, nav.topic);
        if let Some(module) = course.modules.get(nav.module) {
            derive_module_completion(
                &mut completion,
                nav.module,
                module.topics.len(),
                module.cat.is_some(),
            );
        }
        let next = after_topic_pass(course, nav.module, nav.topic).target();
        let update = build_update(course, &completion, next);
        let percent = overall_progress(course, &completion);
        let course_id = course.id.clone();
        drop(course_ref);

        app_state.completion.set(completion);
        app_state.overall_progress.set(percent);
        app_state.navigation.set(next);
        if let Some(update) = update {
            let _ = cmd_tx_topic.send(ApiCmd::PushProgress { course_id, update });
        }
    };

    // Passing the module assessment completes the module.
    let cmd_tx_module = cmd_tx.clone();
    let complete_current_module = move |_: ()| {
        let course_ref = app_state.course.read();
        let Some(course) = course_ref.as_ref() else {
            return;
        };
        let nav = *app_state.navigation.read();
        let mut completion = app_state.completion.read().clone();
        completion.mark_module(nav.module);
        let next = after_assessment_pass(course, nav.module).target();
        let update = build_update(course, &completion, next);
        let percent = overall_progress(course, &completion);
        let course_id = course.id.clone();
        drop(course_ref);

        app_state.completion.set(completion);
        app_state.overall_progress.set(percent);
        app_state.navigation.set(next);
        if let Some(update) = update {
            let _ = cmd_tx_module.send(ApiCmd::PushProgress { course_id, update });
        }
    };

    // Sidebar clicks re-check locks even though locked rows are inert.
    let navigate_to = move |target: NavigationState| {
        let locked = {
            let completion = app_state.completion.read();
            match target.page {
                ActivePage::Assessment => is_module_locked(&completion, target.module),
                _ => is_topic_locked(&completion, target.module, target.topic),
            }
        };
        if locked {
            return;
        }
        app_state.navigation.set(target);
    };

    let mut set_page = move |page: ActivePage| {
        let nav = *app_state.navigation.read();
        app_state
            .navigation
            .set(NavigationState::at(nav.module, nav.topic, page));
    };

    let load = *app_state.course_load.read();
    match load {
        CourseLoad::Idle | CourseLoad::Loading => {
            return rsx! {
                div { class: "page-container py-8",
                    div { class: "empty-state",
                        div { class: "spinner" }
                        p { class: "empty-state-title", "Loading your course..." }
                    }
                }
            };
        }
        CourseLoad::Failed => {
            return rsx! {
                div { class: "page-container py-8",
                    div { class: "panel",
                        div { class: "empty-state",
                            div { class: "empty-state-icon", "📵" }
                            p { class: "empty-state-title", "We couldn't load your course." }
                            p { class: "empty-state-text",
                                "Check your connection, or contact support if you haven't been enrolled yet."
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| app_state.course_load.set(CourseLoad::Idle),
                                "Try Again"
                            }
                        }
                    }
                }
            };
        }
        CourseLoad::Ready => {}
    }

    let course_ref = app_state.course.read();
    let Some(course) = course_ref.as_ref() else {
        return rsx! {
            div { class: "page-container py-8",
                div { class: "alert alert-error", "Course data is missing. Please reload." }
            }
        };
    };
    let nav = *app_state.navigation.read();
    let progress = *app_state.overall_progress.read();

    let Some(module) = course.modules.get(nav.module) else {
        return rsx! {
            div { class: "page-container py-8",
                div { class: "alert alert-error", "This part of the course no longer exists." }
            }
        };
    };
    let topic = module.topics.get(nav.topic);
    let topic_done = app_state
        .completion
        .read()
        .is_topic_complete(nav.module, nav.topic);

    let content = match nav.page {
        ActivePage::Topic => {
            let Some(topic) = topic else {
                return rsx! {
                    div { class: "page-container py-8",
                        div { class: "alert alert-error", "This topic no longer exists." }
                    }
                };
            };
            let has_practice = topic.has_practice();
            let practice_count = topic.practice_questions.len();
            rsx! {
                div { class: "panel",
                    div { class: "panel-header",
                        h2 { class: "panel-title", "{topic.title}" }
                        if topic_done {
                            span { class: "badge badge-success", "Completed" }
                        }
                    }
                    p { class: "panel-lead", "{module.title} · {course.title}" }
                    if !module.description.is_empty() {
                        p { class: "module-description", "{module.description}" }
                    }
                    div { class: "topic-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| set_page(ActivePage::Html),
                            "View Lesson"
                        }
                        if has_practice {
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| set_page(ActivePage::Practice),
                                "Practice Questions ({practice_count})"
                            }
                        }
                    }
                }
            }
        }
        ActivePage::Html => {
            let Some(topic) = topic else {
                return rsx! {
                    div { class: "page-container py-8",
                        div { class: "alert alert-error", "This topic no longer exists." }
                    }
                };
            };
            rsx! {
                LessonContent {
                    key: "{nav.module}-{nav.topic}",
                    topic: topic.clone(),
                    on_back: move |_| set_page(ActivePage::Topic),
                    on_practice: move |_| set_page(ActivePage::Practice),
                    on_complete: complete_current_topic,
                }
            }
        }
        ActivePage::Practice => {
            let Some(topic) = topic else {
                return rsx! {
                    div { class: "page-container py-8",
                        div { class: "alert alert-error", "This topic no longer exists." }
                    }
                };
            };
            if topic.has_practice() {
                rsx! {
                    PracticePanel {
                        key: "{nav.module}-{nav.topic}-practice",
                        title: topic.title.clone(),
                        questions: topic.practice_questions.clone(),
                        passing_score: topic.passing_score,
                        on_pass: complete_current_topic,
                        on_review: move |_| set_page(ActivePage::Html),
                        on_back: move |_| set_page(ActivePage::Topic),
                    }
                }
            } else {
                rsx! {
                    div { class: "panel",
                        div { class: "empty-state",
                            p { class: "empty-state-title", "This topic has no practice questions." }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| set_page(ActivePage::Topic),
                                "Back to Overview"
                            }
                        }
                    }
                }
            }
        }
        ActivePage::Assessment => match &module.cat {
            Some(assessment) => rsx! {
                AssessmentPanel {
                    key: "{nav.module}-assessment",
                    assessment: assessment.clone(),
                    on_pass: complete_current_module,
                    on_review: move |_| set_page(ActivePage::Topic),
                    on_exit: move |_| set_page(ActivePage::Topic),
                }
            },
            None => rsx! {
                div { class: "panel",
                    div { class: "empty-state",
                        p { class: "empty-state-title", "This module has no assessment." }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| set_page(ActivePage::Topic),
                            "Back to Overview"
                        }
                    }
                }
            },
        },
    };

    rsx! {
        div { class: "page-container py-8 course-layout animate-fade-in",
            CourseSidebar { on_navigate: navigate_to }
            main { class: "course-content",
                if progress >= 100 {
                    div { class: "alert alert-success course-complete",
                        "🎉 You have completed every module in this course!"
                    }
                }
                {content}
            }
        }
    }
}
