use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn AboutComponent() -> Element {
    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "panel",
                div { class: "panel-header",
                    h2 { class: "panel-title", "About Lingua" }
                }
                div { class: "prose",
                    p {
                        "Lingua exists for everyone who grew up hearing a language at home but never got the chance to learn it properly. We build structured courses for heritage languages that bigger platforms overlook."
                    }
                    p {
                        "Each course is written with native-speaking teachers and organized into modules you work through in order. Topics pair a written lesson with practice questions, and every module closes with a timed assessment so you can see your progress is real."
                    }
                    p {
                        "We keep the experience honest: answers stay hidden until you pass, and nothing unlocks until you have earned it. It is slower than tapping through flashcards, and it works."
                    }
                }
            }

            div { class: "panel",
                div { class: "panel-header",
                    h2 { class: "panel-title", "How a course works" }
                }
                ol { class: "steps-list",
                    li { "Read the lesson for the current topic." }
                    li { "Pass the topic's practice questions to unlock the next topic." }
                    li { "Finish the module's timed assessment to unlock the next module." }
                    li { "Resume any time. Your place and progress are saved automatically." }
                }
                Link { to: Route::RegisterComponent {}, class: "btn btn-primary", "Join Lingua" }
            }
        }
    }
}
