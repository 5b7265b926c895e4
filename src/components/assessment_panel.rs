use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::backend::model::Assessment;
use crate::components::practice_panel::{QuestionCard, ScoreSummary};
use crate::progress::{evaluate, AnswerMap, ScoreReport};

/// Timed end-of-module assessment. The clock starts on mount, turns
/// into a warning under a minute, and submits whatever is answered when
/// it reaches zero. Retrying resets both the answers and the clock.
#[component]
pub fn AssessmentPanel(
    assessment: Assessment,
    on_pass: EventHandler<()>,
    on_review: EventHandler<()>,
    on_exit: EventHandler<()>,
) -> Element {
    let total_seconds = assessment.duration.saturating_mul(60);
    let passing_score = assessment.passing_score;
    let questions = assessment.questions.clone();

    let mut answers = use_signal(AnswerMap::new);
    let mut report = use_signal(|| None::<ScoreReport>);
    let mut remaining = use_signal(|| total_seconds);
    let mut attempt = use_signal(|| 0u32);

    let submit = use_callback({
        let questions = questions.clone();
        move |_: ()| {
            if report.read().is_some() {
                return;
            }
            let scored = evaluate(&questions, &answers.read(), passing_score);
            report.set(Some(scored));
        }
    });

    // Countdown loop. A retry bumps `attempt`, which reruns the effect
    // and orphans the old loop; submission stops the ticking. Leaving
    // the page drops the scope and its task with it.
    use_effect(move || {
        let run = attempt();
        spawn(async move {
            loop {
                sleep(Duration::from_secs(1)).await;
                if attempt() != run || report.read().is_some() {
                    break;
                }
                let left = remaining();
                if left <= 1 {
                    remaining.set(0);
                    submit.call(());
                    break;
                }
                remaining.set(left - 1);
            }
        });
    });

    let all_answered = {
        let picked = answers.read();
        (0..questions.len()).all(|index| picked.contains_key(&index))
    };

    let on_retry = move |_| {
        answers.set(AnswerMap::new());
        report.set(None);
        remaining.set(total_seconds);
        attempt.set(attempt() + 1);
    };

    let scored = report.read().clone();
    let seconds_left = remaining();
    let timer_class = if scored.is_none() && seconds_left < 60 {
        "assessment-timer timer-warning"
    } else {
        "assessment-timer"
    };

    rsx! {
        div { class: "panel quiz-panel",
            div { class: "panel-header",
                h2 { class: "panel-title", "{assessment.title}" }
                if scored.is_none() {
                    span { class: "{timer_class}", "{format_time(seconds_left)}" }
                }
            }
            div { class: "quiz-meta",
                span { class: "badge", "Pass mark {passing_score}%" }
                span { class: "badge", "{questions.len()} questions" }
                span { class: "badge", "{assessment.duration} minutes" }
            }

            match scored {
                Some(scored) => rsx! {
                    if seconds_left == 0 && !scored.passed {
                        div { class: "alert alert-error", "Time ran out. Your answers were submitted as they were." }
                    }
                    ScoreSummary {
                        report: scored.clone(),
                        passing_score,
                        pass_label: "Continue to Next Module".to_string(),
                        on_continue: move |_| on_pass.call(()),
                        on_retry: on_retry,
                        on_review: move |_| on_review.call(()),
                    }
                    if scored.reveal_answers() {
                        div { class: "question-review",
                            for (index, question) in questions.iter().enumerate() {
                                QuestionCard {
                                    index,
                                    question: question.clone(),
                                    selected: answers.read().get(&index).copied(),
                                    locked: true,
                                    show_answers: true,
                                    on_select: move |_| {},
                                }
                            }
                        }
                    }
                },
                None => rsx! {
                    for (index, question) in questions.iter().enumerate() {
                        QuestionCard {
                            index,
                            question: question.clone(),
                            selected: answers.read().get(&index).copied(),
                            locked: false,
                            show_answers: false,
                            on_select: move |option| {
                                answers.write().insert(index, option);
                            },
                        }
                    }
                    div { class: "quiz-actions",
                        button {
                            class: "btn btn-primary",
                            disabled: !all_answered,
                            onclick: move |_| submit.call(()),
                            "Submit Assessment"
                        }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| on_exit.call(()),
                            "Exit Without Submitting"
                        }
                    }
                }
            }
        }
    }
}

fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(1800), "30:00");
        assert_eq!(format_time(3599), "59:59");
    }
}
