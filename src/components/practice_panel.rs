use dioxus::prelude::*;

use crate::backend::model::Question;
use crate::progress::{evaluate, AnswerMap, ScoreReport};
use crate::progress::scoring::option_letter;

/// One multiple-choice question. `show_answers` marks the key and the
/// student's pick; selection is inert once `locked`.
#[component]
pub fn QuestionCard(
    index: usize,
    question: Question,
    selected: Option<usize>,
    locked: bool,
    show_answers: bool,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "question-card",
            div { class: "question-text",
                span { class: "question-number", "{index + 1}." }
                "{question.question}"
            }
            div { class: "option-list",
                for (option_index, option) in question.options.iter().enumerate() {
                    {
                        let is_selected = selected == Some(option_index);
                        let is_correct = option_index == question.correct_answer;
                        let class = if show_answers && is_correct {
                            "option-row option-correct"
                        } else if show_answers && is_selected {
                            "option-row option-wrong"
                        } else if is_selected {
                            "option-row option-selected"
                        } else {
                            "option-row"
                        };
                        rsx! {
                            button {
                                class: "{class}",
                                disabled: locked,
                                onclick: move |_| on_select.call(option_index),
                                span { class: "option-letter", "{option_letter(option_index)}" }
                                span { class: "option-text", "{option}" }
                            }
                        }
                    }
                }
            }
            if show_answers && !question.explanation.is_empty() {
                div { class: "explanation",
                    strong { "Why: " }
                    "{question.explanation}"
                }
            }
        }
    }
}

/// Result card shown after a submission. The per-question answer table
/// only appears when the attempt passed.
#[component]
pub fn ScoreSummary(
    report: ScoreReport,
    passing_score: u8,
    pass_label: String,
    on_continue: EventHandler<()>,
    on_retry: EventHandler<()>,
    on_review: EventHandler<()>,
) -> Element {
    let banner_class = if report.passed {
        "score-banner score-pass"
    } else {
        "score-banner score-fail"
    };

    rsx! {
        div { class: "score-summary",
            div { class: "{banner_class}",
                div { class: "score-percent", "{report.percentage}%" }
                div { class: "score-detail",
                    "{report.correct_count} of {report.total} correct. Pass mark: {passing_score}%."
                }
                if report.passed {
                    p { class: "score-message", "Well done! You can move on." }
                } else {
                    p { class: "score-message",
                        "Not quite there yet. Review the material and try again."
                    }
                }
            }

            if report.reveal_answers() {
                table { class: "breakdown-table",
                    thead {
                        tr {
                            th { "Question" }
                            th { "Your answer" }
                            th { "Correct answer" }
                            th { "" }
                        }
                    }
                    tbody {
                        for row in report.breakdown.iter() {
                            tr {
                                td { "{row.question_number}" }
                                td { "{row.user_answer}" }
                                td { "{row.correct_answer}" }
                                td {
                                    if row.is_correct {
                                        span { class: "badge badge-success", "✓" }
                                    } else {
                                        span { class: "badge badge-error", "✗" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "score-actions",
                if report.passed {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_continue.call(()),
                        "{pass_label}"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_retry.call(()),
                        "Try Again"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_review.call(()),
                        "Review Lesson"
                    }
                }
            }
        }
    }
}

/// Practice questions for a topic. Submission requires every question to
/// be answered; a passing score advances the course.
#[component]
pub fn PracticePanel(
    title: String,
    questions: Vec<Question>,
    passing_score: u8,
    on_pass: EventHandler<()>,
    on_review: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let mut answers = use_signal(AnswerMap::new);
    let mut report = use_signal(|| None::<ScoreReport>);

    let all_answered = {
        let picked = answers.read();
        (0..questions.len()).all(|index| picked.contains_key(&index))
    };

    let questions_submit = questions.clone();
    let on_submit = move |_| {
        if report.read().is_some() {
            return;
        }
        let scored = evaluate(&questions_submit, &answers.read(), passing_score);
        report.set(Some(scored));
    };

    let on_retry = move |_| {
        answers.set(AnswerMap::new());
        report.set(None);
    };

    let scored = report.read().clone();

    rsx! {
        div { class: "panel quiz-panel",
            div { class: "panel-header",
                h2 { class: "panel-title", "Practice: {title}" }
                span { class: "badge", "Pass mark {passing_score}%" }
            }

            match scored {
                Some(scored) => rsx! {
                    ScoreSummary {
                        report: scored.clone(),
                        passing_score,
                        pass_label: "Continue".to_string(),
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
                            onclick: on_submit,
                            "Submit Answers"
                        }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| on_back.call(()),
                            "Back to Overview"
                        }
                    }
                }
            }
        }
    }
}
