use std::collections::BTreeMap;

use crate::backend::model::Question;

/// Question index (within the displayed set) to selected option index.
/// Reset whenever the active module/topic/page changes or on retry.
pub type AnswerMap = BTreeMap<usize, usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerBreakdown {
    pub question_number: usize,
    /// Option letter, or "Not answered".
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub correct_count: usize,
    pub total: usize,
    pub percentage: u8,
    pub passed: bool,
    pub breakdown: Vec<AnswerBreakdown>,
}

impl ScoreReport {
    /// Explanations and the answer key are revealed only on a pass, so a
    /// failing attempt cannot copy the key before retrying.
    pub fn reveal_answers(&self) -> bool {
        self.passed
    }
}

/// Maps an option index to its display label: 0→A, 1→B, and so on.
pub fn option_letter(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}

/// Scores a question set against the selected answers. Unanswered
/// questions count as incorrect; an empty set scores zero percent.
pub fn evaluate(questions: &[Question], answers: &AnswerMap, passing_score: u8) -> ScoreReport {
    let mut correct_count = 0;
    let mut breakdown = Vec::with_capacity(questions.len());

    for (index, question) in questions.iter().enumerate() {
        let picked = answers.get(&index).copied();
        let is_correct = picked == Some(question.correct_answer);
        if is_correct {
            correct_count += 1;
        }
        breakdown.push(AnswerBreakdown {
            question_number: index + 1,
            user_answer: picked
                .map(option_letter)
                .unwrap_or_else(|| "Not answered".to_string()),
            correct_answer: option_letter(question.correct_answer),
            is_correct,
        });
    }

    let percentage = if questions.is_empty() {
        0
    } else {
        ((correct_count as f64 / questions.len() as f64) * 100.0).round() as u8
    };

    ScoreReport {
        correct_count,
        total: questions.len(),
        percentage,
        passed: percentage >= passing_score,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> Question {
        Question {
            question: "?".to_string(),
            options: vec!["one".into(), "two".into(), "three".into()],
            correct_answer: correct,
            explanation: String::new(),
        }
    }

    fn answers(picks: &[(usize, usize)]) -> AnswerMap {
        picks.iter().copied().collect()
    }

    #[test]
    fn test_two_of_three_fails_seventy_percent_threshold() {
        let questions = vec![question(1), question(0), question(2)];
        let picked = answers(&[(0, 1), (1, 0), (2, 1)]);

        let report = evaluate(&questions, &picked, 70);
        assert_eq!(report.correct_count, 2);
        assert_eq!(report.percentage, 67);
        assert!(!report.passed);
        assert!(!report.reveal_answers());
    }

    #[test]
    fn test_perfect_score_passes_and_reveals() {
        let questions = vec![question(1), question(0), question(2)];
        let picked = answers(&[(0, 1), (1, 0), (2, 2)]);

        let report = evaluate(&questions, &picked, 70);
        assert_eq!(report.percentage, 100);
        assert!(report.passed);
        assert!(report.reveal_answers());
    }

    #[test]
    fn test_empty_question_set_scores_zero() {
        let report = evaluate(&[], &AnswerMap::new(), 70);
        assert_eq!(report.percentage, 0);
        assert!(!report.passed);

        // A zero threshold is trivially met, even with no questions.
        let report = evaluate(&[], &AnswerMap::new(), 0);
        assert!(report.passed);
    }

    #[test]
    fn test_unanswered_questions_count_incorrect() {
        let questions = vec![question(0), question(1)];
        let picked = answers(&[(0, 0)]);

        let report = evaluate(&questions, &picked, 50);
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.percentage, 50);
        assert!(report.passed);
        assert_eq!(report.breakdown[1].user_answer, "Not answered");
        assert!(!report.breakdown[1].is_correct);
    }

    #[test]
    fn test_breakdown_uses_option_letters() {
        let questions = vec![question(2)];
        let picked = answers(&[(0, 0)]);

        let report = evaluate(&questions, &picked, 70);
        let row = &report.breakdown[0];
        assert_eq!(row.question_number, 1);
        assert_eq!(row.user_answer, "A");
        assert_eq!(row.correct_answer, "C");
    }

    #[test]
    fn test_identical_resubmission_reproduces_score() {
        let questions = vec![question(1), question(1)];
        let picked = answers(&[(0, 1), (1, 0)]);

        let first = evaluate(&questions, &picked, 60);
        let second = evaluate(&questions, &picked, 60);
        assert_eq!(first, second);
    }
}
