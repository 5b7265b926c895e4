use serde::{Deserialize, Serialize};

use crate::backend::model::Course;

/// Which pane of the course view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivePage {
    Topic,
    Html,
    Practice,
    Assessment,
}

impl ActivePage {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivePage::Topic => "topic",
            ActivePage::Html => "html",
            ActivePage::Practice => "practice",
            ActivePage::Assessment => "assessment",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "topic" => Some(ActivePage::Topic),
            "html" => Some(ActivePage::Html),
            "practice" => Some(ActivePage::Practice),
            "assessment" => Some(ActivePage::Assessment),
            _ => None,
        }
    }
}

/// Active position in the course. Owned by the course page; everything
/// else reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub module: usize,
    pub topic: usize,
    pub page: ActivePage,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState::at(0, 0, ActivePage::Topic)
    }
}

impl NavigationState {
    pub fn at(module: usize, topic: usize, page: ActivePage) -> Self {
        Self { module, topic, page }
    }
}

/// Where a passing submission sends the student next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextTopic { module: usize, topic: usize },
    Assessment { module: usize },
    NextModule { module: usize },
    CourseComplete,
}

impl Advance {
    pub fn target(self) -> NavigationState {
        match self {
            Advance::NextTopic { module, topic } => {
                NavigationState::at(module, topic, ActivePage::Topic)
            }
            Advance::Assessment { module } => {
                NavigationState::at(module, 0, ActivePage::Assessment)
            }
            Advance::NextModule { module } => NavigationState::at(module, 0, ActivePage::Topic),
            // Back to the start; the course page shows the completed state.
            Advance::CourseComplete => NavigationState::default(),
        }
    }
}

/// Next step after passing a topic's practice questions: the next topic
/// in the module, else the module assessment, else the next module.
pub fn after_topic_pass(course: &Course, module: usize, topic: usize) -> Advance {
    let Some(current) = course.modules.get(module) else {
        return Advance::CourseComplete;
    };

    if topic + 1 < current.topics.len() {
        Advance::NextTopic {
            module,
            topic: topic + 1,
        }
    } else if current.cat.is_some() {
        Advance::Assessment { module }
    } else if module + 1 < course.modules.len() {
        Advance::NextModule { module: module + 1 }
    } else {
        Advance::CourseComplete
    }
}

/// Next step after passing a module assessment.
pub fn after_assessment_pass(course: &Course, module: usize) -> Advance {
    if module + 1 < course.modules.len() {
        Advance::NextModule { module: module + 1 }
    } else {
        Advance::CourseComplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::model::{Assessment, Module, Topic};

    fn topic(id: &str) -> Topic {
        Topic {
            id: id.to_string(),
            title: id.to_string(),
            html_content: None,
            practice_questions: vec![],
            passing_score: 70,
        }
    }

    fn module(id: &str, topics: usize, cat: bool) -> Module {
        Module {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            topics: (0..topics).map(|i| topic(&format!("{id}-t{i}"))).collect(),
            cat: cat.then(|| Assessment {
                title: format!("{id} assessment"),
                questions: vec![],
                passing_score: 70,
                duration: 10,
            }),
        }
    }

    fn course(modules: Vec<Module>) -> Course {
        Course {
            id: "c1".to_string(),
            title: "Course".to_string(),
            description: String::new(),
            modules,
        }
    }

    #[test]
    fn test_mid_module_advances_to_next_topic() {
        let course = course(vec![module("m0", 3, false)]);
        assert_eq!(
            after_topic_pass(&course, 0, 0),
            Advance::NextTopic { module: 0, topic: 1 }
        );
    }

    #[test]
    fn test_last_topic_with_assessment_goes_to_assessment() {
        let course = course(vec![module("m0", 2, true), module("m1", 1, false)]);
        assert_eq!(
            after_topic_pass(&course, 0, 1),
            Advance::Assessment { module: 0 }
        );
    }

    #[test]
    fn test_last_topic_without_assessment_goes_to_next_module() {
        let course = course(vec![module("m0", 2, false), module("m1", 1, false)]);
        assert_eq!(
            after_topic_pass(&course, 0, 1),
            Advance::NextModule { module: 1 }
        );
    }

    #[test]
    fn test_final_topic_of_course_completes() {
        let course = course(vec![module("m0", 1, false)]);
        assert_eq!(after_topic_pass(&course, 0, 0), Advance::CourseComplete);
        assert_eq!(
            Advance::CourseComplete.target(),
            NavigationState::default()
        );
    }

    #[test]
    fn test_assessment_pass_advances_module_or_completes() {
        let course = course(vec![module("m0", 1, true), module("m1", 1, true)]);
        assert_eq!(
            after_assessment_pass(&course, 0),
            Advance::NextModule { module: 1 }
        );
        assert_eq!(after_assessment_pass(&course, 1), Advance::CourseComplete);
    }

    #[test]
    fn test_page_round_trips_through_wire_string() {
        for page in [
            ActivePage::Topic,
            ActivePage::Html,
            ActivePage::Practice,
            ActivePage::Assessment,
        ] {
            assert_eq!(ActivePage::parse(page.as_str()), Some(page));
        }
        assert_eq!(ActivePage::parse("dashboard"), None);
    }
}
