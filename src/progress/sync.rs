use crate::backend::model::{CompletedTopicRef, Course, ProgressUpdate, ResumeData};

use super::nav::{ActivePage, NavigationState};
use super::unlock::CompletionState;

/// Completed items over total items, where every topic counts once and
/// every module with an assessment contributes one extra unit.
pub fn overall_progress(course: &Course, completion: &CompletionState) -> u8 {
    let mut total = 0usize;
    let mut done = 0usize;

    for (module_index, module) in course.modules.iter().enumerate() {
        total += module.topics.len();
        done += (0..module.topics.len())
            .filter(|&topic| completion.is_topic_complete(module_index, topic))
            .count();

        if module.cat.is_some() {
            total += 1;
            if completion.is_module_complete(module_index) {
                done += 1;
            }
        }
    }

    if total == 0 {
        0
    } else {
        ((done as f64 / total as f64) * 100.0).round() as u8
    }
}

/// Assembles the progress payload for the backend, resolving local
/// indices to the course's backend-stable ids. Walks the course in order
/// so the payload is deterministic. Returns `None` only when the active
/// module index is out of range.
pub fn build_update(
    course: &Course,
    completion: &CompletionState,
    nav: NavigationState,
) -> Option<ProgressUpdate> {
    let active_module = course.modules.get(nav.module)?;
    let topic_id = active_module
        .topics
        .get(nav.topic)
        .map(|topic| topic.id.clone())
        .unwrap_or_default();

    let mut completed_modules = Vec::new();
    let mut completed_topics = Vec::new();
    let mut completed_assessments = Vec::new();

    for (module_index, module) in course.modules.iter().enumerate() {
        if completion.is_module_complete(module_index) {
            completed_modules.push(module.id.clone());
            // The backend treats a completed module as a passed assessment.
            completed_assessments.push(module.id.clone());
        }
        for (topic_index, topic) in module.topics.iter().enumerate() {
            if completion.is_topic_complete(module_index, topic_index) {
                completed_topics.push(CompletedTopicRef {
                    module_id: module.id.clone(),
                    topic_id: topic.id.clone(),
                });
            }
        }
    }

    Some(ProgressUpdate {
        module_id: active_module.id.clone(),
        topic_id,
        page: nav.page.as_str().to_string(),
        completed_modules,
        completed_topics,
        completed_assessments,
        overall_progress: overall_progress(course, completion),
    })
}

/// Rebuilds local state from a persisted payload. Ids that no longer
/// exist in the course are skipped. Practice/assessment pages are not
/// resumable (their in-flight answers were never persisted), so those
/// fall back to the topic overview.
pub fn restore(course: &Course, resume: &ResumeData) -> (CompletionState, NavigationState) {
    let mut completion = CompletionState::new();

    for module_id in &resume.completed_modules {
        if let Some(module_index) = module_index_of(course, module_id) {
            completion.mark_module(module_index);
        }
    }
    for topic_ref in &resume.completed_topics {
        if let Some(module_index) = module_index_of(course, &topic_ref.module_id) {
            if let Some(topic_index) = topic_index_of(course, module_index, &topic_ref.topic_id) {
                completion.mark_topic(module_index, topic_index);
            }
        }
    }

    let module = resume
        .current_module
        .as_deref()
        .and_then(|id| module_index_of(course, id))
        .unwrap_or(0);
    let topic = resume
        .current_topic
        .as_deref()
        .and_then(|id| topic_index_of(course, module, id))
        .unwrap_or(0);
    let page = resume
        .last_accessed_page
        .as_deref()
        .and_then(ActivePage::parse)
        .filter(|page| matches!(page, ActivePage::Topic | ActivePage::Html))
        .unwrap_or(ActivePage::Topic);

    (completion, NavigationState::at(module, topic, page))
}

fn module_index_of(course: &Course, module_id: &str) -> Option<usize> {
    course.modules.iter().position(|m| m.id == module_id)
}

fn topic_index_of(course: &Course, module_index: usize, topic_id: &str) -> Option<usize> {
    course
        .modules
        .get(module_index)?
        .topics
        .iter()
        .position(|t| t.id == topic_id)
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

    fn sample_course() -> Course {
        Course {
            id: "c1".to_string(),
            title: "Course".to_string(),
            description: String::new(),
            modules: vec![
                Module {
                    id: "m0".to_string(),
                    title: "First".to_string(),
                    description: String::new(),
                    topics: vec![topic("m0-t0"), topic("m0-t1")],
                    cat: Some(Assessment {
                        title: "First assessment".to_string(),
                        questions: vec![],
                        passing_score: 70,
                        duration: 10,
                    }),
                },
                Module {
                    id: "m1".to_string(),
                    title: "Second".to_string(),
                    description: String::new(),
                    topics: vec![topic("m1-t0")],
                    cat: None,
                },
            ],
        }
    }

    #[test]
    fn test_overall_progress_counts_assessments_as_items() {
        let course = sample_course();
        let mut completion = CompletionState::new();
        // 2 topics + 1 assessment + 1 topic = 4 items total.
        assert_eq!(overall_progress(&course, &completion), 0);

        completion.mark_topic(0, 0);
        assert_eq!(overall_progress(&course, &completion), 25);

        completion.mark_topic(0, 1);
        completion.mark_module(0);
        assert_eq!(overall_progress(&course, &completion), 75);

        completion.mark_topic(1, 0);
        assert_eq!(overall_progress(&course, &completion), 100);
    }

    #[test]
    fn test_build_update_resolves_ids_in_course_order() {
        let course = sample_course();
        let mut completion = CompletionState::new();
        completion.mark_topic(0, 0);
        completion.mark_topic(0, 1);
        completion.mark_module(0);

        let nav = NavigationState::at(1, 0, ActivePage::Topic);
        let update = build_update(&course, &completion, nav).unwrap();

        assert_eq!(update.module_id, "m1");
        assert_eq!(update.topic_id, "m1-t0");
        assert_eq!(update.page, "topic");
        assert_eq!(update.completed_modules, vec!["m0"]);
        assert_eq!(update.completed_assessments, vec!["m0"]);
        assert_eq!(
            update
                .completed_topics
                .iter()
                .map(|t| t.topic_id.as_str())
                .collect::<Vec<_>>(),
            vec!["m0-t0", "m0-t1"]
        );
        assert_eq!(update.overall_progress, 75);
    }

    #[test]
    fn test_restore_round_trips_completion() {
        let course = sample_course();
        let mut completion = CompletionState::new();
        completion.mark_topic(0, 0);
        completion.mark_topic(0, 1);
        completion.mark_module(0);

        let nav = NavigationState::at(1, 0, ActivePage::Html);
        let update = build_update(&course, &completion, nav).unwrap();

        let resume = ResumeData {
            current_module: Some(update.module_id.clone()),
            current_topic: Some(update.topic_id.clone()),
            last_accessed_page: Some(update.page.clone()),
            completed_modules: update.completed_modules.clone(),
            completed_topics: update.completed_topics.clone(),
            completed_assessments: update.completed_assessments.clone(),
            overall_progress: update.overall_progress,
            updated_at: None,
        };

        let (restored, restored_nav) = restore(&course, &resume);
        assert_eq!(restored, completion);
        assert_eq!(restored_nav, nav);
    }

    #[test]
    fn test_restore_ignores_stale_ids() {
        let course = sample_course();
        let resume = ResumeData {
            current_module: Some("gone".to_string()),
            completed_modules: vec!["gone".to_string(), "m0".to_string()],
            completed_topics: vec![CompletedTopicRef {
                module_id: "m0".to_string(),
                topic_id: "deleted-topic".to_string(),
            }],
            ..ResumeData::default()
        };

        let (completion, nav) = restore(&course, &resume);
        assert!(completion.is_module_complete(0));
        assert!(!completion.is_topic_complete(0, 0));
        assert_eq!(nav, NavigationState::default());
    }

    #[test]
    fn test_restore_does_not_resume_into_quiz_pages() {
        let course = sample_course();
        let resume = ResumeData {
            current_module: Some("m0".to_string()),
            current_topic: Some("m0-t1".to_string()),
            last_accessed_page: Some("assessment".to_string()),
            ..ResumeData::default()
        };

        let (_, nav) = restore(&course, &resume);
        assert_eq!(nav, NavigationState::at(0, 1, ActivePage::Topic));
    }

    #[test]
    fn test_empty_resume_is_fresh_start() {
        let course = sample_course();
        let (completion, nav) = restore(&course, &ResumeData::default());
        assert!(completion.is_empty());
        assert_eq!(nav, NavigationState::default());
    }
}
