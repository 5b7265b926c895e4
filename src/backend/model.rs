use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Course catalog entities as the backend serves them: camelCase fields,
/// Mongo-style `_id` keys. All of these are read-only to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
    /// Optional end-of-module assessment ("cat" in the backend schema).
    #[serde(default)]
    pub cat: Option<Assessment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// File name of the lesson markup on the content host, if any.
    #[serde(default)]
    pub html_content: Option<String>,
    #[serde(default)]
    pub practice_questions: Vec<Question>,
    #[serde(default = "default_passing_score")]
    pub passing_score: u8,
}

impl Topic {
    pub fn has_practice(&self) -> bool {
        !self.practice_questions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default = "default_passing_score")]
    pub passing_score: u8,
    /// Time limit in minutes.
    #[serde(default = "default_duration")]
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
}

fn default_passing_score() -> u8 {
    70
}

fn default_duration() -> u64 {
    30
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

// Response envelopes.

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub data: User,
}

/// Verification can return a fresh session when the code is accepted;
/// older backend versions send only a success flag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerifyResponse {
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentsResponse {
    pub count: usize,
    #[serde(default)]
    pub data: Vec<Enrollment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Enrollment {
    pub course: Course,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeResponse {
    pub data: ResumeData,
}

/// Last persisted progress for a course, as returned by
/// `GET /api/progress/course/:courseId/resume`. Every field is optional:
/// a fresh enrollment has none of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub current_module: Option<String>,
    pub current_topic: Option<String>,
    pub last_accessed_page: Option<String>,
    pub completed_modules: Vec<String>,
    pub completed_topics: Vec<CompletedTopicRef>,
    pub completed_assessments: Vec<String>,
    pub overall_progress: u8,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTopicRef {
    pub module_id: String,
    pub topic_id: String,
}

/// Body of `PUT /api/progress/course/:courseId`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub module_id: String,
    pub topic_id: String,
    pub page: String,
    pub completed_modules: Vec<String>,
    pub completed_topics: Vec<CompletedTopicRef>,
    pub completed_assessments: Vec<String>,
    pub overall_progress: u8,
}

// Request bodies for the auth endpoints.

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailForm {
    pub email: String,
    pub verification_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetWithCodeForm {
    pub email: String,
    pub reset_code: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Error body the backend sends on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_deserializes_backend_shape() {
        let json = r#"{
            "_id": "c1",
            "title": "Heritage Language 101",
            "description": "Introductory course",
            "modules": [{
                "_id": "m1",
                "title": "Greetings",
                "topics": [{
                    "_id": "t1",
                    "title": "Basic phrases",
                    "htmlContent": "greetings.html",
                    "practiceQuestions": [{
                        "question": "How do you say hello?",
                        "options": ["A", "B", "C"],
                        "correctAnswer": 1,
                        "explanation": "Because."
                    }],
                    "passingScore": 80
                }],
                "cat": {
                    "title": "Module one assessment",
                    "questions": [],
                    "passingScore": 75,
                    "duration": 10
                }
            }]
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, "c1");
        assert_eq!(course.modules.len(), 1);
        let module = &course.modules[0];
        assert_eq!(module.topics[0].passing_score, 80);
        assert_eq!(module.topics[0].practice_questions[0].correct_answer, 1);
        let cat = module.cat.as_ref().unwrap();
        assert_eq!(cat.duration, 10);
        assert_eq!(cat.passing_score, 75);
    }

    #[test]
    fn test_topic_defaults_apply() {
        let json = r#"{"_id": "t2", "title": "No extras"}"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert!(topic.html_content.is_none());
        assert!(!topic.has_practice());
        assert_eq!(topic.passing_score, 70);
    }

    #[test]
    fn test_unknown_role_falls_back() {
        let json = r#"{"_id": "u1", "email": "x@y.z", "role": "superuser"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Unknown);

        let json = r#"{"_id": "u2", "email": "a@b.c", "role": "student"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_progress_update_serializes_camel_case() {
        let update = ProgressUpdate {
            module_id: "m1".into(),
            topic_id: "t1".into(),
            page: "topic".into(),
            completed_modules: vec!["m1".into()],
            completed_topics: vec![CompletedTopicRef {
                module_id: "m1".into(),
                topic_id: "t1".into(),
            }],
            completed_assessments: vec!["m1".into()],
            overall_progress: 50,
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["moduleId"], "m1");
        assert_eq!(value["completedTopics"][0]["topicId"], "t1");
        assert_eq!(value["overallProgress"], 50);
    }

    #[test]
    fn test_resume_data_tolerates_missing_fields() {
        let resume: ResumeData = serde_json::from_str("{}").unwrap();
        assert!(resume.current_module.is_none());
        assert!(resume.completed_topics.is_empty());
        assert_eq!(resume.overall_progress, 0);
    }
}
