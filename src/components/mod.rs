pub mod about_page;
pub mod assessment_panel;
pub mod contact_page;
pub mod course_page;
pub mod course_sidebar;
pub mod forgot_password_page;
pub mod home_page;
pub mod lesson_content;
pub mod login_page;
pub mod nav_bar;
pub mod practice_panel;
pub mod protected_route;
pub mod register_page;
pub mod reset_password_page;
pub mod verify_email_page;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::backend::model::{Course, User};
use crate::progress::{CompletionState, NavigationState};

/// Lifecycle of the enrolled-course load. `Idle` triggers a load as soon
/// as a signed-in user is known; retry resets to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseLoad {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub user: Signal<Option<User>>,
    /// False until the stored token has been checked against the backend.
    pub session_checked: Signal<bool>,
    pub course: Signal<Option<Course>>,
    pub course_load: Signal<CourseLoad>,
    pub completion: Signal<CompletionState>,
    pub overall_progress: Signal<u8>,
    pub navigation: Signal<NavigationState>,
    /// When the backend last saved this student's progress.
    pub progress_saved_at: Signal<Option<DateTime<Utc>>>,
    pub lesson_html: Signal<Option<String>>,
    pub lesson_error: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user: use_signal(|| None),
            session_checked: use_signal(|| false),
            course: use_signal(|| None),
            course_load: use_signal(|| CourseLoad::Idle),
            completion: use_signal(CompletionState::new),
            overall_progress: use_signal(|| 0),
            navigation: use_signal(NavigationState::default),
            progress_saved_at: use_signal(|| None),
            lesson_html: use_signal(|| None),
            lesson_error: use_signal(|| None),
        }
    }

    /// Clears everything tied to the signed-in user.
    pub fn reset_session(&mut self) {
        self.user.set(None);
        self.course.set(None);
        self.course_load.set(CourseLoad::Idle);
        self.completion.set(CompletionState::new());
        self.overall_progress.set(0);
        self.navigation.set(NavigationState::default());
        self.progress_saved_at.set(None);
        self.lesson_html.set(None);
        self.lesson_error.set(None);
    }
}
