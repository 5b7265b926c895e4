//! Backend integration: wire model, HTTP client, session storage, and
//! the command worker the UI talks to over channels.

pub mod api;
pub mod model;
pub mod session;

use tokio::sync::mpsc;
use tracing::{info, warn};

use api::{ApiClient, ApiError};
use model::{Course, ProgressUpdate, ResumeData, User};

/// Commands from the UI to the worker.
#[derive(Debug)]
pub enum ApiCmd {
    /// Validate any stored token and report who is signed in.
    VerifySession,
    /// Load the user's enrolled course plus saved progress.
    LoadCourse { user_id: String },
    /// Fetch a lesson document from the content host.
    FetchLesson { file: String },
    /// Persist the current progress snapshot. Fire and forget.
    PushProgress {
        course_id: String,
        update: ProgressUpdate,
    },
    /// Drop stored credentials.
    Logout,
}

/// Events from the worker back to the UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    SessionVerified(Option<User>),
    CourseLoaded {
        course: Box<Course>,
        resume: Option<ResumeData>,
    },
    CourseLoadFailed,
    LessonLoaded(String),
    LessonFailed(String),
}

pub struct ApiWorker {
    client: ApiClient,
    cmd_rx: mpsc::UnboundedReceiver<ApiCmd>,
    event_tx: mpsc::UnboundedSender<ApiEvent>,
}

impl ApiWorker {
    pub fn new(
        client: ApiClient,
        cmd_rx: mpsc::UnboundedReceiver<ApiCmd>,
        event_tx: mpsc::UnboundedSender<ApiEvent>,
    ) -> Self {
        Self {
            client,
            cmd_rx,
            event_tx,
        }
    }

    pub async fn run(mut self) {
        info!("api worker started");
        while let Some(cmd) = self.cmd_rx.recv().await {
            self.handle(cmd).await;
        }
        info!("api worker stopped");
    }

    async fn handle(&mut self, cmd: ApiCmd) {
        match cmd {
            ApiCmd::VerifySession => {
                if session::token().is_none() {
                    self.send(ApiEvent::SessionVerified(None));
                    return;
                }
                match self.client.me().await {
                    Ok(user) => self.send(ApiEvent::SessionVerified(Some(user))),
                    Err(err) => {
                        warn!("stored session rejected: {err}");
                        session::clear();
                        self.send(ApiEvent::SessionVerified(None));
                    }
                }
            }
            ApiCmd::LoadCourse { user_id } => match self.client.enrolled_course(&user_id).await {
                Ok(Some(course)) => {
                    let resume = match self.client.resume(&course.id).await {
                        Ok(resume) => Some(resume),
                        Err(err) => {
                            // A missing record just means a fresh start.
                            info!("no saved progress for course {}: {err}", course.id);
                            None
                        }
                    };
                    self.send(ApiEvent::CourseLoaded {
                        course: Box::new(course),
                        resume,
                    });
                }
                Ok(None) => {
                    warn!("user {user_id} has no course enrollment");
                    self.send(ApiEvent::CourseLoadFailed);
                }
                Err(err) => {
                    warn!("course load failed: {err}");
                    self.send(ApiEvent::CourseLoadFailed);
                }
            },
            ApiCmd::FetchLesson { file } => match self.client.lesson_html(&file).await {
                Ok(html) => self.send(ApiEvent::LessonLoaded(html)),
                Err(err) => {
                    warn!("lesson fetch failed for {file}: {err}");
                    self.send(ApiEvent::LessonFailed(lesson_error_message(&err)));
                }
            },
            ApiCmd::PushProgress { course_id, update } => {
                if let Err(err) = self.client.push_progress(&course_id, &update).await {
                    // The next successful push carries the full snapshot,
                    // so a dropped one self-heals.
                    warn!("progress push failed for course {course_id}: {err}");
                }
            }
            ApiCmd::Logout => {
                session::clear();
                self.send(ApiEvent::SessionVerified(None));
            }
        }
    }

    fn send(&self, event: ApiEvent) {
        let _ = self.event_tx.send(event);
    }
}

fn lesson_error_message(err: &ApiError) -> String {
    if err.is_forbidden() {
        "Access to this lesson was denied. Please log out and back in.".to_string()
    } else if err.is_unauthorized() {
        "Your session has expired. Please log in again.".to_string()
    } else if err.is_not_found() {
        "This lesson's content could not be found.".to_string()
    } else {
        "Failed to load lesson content. Please try again.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn status_error(status: StatusCode) -> ApiError {
        ApiError::Status {
            status,
            message: None,
        }
    }

    #[test]
    fn test_lesson_error_messages_by_status() {
        assert!(lesson_error_message(&status_error(StatusCode::FORBIDDEN)).contains("denied"));
        assert!(lesson_error_message(&status_error(StatusCode::UNAUTHORIZED)).contains("expired"));
        assert!(lesson_error_message(&status_error(StatusCode::NOT_FOUND)).contains("found"));
        assert!(
            lesson_error_message(&status_error(StatusCode::INTERNAL_SERVER_ERROR))
                .contains("try again")
        );
    }

    #[tokio::test]
    async fn test_worker_logout_clears_session_and_reports() {
        session::store_credentials("tok", model::Role::Student);

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let client = ApiClient::new("http://localhost:1", "http://localhost:1");
        let worker = ApiWorker::new(client, cmd_rx, event_tx);

        cmd_tx.send(ApiCmd::Logout).expect("send");
        drop(cmd_tx);
        worker.run().await;

        assert!(session::token().is_none());
        match event_rx.recv().await {
            Some(ApiEvent::SessionVerified(None)) => {}
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
