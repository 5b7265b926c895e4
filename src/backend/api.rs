//! HTTP client for the platform backend and the lesson content host.
//!
//! All auth-gated calls attach the stored bearer token. Non-2xx
//! responses are folded into [`ApiError`] with whatever message the
//! backend put in the body, so the UI can show it verbatim.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;

use super::model::{
    AuthResponse, Course, EnrollmentsResponse, ErrorBody, LoginForm, MeResponse, MessageResponse,
    ProgressUpdate, RegisterForm, ResetWithCodeForm, ResumeData, ResumeResponse, User,
    VerifyEmailForm, VerifyResponse,
};
use super::session;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_CONTENT_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", status_message(.status, .message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

fn status_message(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("request failed with status {status}"),
    }
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(StatusCode::FORBIDDEN)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// The backend's message if it sent one, otherwise the caller's
    /// fallback text.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    content_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, content_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            content_url: content_url.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoints are baked in at compile time, matching how the rest of
    /// the deployment pipeline configures clients.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("LINGUA_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("LINGUA_CONTENT_URL").unwrap_or(DEFAULT_CONTENT_URL),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message);
        Err(ApiError::Status { status, message })
    }

    async fn get_authed(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let mut request = self.http.get(url);
        if let Some(token) = session::token() {
            request = request.bearer_auth(token);
        }
        Self::check(request.send().await?).await
    }

    // Auth endpoints.

    pub async fn register(&self, form: &RegisterForm) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(form)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Logs in and stores the returned credentials for later requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&LoginForm {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let auth: AuthResponse = Self::check(response).await?.json().await?;
        session::store_credentials(&auth.token, auth.user.role);
        Ok(auth.user)
    }

    /// Confirms the emailed verification code. When the backend signs
    /// the user in as part of verification, the session is stored and
    /// the user returned.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<Option<User>, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/verifyemail"))
            .json(&VerifyEmailForm {
                email: email.to_string(),
                verification_code: code.to_string(),
            })
            .send()
            .await?;
        let verified: VerifyResponse = Self::check(response).await?.json().await?;
        if let (Some(token), Some(user)) = (&verified.token, &verified.user) {
            session::store_credentials(token, user.role);
        }
        Ok(verified.user)
    }

    pub async fn resend_verification(&self, email: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/resendverification"))
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Requests a reset code for the address. Returns the backend's
    /// confirmation message, which intentionally does not reveal whether
    /// the address exists.
    pub async fn forgot_password(&self, email: &str) -> Result<Option<String>, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/forgotpassword"))
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;
        let body: MessageResponse = Self::check(response).await?.json().await?;
        Ok(body.message)
    }

    pub async fn reset_password_with_code(&self, form: &ResetWithCodeForm) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/resetpassword"))
            .json(form)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn reset_password_with_token(
        &self,
        reset_token: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/api/auth/resetpassword/{reset_token}")))
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Validates the stored token against the backend and returns the
    /// signed-in user.
    pub async fn me(&self) -> Result<User, ApiError> {
        let response = self.get_authed(&self.url("/api/auth/me")).await?;
        let body: MeResponse = response.json().await?;
        Ok(body.data)
    }

    // Course and progress endpoints.

    /// The student's enrolled course. Students hold a single enrollment;
    /// `None` means they have not been enrolled yet.
    pub async fn enrolled_course(&self, user_id: &str) -> Result<Option<Course>, ApiError> {
        let url = self.url(&format!("/api/enrollments/user/{user_id}/courses"));
        let response = self.get_authed(&url).await?;
        let body: EnrollmentsResponse = response.json().await?;
        Ok(body.data.into_iter().next().map(|e| e.course))
    }

    pub async fn resume(&self, course_id: &str) -> Result<ResumeData, ApiError> {
        let url = self.url(&format!("/api/progress/course/{course_id}/resume"));
        let response = self.get_authed(&url).await?;
        let body: ResumeResponse = response.json().await?;
        Ok(body.data)
    }

    pub async fn push_progress(
        &self,
        course_id: &str,
        update: &ProgressUpdate,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/progress/course/{course_id}"));
        let mut request = self.http.put(&url).json(update);
        if let Some(token) = session::token() {
            request = request.bearer_auth(token);
        }
        Self::check(request.send().await?).await?;
        Ok(())
    }

    /// Fetches a lesson document from the content host. The host rejects
    /// tokens it considers stale with 403, so one forbidden response
    /// triggers a session revalidation and a single retry.
    pub async fn lesson_html(&self, file: &str) -> Result<String, ApiError> {
        let url = format!("{}/templates/{}", self.content_url, file);
        match self.get_authed(&url).await {
            Ok(response) => Ok(response.text().await?),
            Err(err) if err.is_forbidden() => {
                warn!("lesson fetch forbidden, revalidating session and retrying");
                self.me().await?;
                Ok(self.get_authed(&url).await?.text().await?)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:5000/", "http://cdn.example/");
        assert_eq!(client.url("/api/auth/me"), "http://localhost:5000/api/auth/me");
        assert_eq!(client.content_url, "http://cdn.example");
    }

    #[test]
    fn test_error_prefers_backend_message() {
        let err = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.message_or("fallback"), "Email already registered");

        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            message: None,
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.message_or("Invalid credentials"), "Invalid credentials");
    }

    #[test]
    fn test_status_helpers() {
        let err = ApiError::Status {
            status: StatusCode::FORBIDDEN,
            message: None,
        };
        assert!(err.is_forbidden());
        assert!(!err.is_not_found());
    }
}
