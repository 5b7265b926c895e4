mod backend;
mod components;
mod progress;

use dioxus::prelude::*;
use tokio::sync::mpsc;

use backend::api::ApiClient;
use backend::{ApiCmd, ApiEvent, ApiWorker};
use components::about_page::AboutComponent;
use components::contact_page::ContactComponent;
use components::course_page::CourseComponent;
use components::forgot_password_page::ForgotPasswordComponent;
use components::home_page::HomeComponent;
use components::login_page::LoginComponent;
use components::nav_bar::NavComponent;
use components::register_page::RegisterComponent;
use components::reset_password_page::ResetPasswordComponent;
use components::verify_email_page::VerifyEmailComponent;
use components::{AppState, CourseLoad};
use progress::{CompletionState, NavigationState};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[route("/")]
    HomeComponent {},
    #[route("/about")]
    AboutComponent {},
    #[route("/contact")]
    ContactComponent {},
    #[route("/login")]
    LoginComponent {},
    #[route("/register")]
    RegisterComponent {},
    #[route("/verify-email?:email")]
    VerifyEmailComponent { email: String },
    #[route("/forgot-password")]
    ForgotPasswordComponent {},
    #[route("/reset-password/:resettoken")]
    ResetPasswordComponent { resettoken: String },
    #[route("/learn")]
    CourseComponent {},
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    use_context_provider(ApiClient::from_env);

    // One worker per app. The UI sends commands over the channel; a
    // second task pumps worker events into the shared signals.
    let cmd_tx = use_hook(|| {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<ApiCmd>();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<ApiEvent>();

        spawn(async move {
            ApiWorker::new(ApiClient::from_env(), cmd_rx, event_tx)
                .run()
                .await;
        });
        spawn(async move {
            while let Some(event) = event_rx.recv().await {
                apply_event(state, event);
            }
        });
        cmd_tx
    });

    let boot_tx = cmd_tx.clone();
    use_context_provider(move || cmd_tx.clone());

    // Check any stored token once on startup.
    use_effect(move || {
        let _ = boot_tx.send(ApiCmd::VerifySession);
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

fn apply_event(mut state: AppState, event: ApiEvent) {
    match event {
        ApiEvent::SessionVerified(user) => {
            state.user.set(user);
            state.session_checked.set(true);
        }
        ApiEvent::CourseLoaded { course, resume } => {
            let (completion, navigation) = match &resume {
                Some(resume) => progress::sync::restore(&course, resume),
                None => (CompletionState::new(), NavigationState::default()),
            };
            let percent = progress::sync::overall_progress(&course, &completion);
            state
                .progress_saved_at
                .set(resume.as_ref().and_then(|resume| resume.updated_at));
            state.completion.set(completion);
            state.navigation.set(navigation);
            state.overall_progress.set(percent);
            state.course.set(Some(*course));
            state.course_load.set(CourseLoad::Ready);
        }
        ApiEvent::CourseLoadFailed => {
            state.course_load.set(CourseLoad::Failed);
        }
        ApiEvent::LessonLoaded(html) => {
            state.lesson_error.set(None);
            state.lesson_html.set(Some(html));
        }
        ApiEvent::LessonFailed(message) => {
            state.lesson_html.set(None);
            state.lesson_error.set(Some(message));
        }
    }
}
