use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{self, AuthError};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::location::{acquire, SimulatedGps};
use crate::state::{AppIntent, AppState, AppStore, Screen, UserProfile};
use crate::ui::events::AppEvent;
use crate::ui::forms::{AddForm, FeedbackForm, ReportForm, SignInForm, SubmitPhase};

/// Artificial latency for the mock add/report/feedback submissions.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// The view-layer shell: owns per-screen scratch state (form fields, list
/// cursors) and the handles async tasks need. All cross-screen state lives
/// in the injected [`AppStore`]; async completions come back through the
/// event channel and are applied here, on the UI loop.
pub struct App {
    store: Arc<AppStore>,
    catalog: Arc<Catalog>,
    config: Config,
    events_tx: Sender<AppEvent>,
    tokio: tokio::runtime::Handle,
    gps: SimulatedGps,
    should_quit: bool,
    pub(super) locating: bool,
    pub(super) onboarding_slide: usize,
    pub(super) marker_cursor: usize,
    pub(super) search_cursor: usize,
    pub(super) filter_cursor: usize,
    pub(super) menu_cursor: usize,
    pub(super) profile_cursor: usize,
    pub(super) static_scroll: u16,
    pub(super) add_form: AddForm,
    pub(super) report_form: ReportForm,
    pub(super) feedback_form: FeedbackForm,
    pub(super) sign_in: SignInForm,
}

impl App {
    pub fn new(
        store: Arc<AppStore>,
        catalog: Arc<Catalog>,
        config: Config,
        events_tx: Sender<AppEvent>,
        tokio: tokio::runtime::Handle,
        gps: SimulatedGps,
    ) -> Self {
        Self {
            store,
            catalog,
            config,
            events_tx,
            tokio,
            gps,
            should_quit: false,
            locating: false,
            onboarding_slide: 0,
            marker_cursor: 0,
            search_cursor: 0,
            filter_cursor: 0,
            menu_cursor: 0,
            profile_cursor: 0,
            static_scroll: 0,
            add_form: AddForm::default(),
            report_form: ReportForm::default(),
            feedback_form: FeedbackForm::default(),
            sign_in: SignInForm::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn snapshot(&self) -> AppState {
        self.store.snapshot()
    }

    pub fn dispatch(&self, intent: AppIntent) {
        self.store.dispatch(intent);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(super) fn config(&self) -> &Config {
        &self.config
    }

    /// Route one event. Key handling lives in [`crate::ui::input`]; the rest
    /// are async completions and the tick.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => crate::ui::input::handle_key(self, key),
            AppEvent::Tick | AppEvent::Resize => {}
            AppEvent::Connectivity { online } => {
                self.dispatch(AppIntent::SetOffline(!online));
            }
            AppEvent::LocationSettled => {
                self.locating = false;
            }
            AppEvent::AuthComplete(result) => self.on_auth_complete(result),
            AppEvent::SubmitComplete { screen, reference } => {
                self.on_submit_complete(screen, reference);
            }
        }
    }

    // -- geolocation -------------------------------------------------------

    /// Automatic attempt at startup, once onboarding is done. The manual
    /// locate control uses the longer timeout.
    pub fn request_startup_location(&mut self) {
        let state = self.snapshot();
        if !state.onboarding_complete || state.user_location.is_some() {
            return;
        }
        let timeout = Duration::from_secs(self.config.location.startup_timeout_secs);
        self.request_locate(timeout);
    }

    pub(super) fn request_manual_locate(&mut self) {
        let timeout = Duration::from_secs(self.config.location.locate_timeout_secs);
        self.request_locate(timeout);
    }

    fn request_locate(&mut self, timeout: Duration) {
        if self.locating {
            return;
        }
        self.locating = true;

        let store = Arc::clone(&self.store);
        let gps = self.gps;
        let tx = self.events_tx.clone();
        self.tokio.spawn(async move {
            acquire(&gps, timeout, &store).await;
            let _ = tx.send(AppEvent::LocationSettled);
        });
    }

    // -- connectivity ------------------------------------------------------

    /// Feed a reachability edge into the event channel, standing in for the
    /// device's network-status callback.
    pub(super) fn simulate_connectivity_edge(&self) {
        let online = self.snapshot().is_offline;
        let _ = self.events_tx.send(AppEvent::Connectivity { online });
    }

    // -- navigation --------------------------------------------------------

    /// Navigate to a full screen, resetting its scratch state. Matches the
    /// original app, where a screen remounts fresh each time it opens.
    pub(super) fn open_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Add => self.add_form = AddForm::default(),
            Screen::Report => self.report_form = ReportForm::default(),
            Screen::Feedback => self.feedback_form = FeedbackForm::default(),
            Screen::Profile => {
                self.profile_cursor = 0;
                self.sign_in = SignInForm::default();
            }
            Screen::Privacy | Screen::Help | Screen::Terms => self.static_scroll = 0,
            Screen::Home | Screen::Settings => {}
        }
        self.dispatch(AppIntent::SetScreen(screen));
    }

    /// Open the report screen pre-targeted at the selected restroom.
    pub(super) fn open_report_for_selection(&mut self) {
        let target = self
            .snapshot()
            .selected_restroom
            .and_then(|id| self.catalog.get(id))
            .map(|r| r.name.clone());
        self.open_screen(Screen::Report);
        self.report_form.target = target;
    }

    // -- mock submissions --------------------------------------------------

    pub(super) fn submit_add(&mut self) {
        if self.add_form.phase != SubmitPhase::Editing || !self.add_form.validate() {
            return;
        }
        self.add_form.phase = SubmitPhase::Submitting;
        self.spawn_submit(Screen::Add);
    }

    pub(super) fn submit_report(&mut self) {
        if self.report_form.phase != SubmitPhase::Editing || !self.report_form.validate() {
            return;
        }
        self.report_form.phase = SubmitPhase::Submitting;
        self.spawn_submit(Screen::Report);
    }

    pub(super) fn submit_feedback(&mut self) {
        if self.feedback_form.phase != SubmitPhase::Editing || !self.feedback_form.validate() {
            return;
        }
        self.feedback_form.phase = SubmitPhase::Submitting;
        self.spawn_submit(Screen::Feedback);
    }

    fn spawn_submit(&self, screen: Screen) {
        let tx = self.events_tx.clone();
        let reference = uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase();
        self.tokio.spawn(async move {
            tokio::time::sleep(SUBMIT_DELAY).await;
            let _ = tx.send(AppEvent::SubmitComplete { screen, reference });
        });
    }

    /// Apply a submission completion. Navigating away does not cancel the
    /// timer, so a completion may arrive for a screen that is no longer
    /// current — those are discarded.
    pub fn on_submit_complete(&mut self, screen: Screen, reference: String) {
        if self.snapshot().current_screen != screen {
            tracing::debug!(?screen, "discarding stale submission completion");
            return;
        }
        let form_phase = match screen {
            Screen::Add => &mut self.add_form.phase,
            Screen::Report => &mut self.report_form.phase,
            Screen::Feedback => &mut self.feedback_form.phase,
            _ => return,
        };
        if *form_phase == SubmitPhase::Submitting {
            *form_phase = SubmitPhase::Submitted(reference);
        }
    }

    // -- mock auth ---------------------------------------------------------

    pub(super) fn submit_sign_in(&mut self) {
        if self.sign_in.loading {
            return;
        }
        let credentials = self.sign_in.credentials();
        if let Err(err) = credentials.validate() {
            self.sign_in.error = Some(err);
            return;
        }
        self.sign_in.error = None;
        self.sign_in.loading = true;

        let store = Arc::clone(&self.store);
        let tx = self.events_tx.clone();
        self.tokio.spawn(async move {
            let result = auth::sign_in(credentials, &store).await;
            let _ = tx.send(AppEvent::AuthComplete(result));
        });
    }

    pub fn on_auth_complete(&mut self, result: Result<UserProfile, AuthError>) {
        self.sign_in.loading = false;
        match result {
            Ok(_) => self.sign_in.close(),
            Err(err) => self.sign_in.error = Some(err),
        }
    }

    pub(super) fn sign_out(&self) {
        self.dispatch(AppIntent::SetUser(None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::PrefsStore;
    use std::sync::mpsc;

    fn make_app() -> (App, mpsc::Receiver<AppEvent>, tempfile::TempDir, tokio::runtime::Runtime) {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PrefsStore::load(dir.path().join("prefs.json")).unwrap();
        let catalog = Arc::new(Catalog::bundled());
        let store = Arc::new(AppStore::new(prefs, Arc::clone(&catalog)));
        let (tx, rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let app = App::new(
            store,
            catalog,
            crate::config::Config::default(),
            tx,
            runtime.handle().clone(),
            SimulatedGps::new(None, Duration::from_millis(1)),
        );
        (app, rx, dir, runtime)
    }

    fn fill_valid_add_form(app: &mut App) {
        app.add_form.name = "Test Stop".into();
        app.add_form.address = "Somewhere St".into();
    }

    #[test]
    fn completion_for_the_current_screen_lands() {
        let (mut app, _rx, _dir, _rt) = make_app();
        app.dispatch(AppIntent::CompleteOnboarding);
        app.open_screen(Screen::Add);
        fill_valid_add_form(&mut app);
        app.submit_add();
        assert_eq!(app.add_form.phase, SubmitPhase::Submitting);

        app.on_submit_complete(Screen::Add, "ABC123".into());
        assert_eq!(app.add_form.phase, SubmitPhase::Submitted("ABC123".into()));
    }

    #[test]
    fn stale_completion_after_navigation_is_discarded() {
        let (mut app, _rx, _dir, _rt) = make_app();
        app.dispatch(AppIntent::CompleteOnboarding);
        app.open_screen(Screen::Add);
        fill_valid_add_form(&mut app);
        app.submit_add();

        // Navigating away does not cancel the timer; its completion must be
        // a safe no-op.
        app.open_screen(Screen::Home);
        app.on_submit_complete(Screen::Add, "ABC123".into());
        assert_eq!(app.add_form.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn invalid_form_never_starts_submitting() {
        let (mut app, _rx, _dir, _rt) = make_app();
        app.open_screen(Screen::Add);
        app.submit_add();
        assert_eq!(app.add_form.phase, SubmitPhase::Editing);
        assert!(app.add_form.error.is_some());
    }

    #[test]
    fn auth_completion_closes_the_modal() {
        let (mut app, _rx, _dir, _rt) = make_app();
        app.sign_in.open();
        app.sign_in.loading = true;

        app.on_auth_complete(Ok(UserProfile {
            display_name: "Maria".into(),
            email: "maria@example.com".into(),
        }));
        assert!(!app.sign_in.visible);
        assert!(!app.sign_in.loading);
    }

    #[test]
    fn connectivity_edges_drive_the_offline_flag() {
        let (mut app, _rx, _dir, _rt) = make_app();
        app.handle_event(AppEvent::Connectivity { online: false });
        assert!(app.snapshot().is_offline);
        app.handle_event(AppEvent::Connectivity { online: true });
        assert!(!app.snapshot().is_offline);
    }

    #[test]
    fn sign_in_with_empty_fields_shows_inline_error_without_loading() {
        let (mut app, _rx, _dir, _rt) = make_app();
        app.sign_in.open();
        app.submit_sign_in();
        assert_eq!(app.sign_in.error, Some(AuthError::EmptyEmail));
        assert!(!app.sign_in.loading);
    }
}
