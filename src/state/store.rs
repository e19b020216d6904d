use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::Catalog;
use crate::prefs::PrefsStore;
use crate::state::app_state::AppState;
use crate::state::intent::AppIntent;
use crate::state::mvi::Reducer;
use crate::state::reducer::AppReducer;

/// Owner of the application state aggregate.
///
/// `dispatch` is the only mutation path: it validates the intent, applies the
/// pure reducer, and mirrors durable fields to the preference store — all
/// under one lock, so every transition is atomic and no reader observes a
/// partially-applied one. Constructed per-process (or per-test) and passed by
/// reference; there is no ambient global.
pub struct AppStore {
    state: Mutex<AppState>,
    prefs: PrefsStore,
    catalog: Arc<Catalog>,
}

impl AppStore {
    /// Seed state from the preference store (pruning saved ids that are not
    /// in the catalog) and take ownership of the durable mirror.
    pub fn new(prefs: PrefsStore, catalog: Arc<Catalog>) -> Self {
        let state = AppState::seeded(&prefs.current(), &catalog);
        Self {
            state: Mutex::new(state),
            prefs,
            catalog,
        }
    }

    /// Clone of the current state, for rendering and derivation.
    pub fn snapshot(&self) -> AppState {
        self.state.lock().clone()
    }

    /// Apply one transition. Malformed input is rejected whole: the state is
    /// left untouched and the rejection is logged. Callers are in-app UI and
    /// collaborators, so this is a defensive boundary, not a user-facing
    /// error path — nothing here returns an error or panics.
    pub fn dispatch(&self, intent: AppIntent) {
        if let Some(reason) = self.rejection(&intent) {
            tracing::warn!(?intent, reason, "rejected state transition");
            return;
        }

        let mut guard = self.state.lock();
        let next = AppReducer::reduce(std::mem::take(&mut *guard), intent.clone());
        self.mirror_durable(&intent, &next);
        *guard = next;
    }

    fn rejection(&self, intent: &AppIntent) -> Option<&'static str> {
        match intent {
            AppIntent::SetFilters(patch) if !patch.is_valid() => {
                Some("filter field outside its enumerated domain")
            }
            AppIntent::SelectRestroom(Some(id)) | AppIntent::ToggleSaved(id)
                if !self.catalog.contains(*id) =>
            {
                Some("id not present in catalog")
            }
            AppIntent::AddRecentSearch(term) if term.trim().is_empty() => {
                Some("empty search term")
            }
            _ => None,
        }
    }

    /// Synchronously persist the fields the intent made durable. Runs inside
    /// the dispatch lock; a failed write is logged and the in-memory
    /// transition stands.
    fn mirror_durable(&self, intent: &AppIntent, next: &AppState) {
        let result = match intent {
            AppIntent::ToggleDarkMode => self.prefs.update(|p| p.dark_mode = next.dark_mode),
            AppIntent::CompleteOnboarding => {
                self.prefs.update(|p| p.onboarding_complete = true)
            }
            AppIntent::AddRecentSearch(_) => self
                .prefs
                .update(|p| p.recent_searches = next.recent_searches.clone()),
            AppIntent::ToggleSaved(_) => self
                .prefs
                .update(|p| p.saved_restrooms = next.saved_restrooms.clone()),
            AppIntent::SetUser(_) => self.prefs.update(|p| p.user = next.user.clone()),
            _ => return,
        };

        if let Err(err) = result {
            tracing::warn!("preference write failed, continuing in memory: {err}");
        }
    }
}
