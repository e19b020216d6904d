//! Geolocation collaborator.
//!
//! One-shot "get current position" with a bounded timeout. Success and
//! failure are delivered as exactly one pair of state transitions; there is
//! no retry policy — the locate control re-triggers acquisition manually.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::geo::Coordinate;
use crate::state::{AppIntent, AppStore, LocationPermission};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("position acquisition timed out")]
    TimedOut,
    #[error("position unavailable")]
    Unavailable,
}

/// One-shot device position source. High accuracy is implied; the caller
/// bounds the wait.
pub trait LocationService: Send + Sync + 'static {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinate, LocationError>> + Send;
}

/// Stand-in for the device GPS: reports a configured fix after a short
/// artificial delay, or fails when no fix is configured.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedGps {
    fix: Option<Coordinate>,
    delay: Duration,
}

impl SimulatedGps {
    pub fn new(fix: Option<Coordinate>, delay: Duration) -> Self {
        Self { fix, delay }
    }
}

impl LocationService for SimulatedGps {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        tokio::time::sleep(self.delay).await;
        self.fix.ok_or(LocationError::Unavailable)
    }
}

/// Run one bounded acquisition and apply its single continuation: a fix
/// dispatches `SetUserLocation` plus `SetLocationPermission(Granted)`;
/// failure or timeout dispatches `SetLocationPermission(Denied)`. Safe to
/// call from any task — the store serializes transitions.
pub async fn acquire<S: LocationService>(service: &S, timeout: Duration, store: &AppStore) {
    match tokio::time::timeout(timeout, service.current_position()).await {
        Ok(Ok(position)) => {
            store.dispatch(AppIntent::SetUserLocation(position));
            store.dispatch(AppIntent::SetLocationPermission(LocationPermission::Granted));
        }
        Ok(Err(err)) => {
            tracing::debug!("location acquisition failed: {err}");
            store.dispatch(AppIntent::SetLocationPermission(LocationPermission::Denied));
        }
        Err(_elapsed) => {
            tracing::debug!("location acquisition timed out after {timeout:?}");
            store.dispatch(AppIntent::SetLocationPermission(LocationPermission::Denied));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::prefs::PrefsStore;
    use std::sync::Arc;

    fn test_store() -> (AppStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PrefsStore::load(dir.path().join("prefs.json")).unwrap();
        (AppStore::new(prefs, Arc::new(Catalog::bundled())), dir)
    }

    struct NeverResolves;

    impl LocationService for NeverResolves {
        async fn current_position(&self) -> Result<Coordinate, LocationError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fix_grants_permission_and_sets_location() {
        let (store, _dir) = test_store();
        let gps = SimulatedGps::new(
            Some(Coordinate::new(10.32, 123.90)),
            Duration::from_millis(600),
        );

        acquire(&gps, Duration::from_secs(5), &store).await;

        let state = store.snapshot();
        assert_eq!(state.location_permission, LocationPermission::Granted);
        assert_eq!(state.user_location, Some(Coordinate::new(10.32, 123.90)));
    }

    #[tokio::test(start_paused = true)]
    async fn unavailable_fix_denies_without_location() {
        let (store, _dir) = test_store();
        let gps = SimulatedGps::new(None, Duration::from_millis(600));

        acquire(&gps, Duration::from_secs(5), &store).await;

        let state = store.snapshot();
        assert_eq!(state.location_permission, LocationPermission::Denied);
        assert_eq!(state.user_location, None);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_is_treated_as_denial() {
        let (store, _dir) = test_store();

        acquire(&NeverResolves, Duration::from_secs(5), &store).await;

        let state = store.snapshot();
        assert_eq!(state.location_permission, LocationPermission::Denied);
        assert_eq!(state.user_location, None);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_retrigger_can_grant_after_denial() {
        let (store, _dir) = test_store();
        acquire(&NeverResolves, Duration::from_secs(5), &store).await;
        assert_eq!(store.snapshot().location_permission, LocationPermission::Denied);

        let gps = SimulatedGps::new(
            Some(Coordinate::new(10.31, 123.89)),
            Duration::from_millis(200),
        );
        acquire(&gps, Duration::from_secs(10), &store).await;
        assert_eq!(store.snapshot().location_permission, LocationPermission::Granted);
    }
}
