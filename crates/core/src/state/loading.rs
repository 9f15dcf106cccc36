use std::sync::Mutex;

use super::view_state::{Activity, SessionState};

/// Scoped loading flag.
///
/// Raises the flag for `activity` on [`acquire`](Self::acquire) and lowers it
/// on drop, on every exit path including early returns and panics.
pub(crate) struct LoadingGuard<'a> {
    state: &'a Mutex<SessionState>,
    activity: Activity,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn acquire(state: &'a Mutex<SessionState>, activity: Activity) -> Self {
        state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .view
            .activity
            .begin(activity);
        Self { state, activity }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .view
            .activity
            .end(self.activity);
    }
}
