use soletrack_core::Reading;

/// Immutable per-process state: the series generated once at startup.
pub(crate) struct AppState {
    pub(crate) readings: Vec<Reading>,
}
