use crate::classifier::Classifier;

/// Read-only after startup; shared across handlers without locking.
pub struct AppState {
    pub classifier: Classifier,
}
