//! Long-lived services wrapping the port layer.

pub mod reconciliation;
pub mod settings;

pub use reconciliation::{ReconcileError, ReconcileOutcome, ReconcileService};
pub use settings::{Settings, SettingsError, DEFAULT_BACKGROUND_IMAGE};
