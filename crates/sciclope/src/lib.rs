//! SciClope bootstrap layer.
//!
//! This crate provides the request-startup pipeline (install path detection,
//! site configuration discovery) and the multi-step web installer. It is used
//! by the `sciclope` binary and can be embedded in another axum application.

pub mod api;
pub mod html;
pub mod installer;
pub mod session;
pub mod startup;
pub mod util;

pub use api::{AppState, create_router};
pub use installer::{PageRegistry, WizardController, WizardState};
pub use session::{MemorySessionStore, SessionStore};
pub use startup::Site;
