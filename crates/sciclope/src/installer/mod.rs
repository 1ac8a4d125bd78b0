//! Web installer.
//!
//! The installer walks the visitor through an ordered sequence of pages.
//! Progress is tracked per installation fingerprint in the browser session;
//! a visitor can revisit any completed page but can never skip ahead of the
//! first page that has not been filled yet.

mod controller;
mod fingerprint;
mod output;
mod page;
mod pages;
mod registry;
mod state;

pub use controller::{Advance, Step, WizardController};
pub use fingerprint::{FingerprintError, fingerprint};
pub use output::{InstallerOutput, Scope};
pub use page::{CONTINUE_FIELD, Page, PageContext, PageRequest, PageSignal};
pub use pages::{DonePage, WelcomePage};
pub use registry::{PageKind, PageRegistry, RegistryError};
pub use state::WizardState;
