//! Page sequencing for the web installer.

use std::sync::Arc;

use tracing::{debug, info};

use super::output::InstallerOutput;
use super::page::{PageContext, PageRequest, PageSignal};
use super::registry::{PageKind, PageRegistry};
use super::state::WizardState;
use crate::html;

/// Where a request landed in the page sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A page was emitted.
    Page {
        index: usize,
        kind: PageKind,
        signal: PageSignal,
    },
    /// Every page is filled; the installation is finished.
    Complete,
}

/// Result of one [`WizardController::advance`] call.
#[derive(Debug)]
pub struct Advance {
    pub step: Step,
    /// Rendered HTML document.
    pub output: String,
    /// State to persist under the installation fingerprint.
    pub state: WizardState,
}

impl Advance {
    /// Whether the emitted page accepted its data.
    pub fn continued(&self) -> bool {
        matches!(
            self.step,
            Step::Page {
                signal: PageSignal::Continue,
                ..
            }
        )
    }

    pub fn is_complete(&self) -> bool {
        self.step == Step::Complete
    }
}

/// Decides which page a request gets and records completed pages.
#[derive(Debug, Clone)]
pub struct WizardController {
    registry: Arc<PageRegistry>,
    version: String,
}

impl WizardController {
    pub fn new(registry: PageRegistry, version: impl Into<String>) -> Self {
        Self {
            registry: Arc::new(registry),
            version: version.into(),
        }
    }

    /// Resolve the page for `requested`.
    ///
    /// Unknown or empty names fall back to the first remaining page. Known
    /// names past the first remaining page are clamped to it, so a visitor
    /// can never skip ahead of their progress.
    pub fn resolve(&self, state: &WizardState, requested: &str) -> Step {
        let first_remaining = state.first_remaining();
        let index = self
            .registry
            .index_of(requested)
            .map_or(first_remaining, |index| index.min(first_remaining));

        // Only the first remaining page can lie past the registry, and then
        // every page has been filled.
        match self.registry.kind(index) {
            Some(kind) => Step::Page {
                index,
                kind,
                signal: PageSignal::Incomplete,
            },
            None => Step::Complete,
        }
    }

    /// Emit the page for `requested` and return the updated state.
    pub fn advance(&self, state: WizardState, requested: &str, request: &PageRequest) -> Advance {
        let mut state = state;
        let mut output = InstallerOutput::new(format!("SciClope {} installation", self.version));

        let (index, kind) = match self.resolve(&state, requested) {
            Step::Page { index, kind, .. } => (index, kind),
            Step::Complete => {
                debug!("all installer pages filled");
                render_complete(&mut output);
                return Advance {
                    step: Step::Complete,
                    output: output.finish(),
                    state,
                };
            }
        };

        let name = kind.name();
        if !requested.is_empty() && requested != name {
            debug!(requested, page = name, "requested installer page not reachable");
        }

        let signal = {
            let page = kind.instantiate();
            let mut section = output.scope("section", &[("class", "sc-page"), ("data-page", name)]);
            let mut ctx = PageContext::new(section.output(), request, name, &self.version);
            page.emit(&mut ctx)
        };

        if signal == PageSignal::Continue && state.mark_filled(index) {
            info!(page = name, index, "installer page completed");
        }

        Advance {
            step: Step::Page {
                index,
                kind,
                signal,
            },
            output: output.finish(),
            state,
        }
    }
}

fn render_complete(output: &mut InstallerOutput) {
    let mut section = output.scope("section", &[("class", "sc-complete")]);
    section.add_html(&html::element("h2", &[], "Installation complete"));
    section.add_html(&html::element(
        "p",
        &[],
        "SciClope has been installed. You can now start using it.",
    ));
    section.add_html(&html::element("a", &[("href", "/")], "Go to SciClope"));
}
