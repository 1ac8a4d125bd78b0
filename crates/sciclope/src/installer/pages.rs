//! Concrete installer pages.

use super::page::{CONTINUE_FIELD, Page, PageContext, PageSignal};
use crate::html;

/// Checkbox the visitor ticks to accept the license.
const ACCEPT_LICENSE_FIELD: &str = "accept-license";

fn continue_button(label: &str) -> String {
    html::void_element(
        "input",
        &[("type", "submit"), ("name", CONTINUE_FIELD), ("value", label)],
    )
}

/// First page: introduces the installer and asks for license acceptance.
#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomePage;

impl Page for WelcomePage {
    fn emit(&self, ctx: &mut PageContext<'_>) -> PageSignal {
        let request = ctx.request();
        let accepted = request.flag(ACCEPT_LICENSE_FIELD);
        if request.is_continue() && accepted {
            return PageSignal::Continue;
        }

        let intro = format!(
            "This wizard sets up a new SciClope {} instance.",
            ctx.version()
        );

        let mut form = ctx.begin_form();
        form.add_html(&html::element("h2", &[], "Welcome to SciClope"));
        form.add_html(&html::element("p", &[], &intro));
        form.add_html(&html::element(
            "p",
            &[],
            "SciClope is free software, distributed under the terms of the \
             GNU General Public License, version 2 or later.",
        ));

        if request.is_continue() {
            form.add_html(&html::element(
                "p",
                &[("class", "sc-error")],
                "You must accept the license to continue.",
            ));
        }

        let mut checkbox = vec![
            ("type", "checkbox"),
            ("id", ACCEPT_LICENSE_FIELD),
            ("name", ACCEPT_LICENSE_FIELD),
            ("value", "on"),
        ];
        if accepted {
            checkbox.push(("checked", "checked"));
        }
        form.add_html(&html::void_element("input", &checkbox));
        form.add_html(&html::element(
            "label",
            &[("for", ACCEPT_LICENSE_FIELD)],
            "I accept the license terms",
        ));
        form.add_html(&continue_button("Continue"));

        PageSignal::Incomplete
    }
}

/// Final page of the sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DonePage;

impl Page for DonePage {
    fn emit(&self, ctx: &mut PageContext<'_>) -> PageSignal {
        if ctx.request().is_continue() {
            return PageSignal::Continue;
        }

        let mut form = ctx.begin_form();
        form.add_html(&html::element("h2", &[], "Ready to finish"));
        form.add_html(&html::element(
            "p",
            &[],
            "All installer steps have been filled in. Press Finish to complete the installation.",
        ));
        form.add_html(&continue_button("Finish"));

        PageSignal::Incomplete
    }
}
