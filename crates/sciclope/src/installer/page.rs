//! Page abstraction shared by every installer step.

use std::collections::HashMap;

use super::output::{InstallerOutput, Scope};
use crate::util::option_str_to_bool;

/// Form field carried by every page's "continue" button.
pub const CONTINUE_FIELD: &str = "submit-continue";

/// Outcome of emitting a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSignal {
    /// The page needs more input and will be shown again.
    Incomplete,
    /// The page's data was accepted; the wizard may advance.
    Continue,
}

/// The parts of the HTTP request a page looks at.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    posted: bool,
    params: HashMap<String, String>,
}

impl PageRequest {
    /// A plain page view with no submitted data.
    pub fn view() -> Self {
        Self::default()
    }

    /// A form submission.
    pub fn submit(params: HashMap<String, String>) -> Self {
        Self {
            posted: true,
            params,
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Checkbox-style field: true when present with a truthy value.
    pub fn flag(&self, name: &str) -> bool {
        self.param(name).is_some_and(option_str_to_bool)
    }

    /// Whether the visitor pressed the page's continue button.
    pub fn is_continue(&self) -> bool {
        self.posted && self.params.contains_key(CONTINUE_FIELD)
    }
}

/// Everything a page may use while emitting.
pub struct PageContext<'a> {
    output: &'a mut InstallerOutput,
    request: &'a PageRequest,
    page_name: &'a str,
    version: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn new(
        output: &'a mut InstallerOutput,
        request: &'a PageRequest,
        page_name: &'a str,
        version: &'a str,
    ) -> Self {
        Self {
            output,
            request,
            page_name,
            version,
        }
    }

    pub fn request(&self) -> &'a PageRequest {
        self.request
    }

    /// Version of the software being installed.
    pub fn version(&self) -> &'a str {
        self.version
    }

    pub fn add_html(&mut self, html: &str) {
        self.output.add_html(html);
    }

    /// Open the page's form. The form posts back to the same page and is
    /// closed when the returned scope ends.
    pub fn begin_form(&mut self) -> Scope<'_> {
        let action = format!("?p={}", urlencoding::encode(self.page_name));
        self.output.scope(
            "form",
            &[
                ("method", "post"),
                ("action", action.as_str()),
                ("class", "sc-installer-form"),
            ],
        )
    }
}

/// One step of the installer.
pub trait Page: Send + Sync {
    /// Render the page into `ctx` and report whether the step is complete.
    fn emit(&self, ctx: &mut PageContext<'_>) -> PageSignal;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bails out halfway through its form when `bail` is set.
    struct BailingPage;

    impl Page for BailingPage {
        fn emit(&self, ctx: &mut PageContext<'_>) -> PageSignal {
            let bail = ctx.request().flag("bail");
            let mut form = ctx.begin_form();
            form.add_html("<p>start</p>");
            if bail {
                return PageSignal::Incomplete;
            }
            form.add_html("<p>end</p>");
            PageSignal::Continue
        }
    }

    fn emit(request: &PageRequest) -> (PageSignal, String) {
        let mut output = InstallerOutput::new("test");
        let signal = {
            let mut ctx = PageContext::new(&mut output, request, "Bail", "1.0.0");
            BailingPage.emit(&mut ctx)
        };
        (signal, output.finish())
    }

    #[test]
    fn test_form_closed_after_early_return() {
        let request = PageRequest::submit(HashMap::from([("bail".to_string(), "1".to_string())]));
        let (signal, doc) = emit(&request);

        assert_eq!(signal, PageSignal::Incomplete);
        assert!(doc.contains("<p>start</p></form>"));
        assert!(!doc.contains("<p>end</p>"));
    }

    #[test]
    fn test_form_closed_after_normal_return() {
        let (signal, doc) = emit(&PageRequest::view());

        assert_eq!(signal, PageSignal::Continue);
        assert!(doc.contains("<p>start</p><p>end</p></form>"));
        assert_eq!(doc.matches("<form").count(), doc.matches("</form>").count());
    }

    #[test]
    fn test_form_posts_back_to_page() {
        let (_, doc) = emit(&PageRequest::view());
        assert!(doc.contains("action=\"?p=Bail\""));
        assert!(doc.contains("method=\"post\""));
    }

    #[test]
    fn test_request_continue_requires_post() {
        let params = HashMap::from([(CONTINUE_FIELD.to_string(), "Continue".to_string())]);
        assert!(PageRequest::submit(params).is_continue());
        assert!(!PageRequest::view().is_continue());
        assert!(!PageRequest::submit(HashMap::new()).is_continue());
    }

    #[test]
    fn test_request_flag() {
        let request = PageRequest::submit(HashMap::from([
            ("a".to_string(), "on".to_string()),
            ("b".to_string(), "off".to_string()),
        ]));
        assert!(request.flag("a"));
        assert!(!request.flag("b"));
        assert!(!request.flag("c"));
    }
}
