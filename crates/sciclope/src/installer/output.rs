//! Output sink for installer pages.

use crate::html;

/// Buffered HTML output for one installer response.
///
/// Content is appended to a buffer and moved into the response body on
/// [`flush`](Self::flush). The first flush writes the document header, so
/// page content always follows it.
#[derive(Debug)]
pub struct InstallerOutput {
    title: String,
    body: String,
    buffer: String,
    header_done: bool,
}

impl InstallerOutput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            buffer: String::new(),
            header_done: false,
        }
    }

    /// Append HTML and flush it.
    pub fn add_html(&mut self, html: &str) {
        self.buffer.push_str(html);
        self.flush();
    }

    pub fn flush(&mut self) {
        if !self.header_done {
            self.flush_header();
        }
        if !self.buffer.is_empty() {
            self.body.push_str(&self.buffer);
            self.buffer.clear();
        }
    }

    /// Open `elem` and return a guard that closes it when dropped.
    pub fn scope(&mut self, elem: &'static str, attrs: &[(&str, &str)]) -> Scope<'_> {
        self.add_html(&html::open_element(elem, attrs));
        Scope { output: self, elem }
    }

    /// Flush remaining content, close the document and return it.
    pub fn finish(mut self) -> String {
        self.flush();
        self.body.push('\n');
        self.body.push_str(&html::close_element("main"));
        self.body.push_str(&html::close_element("body"));
        self.body.push_str(&html::close_element("html"));
        self.body.push('\n');
        self.body
    }

    fn flush_header(&mut self) {
        self.header_done = true;
        self.body.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        self.body.push_str("<meta charset=\"utf-8\">\n");
        self.body.push_str(&html::element("title", &[], &self.title));
        self.body.push_str("\n</head>\n<body>\n");
        self.body
            .push_str(&html::open_element("main", &[("id", "sc-installer")]));
        self.body.push('\n');
    }
}

/// An open element in an [`InstallerOutput`].
///
/// The closing tag is written when the scope ends, whichever way the code
/// holding it exits.
#[derive(Debug)]
pub struct Scope<'a> {
    output: &'a mut InstallerOutput,
    elem: &'static str,
}

impl Scope<'_> {
    pub fn add_html(&mut self, html: &str) {
        self.output.add_html(html);
    }

    /// The underlying output, for nesting further scopes.
    pub fn output(&mut self) -> &mut InstallerOutput {
        &mut *self.output
    }

    /// Close the element now.
    pub fn close(self) {}
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.output.add_html(&html::close_element(self.elem));
    }
}
