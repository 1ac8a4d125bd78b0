//! HTML building helpers.

/// Escape text for use in element content or a quoted attribute value.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Opening tag for `elem` with escaped attribute values.
pub fn open_element(elem: &str, attrs: &[(&str, &str)]) -> String {
    let mut tag = format!("<{}", elem.to_lowercase());
    for (name, value) in attrs {
        tag.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    tag.push('>');
    tag
}

/// Closing tag for `elem`, i.e. `</elem>` with the name lowercased.
pub fn close_element(elem: &str) -> String {
    format!("</{}>", elem.to_lowercase())
}

/// A complete element whose content is escaped text.
pub fn element(elem: &str, attrs: &[(&str, &str)], text: &str) -> String {
    format!(
        "{}{}{}",
        open_element(elem, attrs),
        escape(text),
        close_element(elem)
    )
}

/// Void element such as `<input>`.
pub fn void_element(elem: &str, attrs: &[(&str, &str)]) -> String {
    open_element(elem, attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_element_lowercases() {
        assert_eq!(close_element("FORM"), "</form>");
        assert_eq!(close_element("div"), "</div>");
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_element_escapes_attrs_and_text() {
        assert_eq!(
            element("p", &[("class", "a\"b")], "1 < 2"),
            "<p class=\"a&quot;b\">1 &lt; 2</p>"
        );
    }
}
