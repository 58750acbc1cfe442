//! XML encoding of `ProblemDetails`
//!
//! Output has no declaration and no whitespace between elements:
//! `<problem xmlns="urn:ietf:rfc:7807"><type>..</type>..</problem>`.

use crate::error::EncodeError;
use crate::problem::{PROBLEM_XML_NAMESPACE, ProblemDetails};

pub fn encode(problem: &ProblemDetails) -> Result<String, EncodeError> {
    let mut out = String::with_capacity(128);
    out.push_str("<problem xmlns=\"");
    out.push_str(PROBLEM_XML_NAMESPACE);
    out.push_str("\">");

    optional_element(&mut out, "type", problem.problem_type());
    optional_element(&mut out, "title", problem.title());
    element(&mut out, "status", &problem.status().to_string());
    optional_element(&mut out, "detail", problem.detail());
    optional_element(&mut out, "instance", problem.instance());

    if !problem.errors().is_empty() {
        out.push_str("<errors>");
        for (field, message) in problem.errors() {
            if !is_element_name(field) {
                return Err(EncodeError::InvalidElementName(field.clone()));
            }
            element(&mut out, field, message);
        }
        out.push_str("</errors>");
    }

    out.push_str("</problem>");
    Ok(out)
}

fn optional_element(out: &mut String, name: &str, text: &str) {
    if !text.is_empty() {
        element(out, name, text);
    }
}

fn element(out: &mut String, name: &str, text: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    escape_text(out, text);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// `[A-Za-z_][A-Za-z0-9_.-]*`; no prefixes since the document has one namespace.
/// Names starting with `xml` in any case are reserved.
fn is_element_name(name: &str) -> bool {
    if name
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("xml"))
    {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if is_xml_char(c) => out.push(c),
            _ => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
}

// XML 1.0 `Char` production, minus the whitespace handled above
fn is_xml_char(c: char) -> bool {
    matches!(c, '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}
