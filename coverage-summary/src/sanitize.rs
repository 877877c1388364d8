//! DOCTYPE stripping
//!
//! Coverage reports come from build output and are treated as untrusted. Any
//! document type declaration, including an internal subset with `<!ENTITY>`
//! declarations, is removed before the text reaches the XML reader, so no
//! entity is ever defined, expanded or fetched.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Case-insensitive DOCTYPE declaration with optional nested ENTITY declarations
const DOCTYPE_PATTERN: &str = r"(?i)<!DOCTYPE[^<>]*(?:<!ENTITY[^<>]*>[^<>]*)*>";

fn doctype_regex() -> &'static Regex {
    static DOCTYPE: OnceLock<Regex> = OnceLock::new();
    DOCTYPE.get_or_init(|| Regex::new(DOCTYPE_PATTERN).expect("DOCTYPE pattern is valid"))
}

/// Remove every DOCTYPE declaration from `content`
///
/// Returns the input unchanged (borrowed) when there is nothing to strip.
pub fn strip_doctype(content: &str) -> Cow<'_, str> {
    let stripped = doctype_regex().replace_all(content, "");
    if let Cow::Owned(ref text) = stripped {
        log::debug!(
            "Stripped DOCTYPE declaration ({} bytes removed)",
            content.len() - text.len()
        );
    }
    stripped
}
