//! HTML attribute value escaping
//!
//! Every attribute value produced by the assembler goes through [`escape`]
//! unless escaping is switched off in the configuration. Attribute names are
//! never escaped.
//!
//! ```rust
//! use hx_props::escape::escape;
//!
//! assert_eq!(escape(r#"a="b" > c"#), "a&#61;&quot;b&quot; &gt; c");
//! assert_eq!(escape("/plain/path"), "/plain/path");
//! ```

use std::borrow::Cow;

/// Characters replaced inside double-quoted attribute values
pub static ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('=', "&#61;"),
];

fn entity_for(ch: char) -> Option<&'static str> {
    ENTITIES
        .iter()
        .find_map(|&(from, to)| (from == ch).then_some(to))
}

/// Escape a string for use inside a double-quoted HTML attribute value
///
/// Single pass over the input, so entities produced here are never escaped
/// a second time. Returns the input borrowed when nothing needs replacing.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|ch: char| entity_for(ch).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut output = String::with_capacity(text.len() + 16);
    output.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match entity_for(ch) {
            Some(entity) => output.push_str(entity),
            None => output.push(ch),
        }
    }
    Cow::Owned(output)
}

/// Escape `text` when `enabled`, otherwise pass it through untouched
#[must_use]
pub fn escape_if(text: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        escape(text)
    } else {
        Cow::Borrowed(text)
    }
}
