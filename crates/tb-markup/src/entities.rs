//! Entity and character reference resolution.
//!
//! Markdown renderers emit HTML entities such as `&nbsp;` that XML does not
//! define. They are resolved when the XML reader reports a reference, so
//! CDATA sections and comments are never touched.

use std::borrow::Cow;

const HTML_ENTITIES: &[(&str, &str)] = &[
    ("nbsp", "\u{00a0}"),
    ("shy", "\u{00ad}"),
    ("ensp", "\u{2002}"),
    ("emsp", "\u{2003}"),
    ("thinsp", "\u{2009}"),
    ("mdash", "\u{2014}"),
    ("ndash", "\u{2013}"),
    ("hellip", "\u{2026}"),
    ("bull", "\u{2022}"),
    ("middot", "\u{00b7}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201c}"),
    ("rdquo", "\u{201d}"),
    ("laquo", "\u{00ab}"),
    ("raquo", "\u{00bb}"),
    ("larr", "\u{2190}"),
    ("uarr", "\u{2191}"),
    ("rarr", "\u{2192}"),
    ("darr", "\u{2193}"),
    ("harr", "\u{2194}"),
    ("le", "\u{2264}"),
    ("ge", "\u{2265}"),
    ("ne", "\u{2260}"),
    ("plusmn", "\u{00b1}"),
    ("times", "\u{00d7}"),
    ("divide", "\u{00f7}"),
    ("deg", "\u{00b0}"),
    ("micro", "\u{00b5}"),
    ("copy", "\u{00a9}"),
    ("reg", "\u{00ae}"),
    ("trade", "\u{2122}"),
    ("sect", "\u{00a7}"),
    ("para", "\u{00b6}"),
    ("dagger", "\u{2020}"),
    ("Dagger", "\u{2021}"),
    ("euro", "\u{20ac}"),
    ("pound", "\u{00a3}"),
    ("yen", "\u{00a5}"),
    ("cent", "\u{00a2}"),
    ("frac12", "\u{00bd}"),
    ("frac14", "\u{00bc}"),
    ("frac34", "\u{00be}"),
    ("sup1", "\u{00b9}"),
    ("sup2", "\u{00b2}"),
    ("sup3", "\u{00b3}"),
];

/// Resolve a named entity: the five XML entities, then the HTML table.
pub(crate) fn resolve_entity(name: &str) -> Option<&'static str> {
    match name {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        _ => HTML_ENTITIES
            .iter()
            .find(|(entity, _)| *entity == name)
            .map(|(_, value)| *value),
    }
}

/// Decode the body of an entity or character reference (`nbsp`, `#38`, `#x26`).
///
/// Unknown names and code points outside the XML `Char` production are
/// returned in their escaped source form.
pub(crate) fn decode_reference(reference: &str) -> String {
    let decoded = match reference.strip_prefix('#') {
        Some(num) => {
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => num.parse().ok(),
            };
            code.and_then(char::from_u32)
                .filter(|ch| is_xml_char(*ch))
                .map(String::from)
        }
        None => resolve_entity(reference).map(String::from),
    };
    decoded.unwrap_or_else(|| format!("&{reference};"))
}

/// Replace every `&...;` reference in a raw attribute value.
///
/// A `&` without a closing `;` is kept as is.
pub(crate) fn unescape_attr(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        if let Some(end) = after.find(';') {
            out.push_str(&decode_reference(&after[..end]));
            rest = &after[end + 1..];
        } else {
            out.push('&');
            rest = after;
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// `Char ::= #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]`
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}
