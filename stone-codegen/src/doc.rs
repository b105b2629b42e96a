//! Documentation processing.
//!
//! Model documentation may contain reference markers of the form
//! ``:tag:`value` `` pointing at types, fields, routes, links or literal
//! values. Each back end decides how a marker reads in its own comment
//! syntax by supplying a [`TagResolver`].

use crate::builder::wrap_text;

/// The kind of a documentation reference marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTag<'a> {
    Type,
    Field,
    Route,
    Link,
    Val,
    /// Any other tag, passed through as written.
    Unknown(&'a str),
}

impl<'a> DocTag<'a> {
    pub fn parse(tag: &'a str) -> Self {
        match tag {
            "type" => Self::Type,
            "field" => Self::Field,
            "route" => Self::Route,
            "link" => Self::Link,
            "val" => Self::Val,
            other => Self::Unknown(other),
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Type => "type",
            Self::Field => "field",
            Self::Route => "route",
            Self::Link => "link",
            Self::Val => "val",
            Self::Unknown(tag) => tag,
        }
    }
}

/// Turns a reference marker into comment text.
///
/// Closures taking `(DocTag, &str)` implement this trait.
pub trait TagResolver {
    fn resolve(&self, tag: DocTag<'_>, value: &str) -> String;
}

/// Replaces every marker with its bare value.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl TagResolver for IdentityResolver {
    fn resolve(&self, _tag: DocTag<'_>, value: &str) -> String {
        value.to_string()
    }
}

impl<F> TagResolver for F
where
    F: Fn(DocTag<'_>, &str) -> String,
{
    fn resolve(&self, tag: DocTag<'_>, value: &str) -> String {
        self(tag, value)
    }
}

fn is_tag_char(b: u8) -> bool {
    (b'A'..=b'z').contains(&b)
}

/// A marker found at `start..end` in the source text.
struct Marker<'a> {
    start: usize,
    end: usize,
    tag: &'a str,
    value: &'a str,
}

/// Find the first marker starting at or after `from`.
///
/// The value ends at the first backtick after the opening one and may not
/// span lines.
fn find_marker(text: &str, from: usize) -> Option<Marker<'_>> {
    let bytes = text.as_bytes();
    let mut start = from;

    while let Some(offset) = text[start..].find(':') {
        start += offset;
        let tag_start = start + 1;
        let tag_end = tag_start
            + bytes[tag_start..]
                .iter()
                .take_while(|&&b| is_tag_char(b))
                .count();

        if bytes.get(tag_end) == Some(&b':') && bytes.get(tag_end + 1) == Some(&b'`') {
            let value_start = tag_end + 2;
            let close = text[value_start..].find(['`', '\n']).map(|len| value_start + len);
            if let Some(close) = close.filter(|&i| bytes[i] == b'`') {
                return Some(Marker {
                    start,
                    end: close + 1,
                    tag: &text[tag_start..tag_end],
                    value: &text[value_start..close],
                });
            }
        }

        start += 1;
    }

    None
}

/// Replace every reference marker in `text` with what `resolver` makes of it.
///
/// ```
/// use stone_codegen::{DocTag, process_doc};
///
/// let resolver = |tag: DocTag<'_>, value: &str| format!("<{}:{value}>", tag.as_str());
/// assert_eq!(
///     process_doc("See :route:`list` and :type:`Metadata`.", &resolver),
///     "See <route:list> and <type:Metadata>."
/// );
/// ```
pub fn process_doc(text: &str, resolver: &dyn TagResolver) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(marker) = find_marker(text, pos) {
        out.push_str(&text[pos..marker.start]);
        out.push_str(&resolver.resolve(DocTag::parse(marker.tag), marker.value));
        pos = marker.end;
    }

    out.push_str(&text[pos..]);
    out
}

/// Process `text` and wrap it into comment lines starting with `prefix`.
///
/// Empty or whitespace-only documentation produces no lines.
pub fn render_doc(
    text: &str,
    prefix: &str,
    width: usize,
    resolver: &dyn TagResolver,
) -> Vec<String> {
    wrap_text(&process_doc(text, resolver), prefix, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tag: DocTag<'_>, value: &str) -> String {
        format!("[{}={value}]", tag.as_str())
    }

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(DocTag::parse("type"), DocTag::Type);
        assert_eq!(DocTag::parse("field"), DocTag::Field);
        assert_eq!(DocTag::parse("route"), DocTag::Route);
        assert_eq!(DocTag::parse("link"), DocTag::Link);
        assert_eq!(DocTag::parse("val"), DocTag::Val);
        assert_eq!(DocTag::parse("ref"), DocTag::Unknown("ref"));
        assert_eq!(DocTag::parse("ref").as_str(), "ref");
    }

    #[test]
    fn test_identity_resolver_keeps_values() {
        assert_eq!(
            process_doc(
                "Returns :type:`Metadata` for :field:`path`, or :val:`null`.",
                &IdentityResolver
            ),
            "Returns Metadata for path, or null."
        );
    }

    #[test]
    fn test_closure_resolver() {
        assert_eq!(
            process_doc(":link:`docs https://example.com` x", &tagged),
            "[link=docs https://example.com] x"
        );
    }

    #[test]
    fn test_unknown_tag_passed_to_resolver() {
        assert_eq!(process_doc(":foo:`bar`", &tagged), "[foo=bar]");
        assert_eq!(process_doc("::`bar`", &tagged), "[=bar]");
    }

    #[test]
    fn test_text_without_markers_unchanged() {
        let text = "Plain text: with a colon and `code`.";
        assert_eq!(process_doc(text, &tagged), text);
    }

    #[test]
    fn test_incomplete_markers_unchanged() {
        assert_eq!(process_doc(":type:`Unclosed", &tagged), ":type:`Unclosed");
        assert_eq!(process_doc(":type: `Spaced`", &tagged), ":type: `Spaced`");
        assert_eq!(process_doc(":ty pe:`X`", &tagged), ":ty pe:`X`");
        assert_eq!(
            process_doc(":type:`split\nline`", &tagged),
            ":type:`split\nline`"
        );
    }

    #[test]
    fn test_marker_after_stray_colon() {
        assert_eq!(process_doc("a: :val:`1`", &tagged), "a: [val=1]");
        assert_eq!(process_doc("x::type:`T`", &tagged), "x:[type=T]");
    }

    #[test]
    fn test_value_is_lazy() {
        assert_eq!(
            process_doc(":val:`a` and :val:`b`", &tagged),
            "[val=a] and [val=b]"
        );
    }

    #[test]
    fn test_non_ascii_text_around_markers() {
        assert_eq!(
            process_doc("Größe :field:`größe` ✓", &IdentityResolver),
            "Größe größe ✓"
        );
    }

    #[test]
    fn test_render_doc_wraps() {
        let text = "Lists :type:`Metadata` entries. ".repeat(6);
        let lines = render_doc(&text, " * ", 80, &IdentityResolver);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.starts_with(" * ") && l.len() <= 80));
        assert!(!lines.iter().any(|l| l.contains(":type:")));
    }

    #[test]
    fn test_render_doc_empty() {
        assert!(render_doc("", " * ", 80, &IdentityResolver).is_empty());
        assert!(render_doc("  \n ", " * ", 80, &IdentityResolver).is_empty());
    }
}
