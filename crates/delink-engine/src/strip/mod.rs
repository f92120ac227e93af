//! The link-stripping transform.
//!
//! Reduces wiki-links to their display text and unwraps markdown links whose
//! target is internal, leaving everything else byte-for-byte untouched:
//!
//! - `[[target|display]]` → `display`
//! - `[[display]]` → `display`
//! - `[text](target)` → `text`, unless the target looks like an external URI,
//!   in which case the whole link is kept verbatim.
//!
//! The transform is a pure function over the input text. It cannot fail and
//! holds no state between calls.

use regex::Captures;

mod patterns;

/// Strips internal links from `text`, returning a fresh string.
///
/// Three substitution passes run in order, each over the previous pass's
/// output, rewriting every non-overlapping occurrence left to right:
///
/// 1. Piped wiki-links collapse to their display text. This must happen
///    before pass 2, whose pattern would otherwise match across the pipe.
/// 2. Remaining plain wiki-links collapse to their display text.
/// 3. Markdown links are unwrapped to their link text when the target is
///    internal; external links are left alone.
///
/// Text with no link syntax comes back unchanged, and the output is a fixed
/// point: stripping already-stripped text is a no-op.
pub fn strip_links(text: &str) -> String {
    let text = patterns::piped_wiki_link().replace_all(text, "$2");
    let text = patterns::plain_wiki_link().replace_all(&text, "$1");
    let text = patterns::markdown_link().replace_all(&text, |caps: &Captures<'_>| {
        let (full, [link_text, target]) = caps.extract();
        if is_external(target) {
            full.to_string()
        } else {
            link_text.to_string()
        }
    });
    text.into_owned()
}

/// Whether a markdown link target points outside the local note collection.
///
/// A target counts as external when it contains a scheme-like prefix
/// (`[a-z0-9]+:`). This matches how Obsidian classifies links: permissive
/// about unregistered schemes, blind to uppercase ones like `HTTP:`.
fn is_external(target: &str) -> bool {
    patterns::uri_scheme().is_match(target)
}
