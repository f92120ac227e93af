use regex::Regex;
use std::sync::OnceLock;

/// `[[target|display]]`. Target and display each stop at the first `[` or `]`.
pub(super) fn piped_wiki_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[\[([^\[\]]*?)\|([^\[\]]*?)\]\]").expect("Invalid piped wiki-link regex")
    })
}

/// `[[display]]`. Must run after the piped form or it would match across the pipe.
pub(super) fn plain_wiki_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[([^\[\]]*?)\]\]").expect("Invalid plain wiki-link regex"))
}

/// `[text](target)`. Non-greedy, so text stops at the first `]` and target at
/// the first `)`.
pub(super) fn markdown_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid markdown link regex"))
}

/// Scheme-like prefix marking a link target as external, e.g. `https:`,
/// `mailto:`, `file:`. Deliberately loose: any run of lowercase letters or
/// digits followed by a colon counts, anywhere in the target, whether or not
/// it is a registered URI scheme. Uppercase schemes like `HTTP:` do not match.
pub(super) fn uri_scheme() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z0-9]+:").expect("Invalid URI scheme regex"))
}
