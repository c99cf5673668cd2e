//! Caption assembly under the channel's hard size limit.
//!
//! The photo caption is header + digest + footer. The digest is escaped for
//! the legacy Markdown parser, then truncated to whatever budget remains
//! after the fixed header and footer. If header and footer alone blow the
//! limit, a minimal caption ships instead and the digest is dropped.

/// Hard caption limit enforced by the channel.
pub const CAPTION_HARD_LIMIT: usize = 1024;

/// Marker appended when the digest had to be cut.
pub const TRUNCATION_MARKER: &str = "...";

/// Caption used when even header + footer exceed the hard limit.
pub const MINIMAL_CAPTION: &str = "Daily Crypto Brief";

/// Escape characters the legacy Markdown parser would otherwise interpret.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build the photo caption, guaranteed to fit [`CAPTION_HARD_LIMIT`].
#[must_use]
pub fn build_caption(date_line: &str, digest: &str, page_url: &str) -> String {
    let header = format!("*Daily Crypto Brief - {date_line}*\n\n");
    let footer = format!("\n\n[View the full report]({page_url})\n_automated coinbrief run_");

    let header_len = header.chars().count();
    let footer_len = footer.chars().count();
    if header_len + footer_len >= CAPTION_HARD_LIMIT {
        return MINIMAL_CAPTION.to_string();
    }

    let available = CAPTION_HARD_LIMIT - header_len - footer_len;
    let escaped = escape_markdown(digest);
    let body = if escaped.chars().count() > available {
        truncate_with_marker(&escaped, available)
    } else {
        escaped
    };

    format!("{header}{body}{footer}")
}

/// Cut `text` to `budget` characters including the truncation marker.
fn truncate_with_marker(text: &str, budget: usize) -> String {
    let keep = budget.saturating_sub(TRUNCATION_MARKER.chars().count());
    let mut cut: String = text.chars().take(keep).collect();
    // A cut can land right after an escape backslash; drop it rather than
    // let it swallow the marker's first character.
    while cut.ends_with('\\') {
        cut.pop();
    }
    cut.push_str(TRUNCATION_MARKER);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.notion.so/some-page";
    const DATE: &str = "Thursday, August 7, 2026";

    #[test]
    fn escapes_legacy_markdown_characters() {
        assert_eq!(escape_markdown("plain"), "plain");
        assert_eq!(escape_markdown("a_b"), "a\\_b");
        assert_eq!(escape_markdown("*bold* [link] `code`"), "\\*bold\\* \\[link] \\`code\\`");
    }

    #[test]
    fn short_digest_passes_through() {
        let caption = build_caption(DATE, "BTC steady at $60,000", URL);
        assert!(caption.chars().count() <= CAPTION_HARD_LIMIT);
        assert!(caption.contains("BTC steady at $60,000"));
        assert!(caption.contains(URL));
        assert!(!caption.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn long_digest_is_truncated_with_marker() {
        let digest = "x".repeat(3 * CAPTION_HARD_LIMIT);
        let caption = build_caption(DATE, &digest, URL);

        assert!(caption.chars().count() <= CAPTION_HARD_LIMIT);
        // The digest portion (everything before the footer) ends with the marker.
        let footer_start = caption.find("\n\n[View").expect("footer present");
        assert!(caption[..footer_start].ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn truncated_caption_exactly_fills_the_budget() {
        let digest = "y".repeat(CAPTION_HARD_LIMIT + 1);
        let caption = build_caption(DATE, &digest, URL);
        assert_eq!(caption.chars().count(), CAPTION_HARD_LIMIT);
    }

    #[test]
    fn oversized_header_footer_degrades_to_minimal_caption() {
        let long_url = format!("https://example.com/{}", "p".repeat(CAPTION_HARD_LIMIT));
        let caption = build_caption(DATE, "digest text", &long_url);
        assert_eq!(caption, MINIMAL_CAPTION);
    }

    #[test]
    fn truncation_never_leaves_a_dangling_escape() {
        // Force the cut to land inside an escape sequence.
        let digest = "_".repeat(CAPTION_HARD_LIMIT * 2);
        let caption = build_caption(DATE, &digest, URL);
        let footer_start = caption.find("\n\n[View").expect("footer present");
        let body = &caption[..footer_start];
        assert!(body.ends_with(TRUNCATION_MARKER));
        assert!(!body.trim_end_matches(TRUNCATION_MARKER).ends_with('\\'));
        assert!(caption.chars().count() <= CAPTION_HARD_LIMIT);
    }
}
