//! Salience-based digest extraction for chat notifications.

/// Maximum number of highlight lines in a digest.
pub const MAX_HIGHLIGHTS: usize = 5;

/// Digest used when the report is the generation-failure fallback.
pub const FALLBACK_DIGEST: &str =
    "The daily crypto report could not be generated due to an API error.";

/// Digest used when nothing in the report matched any heuristic.
pub const PLACEHOLDER_DIGEST: &str =
    "Daily crypto analysis completed. Check the full report for details.";

const ACTION_WORDS: &[&str] = &["buy", "sell", "hold"];
const TICKERS: &[&str] = &["btc", "eth", "sol"];
const LONG_LINE_MIN_LEN: usize = 40;
const LONG_LINE_COUNT: usize = 3;

/// Pick up to [`MAX_HIGHLIGHTS`] salient lines from the report.
///
/// Lines count as salient when they mention an action word, a tracked
/// ticker, a dollar amount, or a percentage. If nothing matches, the first
/// few sufficiently long non-heading lines stand in; if the report is empty
/// of those too, a static placeholder is returned. `fallback_header`
/// identifies the degraded fallback report, which gets a fixed digest.
#[must_use]
pub fn extract_highlights(report: &str, fallback_header: &str) -> String {
    if report.contains(fallback_header) {
        return FALLBACK_DIGEST.to_string();
    }

    let lines: Vec<&str> = report
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let salient: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| is_salient(l))
        .take(MAX_HIGHLIGHTS)
        .collect();

    if !salient.is_empty() {
        return format!("Key Highlights:\n{}", salient.join("\n"));
    }

    let long_lines: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| !l.starts_with('#') && l.chars().count() >= LONG_LINE_MIN_LEN)
        .take(LONG_LINE_COUNT)
        .collect();

    if !long_lines.is_empty() {
        return long_lines.join("\n");
    }

    PLACEHOLDER_DIGEST.to_string()
}

fn is_salient(line: &str) -> bool {
    if line.contains('$') || line.contains('%') {
        return true;
    }
    let lower = line.to_lowercase();
    ACTION_WORDS.iter().chain(TICKERS).any(|w| lower.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK_HEADER: &str = "# Daily Crypto Brief - Service Alert";

    #[test]
    fn fallback_report_gets_fixed_digest() {
        let report = format!("{FALLBACK_HEADER}\nSystem status: offline");
        assert_eq!(extract_highlights(&report, FALLBACK_HEADER), FALLBACK_DIGEST);
    }

    #[test]
    fn picks_lines_with_price_and_action_words() {
        let report = "# Report\n\
                      intro line\n\
                      BTC trading at $60,000\n\
                      Recommendation: hold through the quarter\n\
                      closing thoughts";
        let digest = extract_highlights(report, FALLBACK_HEADER);
        assert!(digest.starts_with("Key Highlights:"));
        assert!(digest.contains("$60,000"));
        assert!(digest.contains("hold"));
        assert!(!digest.contains("closing thoughts"));
    }

    #[test]
    fn caps_at_five_highlights() {
        let report = (0..10)
            .map(|i| format!("line {i} is up 5%"))
            .collect::<Vec<_>>()
            .join("\n");
        let digest = extract_highlights(&report, FALLBACK_HEADER);
        // Header line plus five highlight lines.
        assert_eq!(digest.lines().count(), 1 + MAX_HIGHLIGHTS);
    }

    #[test]
    fn falls_back_to_long_non_heading_lines() {
        let report = "# A heading that would otherwise qualify by length alone\n\
                      this narrative line runs well past forty characters total\n\
                      short one";
        let digest = extract_highlights(report, FALLBACK_HEADER);
        assert!(digest.contains("narrative"));
        assert!(!digest.contains("heading"));
        assert!(!digest.starts_with("Key Highlights:"));
    }

    #[test]
    fn static_placeholder_when_nothing_matches() {
        let report = "# Heading\nshort\nalso short";
        assert_eq!(
            extract_highlights(report, FALLBACK_HEADER),
            PLACEHOLDER_DIGEST
        );
    }

    #[test]
    fn percentage_lines_are_salient() {
        let report = "momentum improved 12% week over week";
        let digest = extract_highlights(report, FALLBACK_HEADER);
        assert!(digest.contains("12%"));
    }
}
