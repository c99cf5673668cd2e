//! Report text and per-model attempt outcomes.

/// A finished report body. Never empty once it leaves the composer: when
/// every generation attempt fails, the fallback text stands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report(String);

impl Report {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a single generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success(String),
    Failure(String),
}

/// One tried model and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAttempt {
    pub model: String,
    pub outcome: AttemptOutcome,
}

impl ReportAttempt {
    #[must_use]
    pub fn failure(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            outcome: AttemptOutcome::Failure(reason.into()),
        }
    }
}

/// Drop any conversational preamble the generator emitted before the known
/// report header. If the header is absent the text is returned unchanged.
#[must_use]
pub fn strip_preamble(text: &str, header: &str) -> String {
    match text.find(header) {
        Some(idx) if idx > 0 => text[idx..].to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "# Market Report";

    #[test]
    fn strips_leading_chatter() {
        let text = format!("Sure, here is your report:\n\n{HEADER}\nbody");
        assert_eq!(strip_preamble(&text, HEADER), format!("{HEADER}\nbody"));
    }

    #[test]
    fn header_at_start_is_untouched() {
        let text = format!("{HEADER}\nbody");
        assert_eq!(strip_preamble(&text, HEADER), text);
    }

    #[test]
    fn missing_header_returns_input() {
        let text = "free-form text without the marker";
        assert_eq!(strip_preamble(text, HEADER), text);
    }

    #[test]
    fn attempt_failure_constructor() {
        let attempt = ReportAttempt::failure("model-a", "timed out");
        assert_eq!(attempt.model, "model-a");
        assert_eq!(attempt.outcome, AttemptOutcome::Failure("timed out".into()));
    }
}
