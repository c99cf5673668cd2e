//! Line-aligned content chunking.
//!
//! Workspace rich-text objects cap out at a fixed character count, so report
//! bodies are split into chunks that respect the cap without ever breaking a
//! line in half. Concatenating the chunks in order reproduces the input
//! byte-for-byte.

/// Default chunk size: the workspace's per-rich-text character limit.
pub const DEFAULT_CHUNK_LEN: usize = 2000;

/// Split `text` into chunks of at most `max_len` characters, each a whole
/// number of source lines.
///
/// A single line longer than `max_len` is NOT split further; it becomes a
/// chunk on its own that exceeds the limit. Callers that need a hard
/// guarantee must bound their line lengths upstream.
#[must_use]
pub fn chunk_lines(text: &str, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.split_inclusive('\n') {
        if !current.is_empty() && current.len() + line.len() > max_len {
            chunks.push(std::mem::take(&mut current));
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(chunks: &[String]) -> String {
        chunks.concat()
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_lines("", 100).is_empty());
    }

    #[test]
    fn short_input_is_a_single_chunk() {
        let text = "alpha\nbeta\ngamma";
        let chunks = chunk_lines(text, 100);
        assert_eq!(chunks.len(), 1);
        assert_eq!(rejoin(&chunks), text);
    }

    #[test]
    fn concatenation_is_lossless() {
        let text = "line one\nline two\nline three\nline four\n";
        for max in [5, 10, 12, 100] {
            assert_eq!(rejoin(&chunk_lines(text, max)), text, "max_len={max}");
        }
    }

    #[test]
    fn lossless_without_trailing_newline() {
        let text = "no trailing\nnewline here";
        assert_eq!(rejoin(&chunk_lines(text, 15)), text);
    }

    #[test]
    fn never_splits_mid_line() {
        let text = "aaaa\nbbbb\ncccc\ndddd\n";
        let chunks = chunk_lines(text, 10);
        for chunk in &chunks {
            assert!(chunk.ends_with('\n'), "chunk {chunk:?} is line-aligned");
        }
        assert_eq!(chunks, vec!["aaaa\nbbbb\n", "cccc\ndddd\n"]);
    }

    #[test]
    fn respects_the_limit_for_normal_lines() {
        let text = "12345\n67890\nabcde\n";
        for chunk in chunk_lines(text, 12) {
            assert!(chunk.len() <= 12);
        }
    }

    #[test]
    fn oversized_line_stands_alone_and_exceeds_by_its_own_length() {
        let long = "x".repeat(50);
        let text = format!("short\n{long}\ntail\n");
        let chunks = chunk_lines(&text, 20);

        assert_eq!(rejoin(&chunks), text);
        let over: Vec<_> = chunks.iter().filter(|c| c.len() > 20).collect();
        assert_eq!(over.len(), 1);
        // The oversized chunk is exactly the long line plus its newline.
        assert_eq!(over[0].as_str(), format!("{long}\n"));
        for chunk in chunks.iter().filter(|c| c.len() <= 20) {
            assert!(chunk.len() <= 20);
        }
    }
}
