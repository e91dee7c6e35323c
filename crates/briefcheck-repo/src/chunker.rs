//! Recursive character text splitter.
//!
//! Splits on the coarsest separator present (`"\n\n"`, then `"\n"`, then
//! `" "`, then between characters), recursing into pieces that are still too
//! long, and merges small pieces back into chunks of at most `chunk_size`
//! characters with up to `chunk_overlap` characters carried over between
//! neighbours. Separators stay attached to the start of the following piece.

use std::collections::VecDeque;

use briefcheck_core::config::RepositoryConfig;

const SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

#[derive(Debug, Clone)]
pub struct TextChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextChunker {
    /// `chunk_size` is clamped to at least 1 and `chunk_overlap` to below it.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            chunk_overlap: chunk_overlap.min(chunk_size - 1),
        }
    }

    pub fn from_config(config: &RepositoryConfig) -> Self {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Split `text` into trimmed, non-empty chunks of at most `chunk_size` chars.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_with(text, &SEPARATORS)
    }

    fn split_with(&self, text: &str, separators: &[&str]) -> Vec<String> {
        let (separator, finer) = pick_separator(text, separators);
        let mut chunks = Vec::new();
        let mut small: Vec<&str> = Vec::new();

        for piece in split_keeping_separator(text, separator) {
            if char_len(piece) < self.chunk_size {
                small.push(piece);
                continue;
            }
            if !small.is_empty() {
                chunks.extend(self.merge(&small));
                small.clear();
            }
            if finer.is_empty() {
                let trimmed = piece.trim();
                if !trimmed.is_empty() {
                    chunks.push(trimmed.to_string());
                }
            } else {
                chunks.extend(self.split_with(piece, finer));
            }
        }
        if !small.is_empty() {
            chunks.extend(self.merge(&small));
        }
        chunks
    }

    /// Greedily pack pieces into chunks, keeping a tail of up to
    /// `chunk_overlap` chars as the head of the next chunk.
    fn merge(&self, pieces: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        let mut window: VecDeque<(&str, usize)> = VecDeque::new();
        let mut total = 0usize;

        for piece in pieces {
            let len = char_len(piece);
            if total + len > self.chunk_size && !window.is_empty() {
                push_joined(&window, &mut out);
                while total > self.chunk_overlap || (total + len > self.chunk_size && total > 0) {
                    match window.pop_front() {
                        Some((_, dropped)) => total -= dropped,
                        None => break,
                    }
                }
            }
            window.push_back((piece, len));
            total += len;
        }
        push_joined(&window, &mut out);
        out
    }
}

fn push_joined(window: &VecDeque<(&str, usize)>, out: &mut Vec<String>) {
    let joined: String = window.iter().map(|(s, _)| *s).collect();
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

/// First separator that occurs in `text` (the empty separator always
/// matches), and the finer separators after it.
fn pick_separator<'s>(text: &str, separators: &'s [&'s str]) -> (&'s str, &'s [&'s str]) {
    for (i, sep) in separators.iter().enumerate() {
        if sep.is_empty() {
            return (*sep, &[]);
        }
        if text.contains(sep) {
            return (*sep, &separators[i + 1..]);
        }
    }
    ("", &[])
}

/// Split so that every piece after the first starts with `separator`.
/// The empty separator splits into single characters. Empty pieces are dropped.
fn split_keeping_separator<'t>(text: &'t str, separator: &str) -> Vec<&'t str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }
    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, _) in text.match_indices(separator) {
        if idx > start {
            pieces.push(&text[start..idx]);
        }
        start = idx;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_chunk() {
        let chunker = TextChunker::new(100, 20);
        assert_eq!(chunker.split("  fn main() {}\n"), vec!["fn main() {}"]);
    }

    #[test]
    fn empty_and_whitespace_yield_nothing() {
        let chunker = TextChunker::new(10, 2);
        assert!(chunker.split("").is_empty());
        assert!(chunker.split(" \n\n \n").is_empty());
    }

    #[test]
    fn paragraphs_split_before_lines() {
        let chunker = TextChunker::new(12, 0);
        let chunks = chunker.split("aaaa bbbb\n\ncccc dddd");
        assert_eq!(chunks, vec!["aaaa bbbb", "cccc dddd"]);
    }

    #[test]
    fn words_overlap_between_chunks() {
        let chunker = TextChunker::new(10, 5);
        let chunks = chunker.split("one two three four");
        // Each chunk fits, and consecutive chunks share a word.
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
        assert!(chunks.len() >= 2);
        assert!(chunks
            .windows(2)
            .any(|w| w[0].split(' ').last() == w[1].split(' ').next()));
    }

    #[test]
    fn unbroken_text_falls_back_to_characters() {
        let chunker = TextChunker::new(4, 0);
        assert_eq!(chunker.split("abcdefghij"), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn separator_pieces_keep_leading_separator() {
        assert_eq!(split_keeping_separator("a\nb\nc", "\n"), vec!["a", "\nb", "\nc"]);
        assert_eq!(split_keeping_separator("\n\nx", "\n\n"), vec!["\n\nx"]);
    }

    #[test]
    fn multibyte_text_is_counted_in_chars() {
        let chunker = TextChunker::new(3, 0);
        let chunks = chunker.split("ñáéíóú");
        assert_eq!(chunks, vec!["ñáé", "íóú"]);
    }
}
