//! Mixed-script word counting.

use regex::Regex;

/// Breakdown of a word count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCount {
    /// Characters left after removing ASCII letters, digits, whitespace and punctuation
    pub script_chars: usize,

    /// Runs of ASCII letters
    pub latin_words: usize,
}

impl WordCount {
    /// Combined count.
    pub fn total(&self) -> usize {
        self.script_chars + self.latin_words
    }
}

/// Approximate word counter for Latin and CJK text.
///
/// Every character that is not an ASCII letter, digit, whitespace or
/// punctuation counts as one unit (ideographs, kana), and every maximal run of
/// ASCII letters counts as one word. Digits and punctuation count toward
/// neither term.
#[derive(Debug, Clone)]
pub struct WordCounter {
    ignored: Regex,
    latin_word: Regex,
}

impl WordCounter {
    /// Create a new word counter.
    pub fn new() -> Self {
        Self {
            ignored: Regex::new(r"[a-zA-Z0-9\s\p{P}]").expect("valid ignored-chars regex"),
            latin_word: Regex::new(r"[a-zA-Z]+").expect("valid latin-word regex"),
        }
    }

    /// Count words in text.
    pub fn count(&self, text: &str) -> usize {
        self.count_detailed(text).total()
    }

    /// Count words, keeping the two terms apart.
    pub fn count_detailed(&self, text: &str) -> WordCount {
        let script_chars = self.ignored.replace_all(text, "").chars().count();
        let latin_words = self.latin_word.find_iter(text).count();

        WordCount {
            script_chars,
            latin_words,
        }
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_tokens() {
        let counter = WordCounter::new();
        assert_eq!(counter.count("the quick brown fox jumps"), 5);
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn test_ascii_token_count_matches_n() {
        let counter = WordCounter::new();
        for n in [1usize, 2, 7, 50] {
            let text = vec!["word"; n].join(" ");
            assert_eq!(counter.count(&text), n);
        }
    }

    #[test]
    fn test_numbers_and_punctuation_ignored() {
        let counter = WordCounter::new();
        assert_eq!(counter.count("Hello, world! 2024 ... 42"), 2);
    }

    #[test]
    fn test_japanese_chars_count_individually() {
        let counter = WordCounter::new();
        let count = counter.count_detailed("こんにちは、世界。");
        assert_eq!(count.script_chars, 7);
        assert_eq!(count.latin_words, 0);
    }

    #[test]
    fn test_mixed_script() {
        let counter = WordCounter::new();
        // 4 kanji/kana + 2 latin words
        assert_eq!(counter.count("日本語で Rust code"), 6);
    }

    #[test]
    fn test_letters_split_by_digits() {
        let counter = WordCounter::new();
        assert_eq!(counter.count("abc123def"), 2);
    }
}
