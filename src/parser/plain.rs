//! Line-classification structure extraction for unstructured text.

use crate::model::{Heading, ListBlock, ListKind, StructuralModel};
use regex::Regex;

use super::Positions;

/// What a single trimmed, non-blank line is.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineClass<'a> {
    Heading { level: u8, text: &'a str },
    Item { kind: ListKind, text: &'a str },
    Text,
}

/// List state between lines.
#[derive(Debug)]
enum ListState {
    Idle,
    InBulletList(Vec<String>),
    InNumberedList(Vec<String>),
}

impl ListState {
    fn open(kind: ListKind) -> Self {
        match kind {
            ListKind::Bullet => ListState::InBulletList(Vec::new()),
            ListKind::Numbered => ListState::InNumberedList(Vec::new()),
        }
    }

    fn kind(&self) -> Option<ListKind> {
        match self {
            ListState::Idle => None,
            ListState::InBulletList(_) => Some(ListKind::Bullet),
            ListState::InNumberedList(_) => Some(ListKind::Numbered),
        }
    }

    fn push(&mut self, item: &str) {
        match self {
            ListState::InBulletList(items) | ListState::InNumberedList(items) => {
                items.push(item.to_string())
            }
            ListState::Idle => {}
        }
    }

    /// Close the open list, if any, as a block at the next position.
    fn flush(&mut self, positions: &mut Positions) -> Option<ListBlock> {
        let kind = self.kind()?;
        let items = match std::mem::replace(self, ListState::Idle) {
            ListState::InBulletList(items) | ListState::InNumberedList(items) => items,
            ListState::Idle => return None,
        };
        if items.is_empty() {
            return None;
        }
        Some(ListBlock::new(kind, items, positions.advance()))
    }
}

/// Derives headings, paragraphs and lists from plain text, one line at a time.
///
/// Markdown-style `#` headings, `-`/`*`/`•` bullets and `1.` numbered items
/// are recognized. Consecutive items of one kind form a list block; a kind
/// switch, a paragraph line or the end of input closes it. Blank lines do not
/// close a list. Other lines become paragraphs when strictly longer than the
/// configured minimum and are dropped as noise otherwise.
#[derive(Debug, Clone)]
pub struct PlainTextStructureExtractor {
    heading: Regex,
    bullet: Regex,
    numbered: Regex,
    min_paragraph_len: usize,
}

impl PlainTextStructureExtractor {
    /// Create an extractor with the given paragraph length threshold.
    pub fn new(min_paragraph_len: usize) -> Self {
        Self {
            heading: Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid heading regex"),
            bullet: Regex::new(r"^[-\u{2022}*]\s+(.+)$").expect("valid bullet regex"),
            numbered: Regex::new(r"^\d+\.\s+(.+)$").expect("valid numbered regex"),
            min_paragraph_len,
        }
    }

    /// Extract structure, numbering positions from 0.
    pub fn extract(&self, text: &str) -> StructuralModel {
        let mut positions = Positions::new();
        self.extract_with(text, &mut positions)
    }

    /// Extract structure, drawing positions from `positions`.
    pub fn extract_with(&self, text: &str, positions: &mut Positions) -> StructuralModel {
        let mut model = StructuralModel::new();
        let mut state = ListState::Idle;
        let mut noise_lines = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.classify(line) {
                LineClass::Heading { level, text } => {
                    model
                        .headings
                        .push(Heading::new(level, text, positions.advance()));
                }
                LineClass::Item { kind, text } => {
                    if state.kind() != Some(kind) {
                        model.lists.extend(state.flush(positions));
                        state = ListState::open(kind);
                    }
                    state.push(text);
                }
                LineClass::Text => {
                    model.lists.extend(state.flush(positions));
                    if line.chars().count() > self.min_paragraph_len {
                        model.paragraphs.push(line.to_string());
                    } else {
                        noise_lines += 1;
                    }
                }
            }
        }
        model.lists.extend(state.flush(positions));

        log::debug!(
            "Text structure: {} headings, {} paragraphs, {} lists, {} short lines dropped",
            model.headings.len(),
            model.paragraphs.len(),
            model.lists.len(),
            noise_lines
        );

        model
    }

    fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(caps) = self.heading.captures(line) {
            let (Some(marks), Some(text)) = (caps.get(1), caps.get(2)) else {
                return LineClass::Text;
            };
            return LineClass::Heading {
                level: marks.as_str().len() as u8,
                text: text.as_str().trim(),
            };
        }
        if let Some(text) = self.bullet.captures(line).and_then(|caps| caps.get(1)) {
            return LineClass::Item {
                kind: ListKind::Bullet,
                text: text.as_str(),
            };
        }
        if let Some(text) = self.numbered.captures(line).and_then(|caps| caps.get(1)) {
            return LineClass::Item {
                kind: ListKind::Numbered,
                text: text.as_str(),
            };
        }
        LineClass::Text
    }
}

impl Default for PlainTextStructureExtractor {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_document() {
        let extractor = PlainTextStructureExtractor::default();
        let text = "# Title\n\nHello world, this is a paragraph.\n\n- item1\n- item2\n\n1. first\n2. second\n";
        let model = extractor.extract(text);

        assert_eq!(model.headings, vec![Heading::new(1, "Title", 0)]);
        assert_eq!(model.paragraphs, vec!["Hello world, this is a paragraph."]);
        assert_eq!(
            model.lists,
            vec![
                ListBlock::new(ListKind::Bullet, vec!["item1".into(), "item2".into()], 1),
                ListBlock::new(ListKind::Numbered, vec!["first".into(), "second".into()], 2),
            ]
        );
    }

    #[test]
    fn test_heading_levels() {
        let extractor = PlainTextStructureExtractor::default();
        let model = extractor.extract("###### Deep\n####### Too deep for a heading\n#NoSpace");
        assert_eq!(model.headings.len(), 1);
        assert_eq!(model.headings[0].level, 6);
        assert_eq!(model.headings[0].text, "Deep");
        assert_eq!(model.paragraphs, vec!["####### Too deep for a heading"]);
        assert!(model.headings.iter().all(|h| (1..=6).contains(&h.level)));
    }

    #[test]
    fn test_marker_switch_splits_lists() {
        let extractor = PlainTextStructureExtractor::default();
        let model = extractor.extract("- a\n* b\n1. c\n2. d\n• e");

        assert_eq!(model.lists.len(), 3);
        assert_eq!(model.lists[0].kind, ListKind::Bullet);
        assert_eq!(model.lists[0].items, vec!["a", "b"]);
        assert_eq!(model.lists[1].kind, ListKind::Numbered);
        assert_eq!(model.lists[1].items, vec!["c", "d"]);
        assert_eq!(model.lists[2].kind, ListKind::Bullet);
        assert_eq!(model.lists[2].items, vec!["e"]);
        let positions: Vec<u32> = model.lists.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_blank_lines_keep_list_open() {
        let extractor = PlainTextStructureExtractor::default();
        let model = extractor.extract("- a\n\n   \n- b");
        assert_eq!(model.lists.len(), 1);
        assert_eq!(model.lists[0].items, vec!["a", "b"]);
    }

    #[test]
    fn test_paragraph_closes_list_and_heading_does_not() {
        let extractor = PlainTextStructureExtractor::default();
        let model = extractor.extract("- a\n## Section\n- b\nThis line is long enough.\n- c");

        // The heading takes position 0 while the first list is still open
        assert_eq!(model.headings[0].position, 0);
        assert_eq!(model.lists.len(), 2);
        assert_eq!(model.lists[0].items, vec!["a", "b"]);
        assert_eq!(model.lists[0].position, 1);
        assert_eq!(model.lists[1].items, vec!["c"]);
        assert_eq!(model.lists[1].position, 2);
    }

    #[test]
    fn test_short_lines_close_list_but_are_dropped() {
        let extractor = PlainTextStructureExtractor::default();
        let model = extractor.extract("- a\nshort\n- b");
        assert!(model.paragraphs.is_empty());
        assert_eq!(model.lists.len(), 2);
    }

    #[test]
    fn test_paragraph_threshold_is_exclusive() {
        let extractor = PlainTextStructureExtractor::default();
        let model = extractor.extract("exactly10!\neleven char\n日本語の文章はここです。");
        // 10 chars dropped, 11 kept; length is counted in characters
        assert_eq!(model.paragraphs, vec!["eleven char", "日本語の文章はここです。"]);
    }

    #[test]
    fn test_custom_threshold() {
        let extractor = PlainTextStructureExtractor::new(0);
        let model = extractor.extract("ok\nx");
        assert_eq!(model.paragraphs, vec!["ok", "x"]);
    }

    #[test]
    fn test_marker_requires_space() {
        let extractor = PlainTextStructureExtractor::default();
        let model = extractor.extract("-dash\n1.5 million units shipped\n*emphasis* in a sentence");
        assert!(model.lists.is_empty());
        assert_eq!(
            model.paragraphs,
            vec!["1.5 million units shipped", "*emphasis* in a sentence"]
        );
    }

    #[test]
    fn test_indented_and_crlf_lines() {
        let extractor = PlainTextStructureExtractor::default();
        let model = extractor.extract("  # Indented\r\n   - item\r\n");
        assert_eq!(model.headings[0].text, "Indented");
        assert_eq!(model.lists[0].items, vec!["item"]);
    }

    #[test]
    fn test_empty_input() {
        let extractor = PlainTextStructureExtractor::default();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("\n\n  \n").is_empty());
    }
}
