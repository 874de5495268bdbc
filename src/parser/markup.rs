//! Structure extraction from word-processor markup.
//!
//! This is approximate tag matching, not an HTML parser. Each element kind is
//! matched independently with a non-nesting pattern, so inline markup inside
//! a heading, paragraph or list item stays in the extracted text verbatim,
//! and a nested list ends at the first closing tag.
//!
//! Scan order is headings, paragraphs, unordered lists, ordered lists. The
//! shared position counter advances in that order, which is not document
//! order when headings and lists interleave.

use crate::model::{Heading, ListBlock, ListKind, StructuralModel};
use regex::{Captures, Regex};
use std::borrow::Cow;

use super::Positions;

/// Derives headings, paragraphs and lists from HTML-like markup.
#[derive(Debug, Clone)]
pub struct MarkupStructureExtractor {
    heading: Regex,
    paragraph: Regex,
    unordered: Regex,
    ordered: Regex,
    item: Regex,
    entity: Regex,
    block_break: Regex,
    line_break: Regex,
    tag: Regex,
}

impl MarkupStructureExtractor {
    /// Create a new markup extractor.
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"(?is)<h([1-6])(?:\s[^>]*)?>(.*?)</h[1-6]\s*>")
                .expect("valid heading regex"),
            paragraph: Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>")
                .expect("valid paragraph regex"),
            unordered: Regex::new(r"(?is)<ul(?:\s[^>]*)?>(.*?)</ul\s*>")
                .expect("valid unordered list regex"),
            ordered: Regex::new(r"(?is)<ol(?:\s[^>]*)?>(.*?)</ol\s*>")
                .expect("valid ordered list regex"),
            item: Regex::new(r"(?is)<li(?:\s[^>]*)?>(.*?)</li\s*>").expect("valid list item regex"),
            entity: Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|amp|lt|gt|quot|apos|nbsp);")
                .expect("valid entity regex"),
            block_break: Regex::new(r"(?i)</(?:p|h[1-6]|ul|ol|table|div|blockquote)\s*>")
                .expect("valid block break regex"),
            line_break: Regex::new(r"(?i)</(?:li|tr)\s*>|<br\s*/?>").expect("valid line break regex"),
            tag: Regex::new(r"<[^>]*>").expect("valid tag regex"),
        }
    }

    /// Extract structure, numbering positions from 0.
    pub fn extract(&self, markup: &str) -> StructuralModel {
        let mut positions = Positions::new();
        self.extract_with(markup, &mut positions)
    }

    /// Extract structure, drawing positions from `positions`.
    pub fn extract_with(&self, markup: &str, positions: &mut Positions) -> StructuralModel {
        let mut model = StructuralModel::new();

        for caps in self.heading.captures_iter(markup) {
            let decoded = self.decode_entities(&caps[2]);
            let text = decoded.trim();
            if text.is_empty() {
                continue;
            }
            // The level group only matches a single digit 1-6
            let level = caps[1].parse::<u8>().unwrap_or(1);
            model
                .headings
                .push(Heading::new(level, text, positions.advance()));
        }

        for caps in self.paragraph.captures_iter(markup) {
            let decoded = self.decode_entities(&caps[1]);
            let text = decoded.trim();
            if !text.is_empty() {
                model.paragraphs.push(text.to_string());
            }
        }

        for (pattern, kind) in [
            (&self.unordered, ListKind::Bullet),
            (&self.ordered, ListKind::Numbered),
        ] {
            for caps in pattern.captures_iter(markup) {
                let items = self.list_items(&caps[1]);
                if !items.is_empty() {
                    model
                        .lists
                        .push(ListBlock::new(kind, items, positions.advance()));
                }
            }
        }

        log::debug!(
            "Markup structure: {} headings, {} paragraphs, {} lists",
            model.headings.len(),
            model.paragraphs.len(),
            model.lists.len()
        );

        model
    }

    /// Extract the non-empty item texts of one list body.
    fn list_items(&self, body: &str) -> Vec<String> {
        self.item
            .captures_iter(body)
            .map(|caps| self.decode_entities(&caps[1]).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Flatten markup into plain text.
    ///
    /// Block closers become blank lines, list items and `<br>` become line
    /// breaks, every other tag is dropped and entities are decoded.
    pub fn to_text(&self, markup: &str) -> String {
        let text = self.block_break.replace_all(markup, "\n\n");
        let text = self.line_break.replace_all(&text, "\n");
        let text = self.tag.replace_all(&text, "");
        self.decode_entities(&text).into_owned()
    }

    /// Decode XML entities, `&nbsp;` and numeric character references.
    pub fn decode_entities<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.contains('&') {
            return Cow::Borrowed(text);
        }

        self.entity.replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            match name {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                "nbsp" => "\u{00A0}".to_string(),
                _ => decode_numeric(name).unwrap_or_else(|| caps[0].to_string()),
            }
        })
    }
}

impl Default for MarkupStructureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode `#NNN` or `#xHH` into the referenced character.
fn decode_numeric(reference: &str) -> Option<String> {
    let digits = reference.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let extractor = MarkupStructureExtractor::new();
        let markup = "<h1>Annual Report</h1><p>Revenue grew this year.</p>\
                      <h2 class=\"sub\">Summary</h2><p>   </p><p>Done.</p>";
        let model = extractor.extract(markup);

        assert_eq!(
            model.headings,
            vec![
                Heading::new(1, "Annual Report", 0),
                Heading::new(2, "Summary", 1),
            ]
        );
        // Empty paragraphs dropped, short ones kept
        assert_eq!(model.paragraphs, vec!["Revenue grew this year.", "Done."]);
    }

    #[test]
    fn test_nested_inline_markup_leaks() {
        let extractor = MarkupStructureExtractor::new();
        let model = extractor.extract("<h2><strong>Bold</strong> heading</h2><p>a <em>b</em></p>");
        assert_eq!(model.headings[0].text, "<strong>Bold</strong> heading");
        assert_eq!(model.paragraphs[0], "a <em>b</em>");
    }

    #[test]
    fn test_lists_in_scan_order() {
        let extractor = MarkupStructureExtractor::new();
        let markup = "<ol><li>first</li><li>second</li></ol>\
                      <h1>Title</h1>\
                      <ul><li>alpha</li><li> </li><li>beta</li></ul>";
        let model = extractor.extract(markup);

        // Headings are numbered first, then unordered lists, then ordered lists
        assert_eq!(model.headings[0].position, 0);
        assert_eq!(model.lists.len(), 2);
        assert_eq!(model.lists[0].kind, ListKind::Bullet);
        assert_eq!(model.lists[0].items, vec!["alpha", "beta"]);
        assert_eq!(model.lists[0].position, 1);
        assert_eq!(model.lists[1].kind, ListKind::Numbered);
        assert_eq!(model.lists[1].items, vec!["first", "second"]);
        assert_eq!(model.lists[1].position, 2);
    }

    #[test]
    fn test_empty_list_dropped() {
        let extractor = MarkupStructureExtractor::new();
        let model = extractor.extract("<ul><li>  </li></ul><ul></ul><h3>Next</h3>");
        assert!(model.lists.is_empty());
        assert_eq!(model.headings[0].position, 0);
    }

    #[test]
    fn test_does_not_confuse_similar_tags() {
        let extractor = MarkupStructureExtractor::new();
        let model = extractor.extract("<pre>code block here</pre><hr><header>x</header>");
        assert!(model.is_empty());
    }

    #[test]
    fn test_unclosed_tags_are_ignored() {
        let extractor = MarkupStructureExtractor::new();
        let model = extractor.extract("<h1>Broken heading<p>Still a paragraph</p><ul><li>x");
        assert!(model.headings.is_empty());
        assert!(model.lists.is_empty());
    }

    #[test]
    fn test_entities_decoded() {
        let extractor = MarkupStructureExtractor::new();
        let model = extractor.extract("<p>R&amp;D &lt;draft&gt; &#8212; &#x65E5;</p>");
        assert_eq!(model.paragraphs[0], "R&D <draft> \u{2014} 日");
        assert_eq!(extractor.decode_entities("&bogus; &#xZZ;"), "&bogus; &#xZZ;");
    }

    #[test]
    fn test_to_text() {
        let extractor = MarkupStructureExtractor::new();
        let markup = "<h1>Title</h1><p>Body <strong>text</strong>.</p><ul><li>one</li><li>two</li></ul>";
        let text = extractor.to_text(markup);
        assert_eq!(text, "Title\n\nBody text.\n\none\ntwo\n\n\n");
    }

    #[test]
    fn test_positions_continue_from_counter() {
        let extractor = MarkupStructureExtractor::new();
        let mut positions = Positions::starting_at(10);
        let model = extractor.extract_with("<h1>A</h1><ul><li>x</li></ul>", &mut positions);
        assert_eq!(model.headings[0].position, 10);
        assert_eq!(model.lists[0].position, 11);
        assert_eq!(positions.peek(), 12);
    }
}
