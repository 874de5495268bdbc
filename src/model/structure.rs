//! Structural model: headings, paragraphs, list blocks.

use serde::{Deserialize, Serialize};

/// A heading with its level and shared position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,

    /// Heading text, trimmed and non-empty
    pub text: String,

    /// Position in the shared heading/list sequence
    pub position: u32,
}

impl Heading {
    /// Create a new heading. The level is clamped into 1..=6.
    pub fn new(level: u8, text: impl Into<String>, position: u32) -> Self {
        Self {
            level: level.clamp(1, 6),
            text: text.into(),
            position,
        }
    }
}

/// Kind of list block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Unordered list (`-`, `*`, `•`, `<ul>`)
    Bullet,
    /// Ordered list (`1.`, `<ol>`)
    Numbered,
}

impl ListKind {
    /// Marker used when rendering an item of this kind.
    pub fn marker(&self, index: usize) -> String {
        match self {
            ListKind::Bullet => "-".to_string(),
            ListKind::Numbered => format!("{}.", index + 1),
        }
    }
}

/// A contiguous run of list items treated as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    /// Bullet or numbered
    #[serde(rename = "type")]
    pub kind: ListKind,

    /// Item texts, never empty
    pub items: Vec<String>,

    /// Position in the shared heading/list sequence
    pub position: u32,
}

impl ListBlock {
    /// Create a new list block.
    pub fn new(kind: ListKind, items: Vec<String>, position: u32) -> Self {
        Self {
            kind,
            items,
            position,
        }
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Headings, paragraphs and lists derived from one document.
///
/// Positions are unique and increasing within `headings` and within `lists`;
/// merged by position the two sequences give the combined order. Paragraphs
/// carry no position and are kept in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralModel {
    /// Headings in emission order
    pub headings: Vec<Heading>,

    /// Paragraph texts in encounter order
    pub paragraphs: Vec<String>,

    /// List blocks in emission order
    pub lists: Vec<ListBlock>,
}

impl StructuralModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no structure was found.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.paragraphs.is_empty() && self.lists.is_empty()
    }

    /// Total number of list items across all blocks.
    pub fn list_item_count(&self) -> usize {
        self.lists.iter().map(|l| l.items.len()).sum()
    }

    /// Headings and list blocks merged by position.
    pub fn ordered_blocks(&self) -> Vec<Block<'_>> {
        let mut blocks: Vec<Block<'_>> = self
            .headings
            .iter()
            .map(Block::Heading)
            .chain(self.lists.iter().map(Block::List))
            .collect();
        blocks.sort_by_key(|b| b.position());
        blocks
    }
}

/// A positioned block borrowed from a `StructuralModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// A heading
    Heading(&'a Heading),
    /// A list block
    List(&'a ListBlock),
}

impl Block<'_> {
    /// Position of the block in the shared sequence.
    pub fn position(&self) -> u32 {
        match self {
            Block::Heading(h) => h.position,
            Block::List(l) => l.position,
        }
    }
}
