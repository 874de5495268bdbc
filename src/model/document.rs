//! Document-level types.

use super::StructuralModel;
use crate::detect::InputFormat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully extracted document, ready for downstream layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Cleaned full text
    pub text: String,

    /// Original filename
    pub original_filename: String,

    /// Declared input format
    pub file_type: InputFormat,

    /// Mixed-script word count
    pub word_count: usize,

    /// When extraction ran
    pub extracted_at: DateTime<Utc>,

    /// Headings, paragraphs and lists
    pub structure: StructuralModel,

    /// Inferred and passed-through metadata
    pub metadata: Metadata,
}

impl Document {
    /// Get the inferred or supplied title.
    pub fn title(&self) -> Option<&str> {
        self.metadata.title.as_deref()
    }

    /// Get the detected language code.
    pub fn language(&self) -> Option<&str> {
        self.metadata.language.as_deref()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author (PDF only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Creation date, verbatim from the source (PDF only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    /// Last modification date, verbatim from the source (PDF only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,

    /// Total number of pages (PDF only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,

    /// Language code ("ja" or "en")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Metadata {
    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref created) = self.created_date {
            lines.push(format!("created: \"{}\"", escape_yaml(created)));
        }
        if let Some(ref modified) = self.modified_date {
            lines.push(format!("modified: \"{}\"", escape_yaml(modified)));
        }
        if let Some(pages) = self.page_count {
            lines.push(format!("pages: {}", pages));
        }
        if let Some(ref language) = self.language {
            lines.push(format!("language: {}", language));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
