//! Document model types for extracted structure.
//!
//! This module defines the normalized representation shared by every input
//! format: ordered headings, paragraphs and list blocks, plus inferred
//! metadata. The model is format-agnostic; `Document` is the final artifact
//! handed to downstream layout.

mod document;
mod input;
mod structure;

pub use document::{Document, Metadata};
pub use input::{ExtractedPdf, PdfInfo, RawInput};
pub use structure::{Block, Heading, ListBlock, ListKind, StructuralModel};
