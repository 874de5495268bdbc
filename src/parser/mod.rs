//! Structure extraction module.

mod markup;
mod metadata;
mod options;
mod pdf_text;
mod plain;
mod position;

pub use markup::MarkupStructureExtractor;
pub use metadata::MetadataInferencer;
pub use options::ParseOptions;
pub use pdf_text::PdfTextNormalizer;
pub use plain::PlainTextStructureExtractor;
pub use position::Positions;
