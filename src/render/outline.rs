//! Ordered outline of a document's headings and lists.

use crate::model::{Block, Document};

/// Render headings and list blocks in position order as Markdown-like text.
///
/// Paragraphs carry no position and are left out. With `frontmatter`, the
/// metadata is prepended as YAML.
pub fn to_outline(doc: &Document, frontmatter: bool) -> String {
    let mut output = String::new();

    if frontmatter {
        output.push_str(&doc.metadata.to_yaml_frontmatter());
    }

    for block in doc.structure.ordered_blocks() {
        match block {
            Block::Heading(heading) => {
                output.push_str(&"#".repeat(heading.level as usize));
                output.push(' ');
                output.push_str(&heading.text);
                output.push('\n');
            }
            Block::List(list) => {
                for (index, item) in list.items.iter().enumerate() {
                    output.push_str(&list.kind.marker(index));
                    output.push(' ');
                    output.push_str(item);
                    output.push('\n');
                }
            }
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}
