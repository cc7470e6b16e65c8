//! Nested markup serializer for built outlines.

use generational_arena::Index;
use html_escape::encode_double_quoted_attribute;
use tracing::instrument;

use crate::arena::Outline;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";
const INDENT: &str = "  ";

/// Serialize an outline as nested XML in document order.
///
/// Topics with children become `<book>` containers, childless topics
/// self-closing `<page />` elements. The document language appears once,
/// on the outer `<toc>` element. Output is deterministic: the same outline
/// always renders to the same bytes, ending in a newline.
#[instrument(level = "debug", skip(outline))]
pub fn to_markup(outline: &Outline) -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&format!(
        "<toc lang=\"{}\">\n",
        encode_double_quoted_attribute(outline.lang())
    ));

    if let Some(root) = outline.node(outline.root()) {
        for &child in &root.children {
            write_topic(outline, child, 1, &mut out);
        }
    }

    out.push_str("</toc>\n");
    out
}

/// Emit one topic element at the given nesting level.
fn write_topic(outline: &Outline, node_idx: Index, level: usize, out: &mut String) {
    let node = match outline.node(node_idx) {
        Some(node) => node,
        None => return,
    };

    let indent = INDENT.repeat(level);
    let id = encode_double_quoted_attribute(&node.record.id);
    let title = encode_double_quoted_attribute(&node.record.title);

    if node.children.is_empty() {
        out.push_str(&format!(
            "{}<page id=\"{}\" title=\"{}\" />\n",
            indent, id, title
        ));
    } else {
        out.push_str(&format!(
            "{}<book id=\"{}\" title=\"{}\">\n",
            indent, id, title
        ));
        for &child in &node.children {
            write_topic(outline, child, level + 1, out);
        }
        out.push_str(&format!("{}</book>\n", indent));
    }
}
