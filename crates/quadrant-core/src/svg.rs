// File: crates/quadrant-core/src/svg.rs
// Summary: Serialize a document subtree to SVG markup.

use crate::dom::{Document, NodeId};
use crate::reconcile::KEY_ATTR;

/// Serialize the subtree rooted at `root` as SVG markup. Attributes keep
/// insertion order; the internal reconciliation key stays out of the output.
pub fn to_svg(doc: &Document, root: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, root, &mut out);
    out
}

fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    let tag = doc.tag(node);
    out.push('<');
    out.push_str(tag);
    if !doc.class(node).is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape_xml(doc.class(node))));
    }
    for (name, value) in doc.attrs(node) {
        if name == KEY_ATTR {
            continue;
        }
        out.push_str(&format!(" {}=\"{}\"", name, escape_xml(value)));
    }
    let text = doc.text(node);
    let children = doc.children(node);
    if text.is_empty() && children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    out.push_str(&escape_xml(text));
    for &child in children {
        write_node(doc, child, out);
    }
    out.push_str(&format!("</{tag}>"));
}

/// Splice a `<style>` block as the first child of `svg_root`.
pub fn with_inline_style(doc: &mut Document, svg_root: NodeId, css: &str) {
    let style = doc.create_element("style");
    doc.set_text(style, css);
    doc.prepend_child(svg_root, style);
}

/// Attribute-friendly number formatting: round to 3 decimals, drop a trailing
/// integral fraction ("348" rather than "348.0", "16.8" rather than
/// "16.799999999999997").
pub fn fmt_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
