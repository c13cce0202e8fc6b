//! HTML serialization of the in-memory tree.

use super::node::Node;
use crate::html::{escape, is_void};
use crate::NodeType;

pub(crate) fn write_node(out: &mut String, node: &Node) {
    match node.node_type() {
        NodeType::Element => write_element(out, node),
        NodeType::Text => out.push_str(&escape(&node.text_content())),
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(&node.text_content());
            out.push_str("-->");
        }
        NodeType::Document => {
            for child in node.child_nodes() {
                write_node(out, &child);
            }
        }
        NodeType::DocumentType => {
            out.push_str("<!DOCTYPE ");
            out.push_str(&node.node_name());
            out.push('>');
        }
        NodeType::Attribute => {}
    }
}

fn write_element(out: &mut String, node: &Node) {
    let Some(element) = node.as_element() else {
        return;
    };
    let tag = element.tag_name().to_ascii_lowercase();
    out.push('<');
    out.push_str(&tag);
    for attr in element.attributes() {
        out.push(' ');
        out.push_str(&attr.name());
        out.push_str("=\"");
        out.push_str(&escape(&attr.value()));
        out.push('"');
    }
    out.push('>');
    if is_void(&tag) {
        return;
    }
    for child in node.child_nodes() {
        write_node(out, &child);
    }
    out.push_str("</");
    out.push_str(&tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use crate::html::VOID_ELEMENTS;
    use crate::window;

    #[test]
    fn element_markup() {
        let doc = window().document();
        let div = doc.create_element("div").unwrap();
        div.set_attribute("class", "alert");
        div.set_attribute("title", "a \"quoted\" <b>");
        div.append_child(&doc.create_text_node("1 < 2")).unwrap();
        div.append_child(&doc.create_comment(" raw <b> ")).unwrap();
        assert_eq!(
            div.outer_html(),
            "<div class=\"alert\" title=\"a &#34;quoted&#34; &lt;b&gt;\">1 &lt; 2<!-- raw <b> --></div>"
        );
        assert_eq!(div.inner_html(), "1 &lt; 2<!-- raw <b> -->");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let doc = window().document();
        for tag in VOID_ELEMENTS {
            let element = doc.create_element(tag).unwrap();
            let html = element.outer_html();
            assert!(html.starts_with(&format!("<{tag}")));
            assert!(!html.contains("</"), "{html}");
        }
        let p = doc.create_element("P").unwrap();
        let html = p.outer_html();
        assert!(html.starts_with("<p"));
        assert!(html.ends_with("</p>"));
    }
}
