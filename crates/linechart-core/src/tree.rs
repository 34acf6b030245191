// File: crates/linechart-core/src/tree.rs
// Summary: Graphics-tree capability the chart builds into, plus a headless SVG tree.
// Notes:
// - A browser host would implement `GraphicsTree` over `createElementNS` and friends.
// - `SvgTree` is the in-memory implementation used for SVG export and for tests.

use std::fmt::Write as _;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Retained-mode tree owned by the host. Elements live in the SVG namespace.
pub trait GraphicsTree {
    type Node: Copy;

    fn create_element(&mut self, tag: &str) -> Self::Node;
    fn create_text(&mut self, text: &str) -> Self::Node;
    /// Sets or replaces the attribute `name` on an element. Ignored on text nodes.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum NodeKind {
    Element { tag: String, attributes: Vec<(String, String)> },
    Text(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed tree. Appending a node that already has a parent moves it.
#[derive(Clone, Debug, Default)]
pub struct SvgTree {
    nodes: Vec<NodeData>,
}

impl SvgTree {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(NodeData { kind, parent: None, children: Vec::new() });
        NodeId(self.nodes.len() - 1)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(node.0).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    /// Concatenated text of `node` and all its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.nodes.get(node.0) else { return };
        if let NodeKind::Text(t) = &data.kind { out.push_str(t); }
        for &c in &data.children { self.collect_text(c, out); }
    }

    /// Descendant elements of `node` with the given tag, in document order.
    pub fn find_all(&self, node: NodeId, tag: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            if self.tag(n) == Some(tag) { out.push(n); }
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    /// Serialize `node` and its subtree. An `svg` root without an `xmlns`
    /// attribute gets the SVG namespace added so the output stands alone.
    pub fn to_markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, true, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, root: bool, out: &mut String) {
        let Some(data) = self.nodes.get(node.0) else { return };
        match &data.kind {
            NodeKind::Text(t) => out.push_str(&escape(t)),
            NodeKind::Element { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                if root && tag == "svg" && !attributes.iter().any(|(k, _)| k == "xmlns") {
                    let _ = write!(out, r#" xmlns="{}""#, SVG_NAMESPACE);
                }
                for (k, v) in attributes {
                    let _ = write!(out, r#" {}="{}""#, k, escape(v));
                }
                if data.children.is_empty() {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for &c in &data.children { self.write_node(c, false, out); }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

impl GraphicsTree for SvgTree {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element { tag: tag.to_string(), attributes: Vec::new() })
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(data) = self.nodes.get_mut(node.0) else { return };
        if let NodeKind::Element { attributes, .. } = &mut data.kind {
            match attributes.iter_mut().find(|(k, _)| k == name) {
                Some(slot) => slot.1 = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
