//! In-memory host document.
//!
//! [`MemoryDocument`] keeps elements in an arena and follows the DOM rules the
//! attachment step relies on: `getElementById` only finds connected elements,
//! appending an attached node moves it, and a node cannot become its own
//! descendant. It can serialize any subtree to HTML, which is how the native
//! binary renders the grid.

use crate::{HostDocument, HostError};

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// An element stored in a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl MemoryElement {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the element id, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the class list in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns `true` if the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the value of an attribute other than `id` and `class`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the child handles in document order.
    #[must_use]
    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }
}

/// A DOM-like document held in memory.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<MemoryElement>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    const BODY: NodeId = NodeId(0);

    /// Creates a document containing only an empty `<body>`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![MemoryElement::new("body")],
        }
    }

    /// Returns the `<body>` element.
    #[must_use]
    pub fn body(&self) -> NodeId {
        Self::BODY
    }

    /// Appends an element with the given tag and id to `<body>`.
    pub fn append_container(&mut self, tag: &str, id: &str) -> NodeId {
        let node = self.push(MemoryElement {
            id: Some(id.to_owned()),
            parent: Some(Self::BODY),
            ..MemoryElement::new(tag)
        });
        self.nodes[Self::BODY.0].children.push(node);
        node
    }

    /// Returns the element behind `node`, or `None` if it belongs to no
    /// element of this document.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&MemoryElement> {
        self.nodes.get(node.0)
    }

    /// Iterates over the children of `node` in document order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = &MemoryElement> + '_ {
        self.element(node)
            .map(MemoryElement::child_ids)
            .unwrap_or_default()
            .iter()
            .filter_map(|&child| self.element(child))
    }

    /// Serializes `node` and its descendants to HTML.
    ///
    /// Unknown handles render as an empty string.
    #[must_use]
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(element) = self.element(node) else {
            return;
        };
        out.push('<');
        out.push_str(&element.tag);
        if let Some(id) = &element.id {
            write_attribute(out, "id", id);
        }
        if !element.classes.is_empty() {
            write_attribute(out, "class", &element.classes.join(" "));
        }
        for (name, value) in &element.attributes {
            write_attribute(out, name, value);
        }
        out.push('>');
        for &child in &element.children {
            self.write_html(child, out);
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }

    fn push(&mut self, element: MemoryElement) -> NodeId {
        self.nodes.push(element);
        NodeId(self.nodes.len() - 1)
    }

    fn node_mut(
        &mut self,
        node: NodeId,
        operation: &'static str,
    ) -> Result<&mut MemoryElement, HostError> {
        self.nodes
            .get_mut(node.0)
            .ok_or_else(|| HostError::new(operation, format!("unknown node {}", node.0)))
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.ancestors(node).any(|n| n == Self::BODY)
    }

    /// `node` itself followed by its ancestors up to the root.
    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), |&n| self.element(n).and_then(|e| e.parent))
    }
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

impl HostDocument for MemoryDocument {
    type Element = NodeId;

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|&node| self.nodes[node.0].id.as_deref() == Some(id) && self.is_connected(node))
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError> {
        if tag.is_empty() || tag.chars().any(char::is_whitespace) {
            return Err(HostError::new(
                "createElement",
                format!("invalid tag name {tag:?}"),
            ));
        }
        Ok(self.push(MemoryElement::new(tag)))
    }

    fn add_class(&mut self, element: &NodeId, class: &str) -> Result<(), HostError> {
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(HostError::new(
                "classList.add",
                format!("invalid class token {class:?}"),
            ));
        }
        let element = self.node_mut(*element, "classList.add")?;
        if !element.has_class(class) {
            element.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn set_attribute(
        &mut self,
        element: &NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), HostError> {
        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || "\"'>/=".contains(c)) {
            return Err(HostError::new(
                "setAttribute",
                format!("invalid attribute name {name:?}"),
            ));
        }
        let element = self.node_mut(*element, "setAttribute")?;
        match name {
            "id" => element.id = Some(value.to_owned()),
            "class" => {
                element.classes = value.split_whitespace().map(str::to_owned).collect();
            }
            _ => match element.attributes.iter_mut().find(|(n, _)| n == name) {
                Some((_, v)) => value.clone_into(v),
                None => element.attributes.push((name.to_owned(), value.to_owned())),
            },
        }
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), HostError> {
        let (parent, child) = (*parent, *child);
        self.node_mut(parent, "appendChild")?;
        let old_parent = self.node_mut(child, "appendChild")?.parent;
        if self.ancestors(parent).any(|n| n == child) {
            return Err(HostError::new(
                "appendChild",
                "the new child is an ancestor of the parent",
            ));
        }

        if let Some(old_parent) = old_parent {
            self.nodes[old_parent.0].children.retain(|&n| n != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }
}
