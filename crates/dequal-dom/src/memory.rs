//! In-memory document

use dequal_core::{DequalError, Result};

use crate::tree::{Attribute, DomTree, NodeId};

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attributes: Vec<Attribute>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed [`DomTree`]
///
/// Created with a single `html` document element. Nodes are never freed;
/// removed nodes simply become detached.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        let mut dom = Self { nodes: Vec::new() };
        dom.create_element("html");
        dom
    }

    /// The document element
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create an element and append it to `parent`
    ///
    /// # Errors
    ///
    /// * `NodeNotFound` - `parent` is not in this document
    pub fn append_new(&mut self, parent: NodeId, tag: &str) -> Result<NodeId> {
        let node = self.create_element(tag);
        self.append_child(parent, node)?;
        Ok(node)
    }

    /// # Errors
    ///
    /// * `NodeNotFound` - `node` is not in this document
    pub fn children(&self, node: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.node(node)?.children.clone())
    }

    /// # Errors
    ///
    /// * `NodeNotFound` - `node` is not in this document
    pub fn get_attribute(&self, node: NodeId, name: &str) -> Result<Option<String>> {
        Ok(self
            .node(node)?
            .attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.clone()))
    }

    fn node(&self, id: NodeId) -> Result<&NodeData> {
        self.nodes.get(id.0).ok_or_else(|| not_found(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes.get_mut(id.0).ok_or_else(|| not_found(id))
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool> {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            current = self.node(id)?.parent;
        }
        Ok(false)
    }

    fn detach(&mut self, child: NodeId) -> Result<()> {
        if let Some(parent) = self.node(child)?.parent {
            self.remove_child(parent, child)?;
        }
        Ok(())
    }
}

fn not_found(id: NodeId) -> DequalError {
    DequalError::NodeNotFound {
        node: id.to_string(),
    }
}

impl DomTree for MemoryDom {
    fn tag_name(&self, node: NodeId) -> Result<String> {
        Ok(self.node(node)?.tag.clone())
    }

    fn parent(&self, node: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(node)?.parent)
    }

    fn next_element_sibling(&self, node: NodeId) -> Result<Option<NodeId>> {
        let Some(parent) = self.node(node)?.parent else {
            return Ok(None);
        };
        let siblings = &self.node(parent)?.children;
        Ok(siblings
            .iter()
            .position(|&id| id == node)
            .and_then(|idx| siblings.get(idx + 1))
            .copied())
    }

    fn text_content(&self, node: NodeId) -> Result<String> {
        Ok(self.node(node)?.text.clone())
    }

    fn attributes(&self, node: NodeId) -> Result<Vec<Attribute>> {
        Ok(self.node(node)?.attributes.clone())
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(NodeData {
            tag: tag.to_string(),
            attributes: Vec::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        let attributes = &mut self.node_mut(node)?.attributes;
        match attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => attributes.push(Attribute::new(name, value)),
        }
        Ok(())
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()> {
        self.node_mut(node)?.text = text.to_string();
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        let children = &mut self.node_mut(parent)?.children;
        let idx = children
            .iter()
            .position(|&id| id == child)
            .ok_or_else(|| DequalError::Dom {
                message: format!("{} is not a child of {}", child, parent),
            })?;
        children.remove(idx);
        self.node_mut(child)?.parent = None;
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        if self.is_inclusive_ancestor(child, parent)? {
            return Err(DequalError::Dom {
                message: format!("{} cannot be appended inside itself ({})", child, parent),
            });
        }
        self.detach(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_siblings() {
        let mut dom = MemoryDom::new();
        let root = dom.root();
        let a = dom.append_new(root, "div").unwrap();
        let b = dom.append_new(root, "span").unwrap();

        assert_eq!(dom.next_element_sibling(a).unwrap(), Some(b));
        assert_eq!(dom.next_element_sibling(b).unwrap(), None);
        assert_eq!(dom.parent(b).unwrap(), Some(root));
        assert_eq!(dom.next_element_sibling(root).unwrap(), None);
    }

    #[test]
    fn test_append_moves_attached_node() {
        let mut dom = MemoryDom::new();
        let root = dom.root();
        let first = dom.append_new(root, "div").unwrap();
        let second = dom.append_new(root, "div").unwrap();
        let moved = dom.append_new(first, "p").unwrap();

        dom.append_child(second, moved).unwrap();

        assert!(dom.children(first).unwrap().is_empty());
        assert_eq!(dom.children(second).unwrap(), vec![moved]);
        assert_eq!(dom.parent(moved).unwrap(), Some(second));
    }

    #[test]
    fn test_append_rejects_hierarchy_cycles() {
        let mut dom = MemoryDom::new();
        let root = dom.root();
        let outer = dom.append_new(root, "div").unwrap();
        let inner = dom.append_new(outer, "p").unwrap();

        let err = dom.append_child(outer, outer).unwrap_err();
        assert!(matches!(err, DequalError::Dom { .. }));

        let err = dom.append_child(inner, outer).unwrap_err();
        assert!(matches!(err, DequalError::Dom { .. }));

        assert_eq!(dom.parent(outer).unwrap(), Some(root));
        assert_eq!(dom.children(outer).unwrap(), vec![inner]);
    }

    #[test]
    fn test_remove_non_child_fails() {
        let mut dom = MemoryDom::new();
        let root = dom.root();
        let stray = dom.create_element("div");
        let err = dom.remove_child(root, stray).unwrap_err();
        assert!(matches!(err, DequalError::Dom { .. }));
    }

    #[test]
    fn test_unknown_node() {
        let dom = MemoryDom::new();
        let err = dom.tag_name(NodeId(99)).unwrap_err();
        assert_eq!(err.to_string(), "Node not found: #99");
    }

    #[test]
    fn test_set_attribute_overwrites() {
        let mut dom = MemoryDom::new();
        let node = dom.create_element("script");
        dom.set_attribute(node, "type", "module").unwrap();
        dom.set_attribute(node, "src", "app.js").unwrap();
        dom.set_attribute(node, "type", "text/javascript").unwrap();

        let attrs = dom.attributes(node).unwrap();
        assert_eq!(attrs[0], Attribute::new("type", "text/javascript"));
        assert_eq!(attrs.len(), 2);
        assert_eq!(
            dom.get_attribute(node, "src").unwrap().as_deref(),
            Some("app.js")
        );
    }
}
