//! Host document abstraction

use dequal_core::Result;
use std::fmt;

/// Opaque handle to an element in a [`DomTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Element operations the helpers need from a host document
///
/// Every method taking a [`NodeId`] fails with `NodeNotFound` when the
/// handle does not belong to this document.
pub trait DomTree {
    fn tag_name(&self, node: NodeId) -> Result<String>;

    fn parent(&self, node: NodeId) -> Result<Option<NodeId>>;

    /// Following element in the parent's child list
    fn next_element_sibling(&self, node: NodeId) -> Result<Option<NodeId>>;

    fn text_content(&self, node: NodeId) -> Result<String>;

    /// Attributes in document order
    fn attributes(&self, node: NodeId) -> Result<Vec<Attribute>>;

    /// Create a detached element
    fn create_element(&mut self, tag: &str) -> NodeId;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()>;

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()>;

    /// Detach `child` from `parent`; fails if it is not a child of `parent`
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Append `child` as the last child of `parent`, detaching it first if
    /// it already has a parent; fails with `Dom` if `child` is `parent` or
    /// one of its ancestors
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;
}
