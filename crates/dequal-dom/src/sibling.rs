use dequal_core::Result;

use crate::tree::{DomTree, NodeId};

/// Walk `n` element siblings forward from `element`
///
/// Returns `element` itself for `n == 0`, and `None` if there is no
/// starting element or the chain ends before `n` steps.
///
/// # Errors
///
/// * `NodeNotFound` - a handle does not belong to `dom`
pub fn nth_next_element_sibling<D: DomTree + ?Sized>(
    dom: &D,
    element: Option<NodeId>,
    n: usize,
) -> Result<Option<NodeId>> {
    let mut current = element;
    for _ in 0..n {
        current = match current {
            Some(node) => dom.next_element_sibling(node)?,
            None => return Ok(None),
        };
    }
    Ok(current)
}
