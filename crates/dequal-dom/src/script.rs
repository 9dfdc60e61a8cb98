//! Script re-execution
//!
//! Browsers run a `<script>` element once. To run it again the element is
//! cloned into a fresh one and swapped into the same parent.
//!
//! ## Logging Ownership
//!
//! `refresh` owns the start/end/error events for the `refresh_script` op.

use dequal_core::{all_equal, Result, Value};
use dequal_core::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

use crate::tree::{DomTree, NodeId};

/// Re-executes script elements, at most once per distinct uid
///
/// Holds the uid of the last refresh. A refresh is skipped when the new uid
/// is structurally equal to it, so uids may be any [`Value`].
#[derive(Debug, Clone, Default)]
pub struct ScriptRefresher {
    last_uid: Value,
}

impl ScriptRefresher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uid of the last refresh; `Undefined` before the first one
    pub fn last_uid(&self) -> &Value {
        &self.last_uid
    }

    /// Replace `element` with a fresh copy so the host runs it again
    ///
    /// Nothing happens when `element` is `None` or `uid` equals the last
    /// refreshed uid. Otherwise a new `script` element receives every
    /// attribute and the text of the old one; when the old element has a
    /// parent it is removed and the copy appended to that parent. The uid is
    /// recorded and returned either way.
    ///
    /// # Errors
    ///
    /// * `NodeNotFound` - `element` does not belong to `dom`
    /// * `Dom` - the host rejected the swap
    pub fn refresh<D: DomTree + ?Sized>(
        &mut self,
        dom: &mut D,
        element: Option<NodeId>,
        uid: Value,
    ) -> Result<Option<Value>> {
        let Some(element) = element else {
            return Ok(None);
        };
        if all_equal(&[self.last_uid.clone(), uid.clone()]) {
            tracing::debug!(script_uid = %uid, "script already refreshed for uid");
            return Ok(None);
        }

        log_op_start!("refresh_script", script_uid = %uid);
        let start = Instant::now();

        let replacement = swap_in_copy(dom, element).map_err(|e| {
            log_op_error!(
                "refresh_script",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        self.last_uid = uid.clone();
        log_op_end!(
            "refresh_script",
            duration_ms = start.elapsed().as_millis() as u64,
            script_uid = %uid,
            replacement = %replacement
        );
        Ok(Some(uid))
    }
}

fn swap_in_copy<D: DomTree + ?Sized>(dom: &mut D, element: NodeId) -> Result<NodeId> {
    let script_content = dom.text_content(element)?;
    let attributes = dom.attributes(element)?;

    let copy = dom.create_element("script");
    for attr in &attributes {
        dom.set_attribute(copy, &attr.name, &attr.value)?;
    }
    dom.set_text_content(copy, &script_content)?;

    if let Some(parent) = dom.parent(element)? {
        dom.remove_child(parent, element)?;
        dom.append_child(parent, copy)?;
    }
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDom;

    #[test]
    fn test_initial_uid_is_undefined() {
        let refresher = ScriptRefresher::new();
        assert!(matches!(refresher.last_uid(), Value::Undefined));
    }

    #[test]
    fn test_no_element_is_noop() {
        let mut dom = MemoryDom::new();
        let mut refresher = ScriptRefresher::new();
        assert!(refresher.refresh(&mut dom, None, Value::from(1)).unwrap().is_none());
        assert!(matches!(refresher.last_uid(), Value::Undefined));
    }

    #[test]
    fn test_undefined_uid_matches_initial_state() {
        let mut dom = MemoryDom::new();
        let root = dom.root();
        let script = dom.append_new(root, "script").unwrap();
        let mut refresher = ScriptRefresher::new();

        let refreshed = refresher.refresh(&mut dom, Some(script), Value::Undefined).unwrap();

        assert!(refreshed.is_none());
        assert_eq!(dom.children(root).unwrap(), vec![script]);
    }
}
