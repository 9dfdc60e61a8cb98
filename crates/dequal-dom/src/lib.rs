//! dequal DOM - host-agnostic document helpers
//!
//! Small helpers that operate on a host document through the [`DomTree`]
//! trait, so they run against a browser binding or the in-memory
//! [`MemoryDom`] alike:
//!
//! - [`decode`] - undo the attribute percent-escaping used by the page
//! - [`is_fully_in_viewport`] - element geometry check
//! - [`nth_next_element_sibling`] - forward sibling walk
//! - [`ScriptRefresher`] - force a script element to re-execute

pub mod decode;
pub mod memory;
pub mod script;
pub mod sibling;
pub mod tree;
pub mod viewport;

pub use decode::decode;
pub use memory::MemoryDom;
pub use script::ScriptRefresher;
pub use sibling::nth_next_element_sibling;
pub use tree::{Attribute, DomTree, NodeId};
pub use viewport::{is_fully_in_viewport, Rect, Viewport};
