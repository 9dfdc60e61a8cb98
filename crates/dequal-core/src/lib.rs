//! dequal Core - structural equality over a tagged value model
//!
//! This crate provides:
//! - The runtime value model (arrays, sets, maps, records, scalars, lazy sequences)
//! - Deep structural equality and the variadic all-equal reduction
//! - Iterable coercion of heterogeneous values and lazy concatenation
//! - Lazy sequences with an injectable reuse-diagnostic hook
//! - Error, logging and configuration facilities

pub mod config;
pub mod equality;
pub mod errors;
pub mod iterable;
pub mod lazy;
pub mod logging_facility;
pub mod value;

// Re-export commonly used types
pub use config::EngineConfig;
pub use equality::{all_equal, deep_equal, find_key};
pub use errors::{DequalError, ExError, ExErrorKind, Result};
pub use iterable::{concat, is_seqable, to_iterable_view, IterableView};
pub use lazy::{lazy, LazySeq, ReuseObserver, TracingReuseObserver, ValueIter};
pub use value::{Record, Value, ValueMap, ValueSet};
