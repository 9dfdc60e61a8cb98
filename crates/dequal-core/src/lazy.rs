//! Lazy, replayable sequences
//!
//! A [`LazySeq`] defers iteration until it is consumed, and every
//! consumption invokes the wrapped producer afresh. Consuming the same
//! sequence twice is legal; a [`ReuseObserver`] can be attached to flag it
//! while debugging single-use producers.

use std::backtrace::Backtrace;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use dequal_core_types::schema::EVENT_LAZY_REUSE;

use crate::value::Value;

/// Owned iterator over values
pub type ValueIter = Box<dyn Iterator<Item = Value>>;

/// Zero-argument producer of a fresh traversal
pub type Producer = Rc<dyn Fn() -> ValueIter>;

/// Instrumentation hook for repeated consumption
///
/// Called on the second and every later consumption of a sequence, with the
/// usage count including the current one. Observers must not affect the
/// values produced.
pub trait ReuseObserver {
    fn on_reuse(&self, usages: usize);
}

/// Observer that emits a `warn` event with a captured backtrace
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReuseObserver;

impl ReuseObserver for TracingReuseObserver {
    fn on_reuse(&self, usages: usize) {
        let backtrace = Backtrace::force_capture();
        tracing::warn!(
            component = module_path!(),
            event = EVENT_LAZY_REUSE,
            usages = usages as u64,
            backtrace = %backtrace,
            "Re-use of lazy value"
        );
    }
}

struct LazyState {
    producer: Producer,
    usages: Cell<usize>,
    observer: Option<Rc<dyn ReuseObserver>>,
}

/// Deferred sequence that re-runs its producer on every consumption
///
/// Cloning shares the sequence (and its usage counter).
#[derive(Clone)]
pub struct LazySeq {
    state: Rc<LazyState>,
}

impl LazySeq {
    /// Wrap a producer; nothing runs until the first call to [`iter`](Self::iter).
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn() -> ValueIter + 'static,
    {
        Self::from_producer(Rc::new(producer))
    }

    /// Wrap an already shared producer
    pub fn from_producer(producer: Producer) -> Self {
        Self {
            state: Rc::new(LazyState {
                producer,
                usages: Cell::new(0),
                observer: None,
            }),
        }
    }

    /// Attach a reuse observer, returning a fresh sequence over the same producer.
    pub fn with_observer(self, observer: Rc<dyn ReuseObserver>) -> Self {
        Self {
            state: Rc::new(LazyState {
                producer: self.state.producer.clone(),
                usages: Cell::new(self.state.usages.get()),
                observer: Some(observer),
            }),
        }
    }

    /// Attach an observer only when one is configured
    pub fn with_optional_observer(self, observer: Option<Rc<dyn ReuseObserver>>) -> Self {
        match observer {
            Some(observer) => self.with_observer(observer),
            None => self,
        }
    }

    /// Start a fresh traversal
    pub fn iter(&self) -> ValueIter {
        let usages = self.state.usages.get() + 1;
        self.state.usages.set(usages);
        if usages >= 2 {
            if let Some(observer) = &self.state.observer {
                observer.on_reuse(usages);
            }
        }
        (self.state.producer)()
    }

    /// Number of traversals started so far
    pub fn usages(&self) -> usize {
        self.state.usages.get()
    }

    /// Whether both handles refer to the same sequence
    pub fn ptr_eq(&self, other: &LazySeq) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Whether both sequences wrap the same producer
    pub fn same_producer(&self, other: &LazySeq) -> bool {
        Rc::ptr_eq(&self.state.producer, &other.state.producer)
    }
}

impl fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySeq")
            .field("usages", &self.usages())
            .field("observed", &self.state.observer.is_some())
            .finish()
    }
}

/// Shorthand for [`LazySeq::new`]
pub fn lazy<F>(producer: F) -> LazySeq
where
    F: Fn() -> ValueIter + 'static,
{
    LazySeq::new(producer)
}
