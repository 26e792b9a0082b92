//! Application state container
//!
//! A single store per activation: the current state tree, a dispatch entry
//! point that runs the reducer, and a subscriber list. Clones share the same
//! underlying store, so identity is tracked with [`StoreId`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::devtools::{Enhancer, NoopEnhancer};

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a constructed store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(u64);

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store#{}", self.0)
    }
}

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Reducer<S, A> = Box<dyn Fn(&S, &A) -> S + Send + Sync>;
type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Inner<S, A> {
    id: StoreId,
    reducer: Reducer<S, A>,
    state: RwLock<Arc<S>>,
    listeners: Mutex<Vec<(Subscription, Listener<S>)>>,
    next_subscription: AtomicU64,
    enhancer: Box<dyn Enhancer<S, A>>,
}

/// Shared handle to the application state container
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").field("id", &self.inner.id).finish()
    }
}

impl<S, A> Store<S, A> {
    pub fn id(&self) -> StoreId {
        self.inner.id
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: 'static,
{
    /// Create a store from a reducer and preloaded state.
    ///
    /// Without an enhancer the store behaves exactly as with [`NoopEnhancer`].
    pub fn new<R>(reducer: R, preloaded: S, enhancer: Option<Box<dyn Enhancer<S, A>>>) -> Self
    where
        R: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        let enhancer = enhancer.unwrap_or_else(|| Box::new(NoopEnhancer));
        enhancer.attached(&preloaded);

        let id = StoreId(NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed));
        log::debug!("Created {}", id);

        Self {
            inner: Arc::new(Inner {
                id,
                reducer: Box::new(reducer),
                state: RwLock::new(Arc::new(preloaded)),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
                enhancer,
            }),
        }
    }

    /// Snapshot of the current state tree
    pub fn state(&self) -> Arc<S> {
        let guard = self
            .inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Run the reducer for `action`, then notify the enhancer and subscribers.
    ///
    /// Subscribers are called after the state lock is released, so they may
    /// read the state or dispatch again.
    pub fn dispatch(&self, action: A) {
        let next = {
            let mut guard = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let next = Arc::new((self.inner.reducer)(&guard, &action));
            *guard = Arc::clone(&next);
            next
        };

        self.inner.enhancer.dispatched(&action, &next);

        let listeners: Vec<Listener<S>> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }

    /// Register a listener called with the new state after every dispatch
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let subscription = Subscription(
            self.inner
                .next_subscription
                .fetch_add(1, Ordering::Relaxed),
        );
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((subscription, Arc::new(listener)));
        subscription
    }

    /// Remove a listener, returning false if it was already gone
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        listeners.len() != before
    }
}
