//! Store access for descendants of the provider scope

use leptos::prelude::*;

use crate::reducer::{AppStore, PokedexState};

/// The store provided by the client bootstrap.
///
/// Only valid below the provider; the bootstrap never renders descendants
/// before the store exists.
pub fn use_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Project a value out of the store into a signal that follows dispatches
pub fn use_selector<T, F>(select: F) -> ReadSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&PokedexState) -> T + Send + Sync + 'static,
{
    let store = use_store();
    let (value, set_value) = signal(select(&store.state()));

    let subscription = store.subscribe(move |state| {
        let next = select(state);
        if value.try_get_untracked().as_ref() != Some(&next) {
            let _ = set_value.try_set(next);
        }
    });
    on_cleanup(move || {
        store.unsubscribe(subscription);
    });

    value
}
