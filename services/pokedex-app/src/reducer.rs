//! Root reducer for the pokedex UI state

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::store::Store;

/// UI-wide state tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexState {
    pub search: String,
    pub selected: Option<u32>,
    pub favorites: BTreeSet<u32>,
}

/// Actions accepted by [`root_reducer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetSearch(String),
    SelectPokemon(u32),
    ClearSelection,
    ToggleFavorite(u32),
}

/// The store type provided to every descendant of the client bootstrap
pub type AppStore = Store<PokedexState, Action>;

pub fn root_reducer(state: &PokedexState, action: &Action) -> PokedexState {
    let mut next = state.clone();
    match action {
        Action::SetSearch(query) => next.search = query.trim().to_string(),
        Action::SelectPokemon(id) => next.selected = Some(*id),
        Action::ClearSelection => next.selected = None,
        Action::ToggleFavorite(id) => {
            if !next.favorites.remove(id) {
                next.favorites.insert(*id);
            }
        }
    }
    next
}
