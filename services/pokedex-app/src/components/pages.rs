//! Pages rendered by the router region

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::context::{use_selector, use_store};
use crate::reducer::{Action, PokedexState};

/// Favorites in display order
fn favorite_ids(state: &PokedexState) -> Vec<u32> {
    state.favorites.iter().copied().collect()
}

fn parse_pokemon_id(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|id| id.parse::<u32>().ok())
}

/// The action that mirrors the `:id` route parameter into the store
fn selection_action(id: Option<u32>) -> Action {
    match id {
        Some(id) => Action::SelectPokemon(id),
        None => Action::ClearSelection,
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let store = use_store();
    let search = use_selector(|state| state.search.clone());
    let favorites = use_selector(favorite_ids);

    view! {
        <section>
            <h1>"Pokédex"</h1>
            <input
                type="search"
                placeholder="Search"
                prop:value=search
                on:input=move |ev| store.dispatch(Action::SetSearch(event_target_value(&ev)))
            />
            <h2>"Favorites"</h2>
            {move || {
                let favorites = favorites.get();
                if favorites.is_empty() {
                    view! { <p>"No favorites yet."</p> }.into_any()
                } else {
                    view! {
                        <ul>
                            {favorites
                                .into_iter()
                                .map(|id| {
                                    view! {
                                        <li>
                                            <A href=format!("/pokemon/{}", id)>
                                                {format!("#{}", id)}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
pub fn PokemonDetail() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| parse_pokemon_id(p.get_str("id"))));
    let favorites = use_selector(|state| state.favorites.clone());

    Effect::new({
        let store = store.clone();
        move |_| store.dispatch(selection_action(id.get()))
    });

    let is_favorite =
        move || id.get().is_some_and(|id| favorites.with(|f| f.contains(&id)));

    view! {
        <section>
            {move || match id.get() {
                Some(id) => {
                    let store = store.clone();
                    view! {
                        <Title text=format!("Pokémon #{}", id) />
                        <h1>{format!("#{}", id)}</h1>
                        <button on:click=move |_| store.dispatch(Action::ToggleFavorite(id))>
                            {move || if is_favorite() { "Unfavorite" } else { "Favorite" }}
                        </button>
                    }
                        .into_any()
                }
                None => view! { <NotFound /> }.into_any(),
            }}
            <A href="/">"Back"</A>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <p>"No such page."</p> }
}
