//! BDD step definitions for store dispatch

use cucumber::{then, when};
use pokedex_app::reducer::Action;

use crate::world::BootstrapWorld;

fn parse_action(text: &str) -> Action {
    let (verb, arg) = text.split_once(' ').unwrap_or((text, ""));
    match verb {
        "select" => Action::SelectPokemon(arg.trim().parse().expect("pokemon id")),
        "favorite" => Action::ToggleFavorite(arg.trim().parse().expect("pokemon id")),
        "search" => Action::SetSearch(arg.to_string()),
        "clear" => Action::ClearSelection,
        other => panic!("Unknown action: {}", other),
    }
}

#[when(expr = "the action {string} is dispatched")]
fn dispatch(world: &mut BootstrapWorld, action: String) {
    let action = parse_action(&action);
    let store = world.bootstrap().store().expect("store not ready").clone();
    store.dispatch(action);
}

#[then(expr = "the selected pokemon should be {int}")]
fn selected(world: &mut BootstrapWorld, id: u32) {
    let store = world.bootstrap().store().expect("store not ready").clone();
    assert_eq!(store.state().selected, Some(id));
}

#[then("no pokemon should be selected")]
fn none_selected(world: &mut BootstrapWorld) {
    let store = world.bootstrap().store().expect("store not ready").clone();
    assert_eq!(store.state().selected, None);
}

#[then(expr = "pokemon {int} should be a favorite")]
fn is_favorite(world: &mut BootstrapWorld, id: u32) {
    let store = world.bootstrap().store().expect("store not ready").clone();
    assert!(store.state().favorites.contains(&id));
}

#[then(expr = "the search should be {string}")]
fn search(world: &mut BootstrapWorld, expected: String) {
    let store = world.bootstrap().store().expect("store not ready").clone();
    assert_eq!(store.state().search, expected);
}

#[then(expr = "the enhancer should have observed {string}")]
fn enhancer_observed(world: &mut BootstrapWorld, call: String) {
    let calls = world.enhancer_calls.lock().unwrap();
    assert!(
        calls.contains(&call),
        "Expected enhancer calls {:?} to contain '{}'",
        calls,
        call
    );
}
