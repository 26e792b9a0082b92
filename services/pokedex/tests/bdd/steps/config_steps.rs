//! BDD step definitions for configuration loading

use cucumber::{given, then, when};

use pokedex::load_config;

use crate::world::PokedexWorld;

#[given(expr = "a configuration file containing {string}")]
fn config_file(world: &mut PokedexWorld, content: String) {
    let dir = world
        .site_dir
        .get_or_insert_with(|| tempfile::tempdir().expect("failed to create temp dir"));
    std::fs::write(dir.path().join("config.json"), content).expect("failed to write config");
}

#[when("the configuration is loaded")]
fn load(world: &mut PokedexWorld) {
    let dir = world.site_dir.as_ref().expect("no config file written");
    match load_config(&dir.path().join("config.json")) {
        Ok(config) => world.config = config,
        Err(e) => world.load_error = Some(e.to_string()),
    }
}

#[then(expr = "the listening port should be {int}")]
fn listening_port(world: &mut PokedexWorld, port: u16) {
    assert_eq!(world.config.server.port, port);
}

#[then(expr = "the shell title should be {string}")]
fn shell_title_is(world: &mut PokedexWorld, title: String) {
    assert_eq!(world.config.shell.title, title);
}

#[then("loading should fail")]
fn loading_failed(world: &mut PokedexWorld) {
    assert!(world.load_error.is_some(), "expected configuration error");
}
