//! BDD step definitions for the document shell feature

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use tower::ServiceExt;

use pokedex::server::build_router;

use crate::world::PokedexWorld;

#[given("the default shell configuration")]
fn default_configuration(world: &mut PokedexWorld) {
    world.config = pokedex::Config::default();
}

#[given(expr = "the shell title is {string}")]
fn shell_title(world: &mut PokedexWorld, title: String) {
    world.config.shell.title = title;
}

#[given(expr = "the shell language is {string}")]
fn shell_lang(world: &mut PokedexWorld, lang: String) {
    world.config.shell.lang = lang;
}

#[given(expr = "a site file {string} containing {string}")]
fn site_file(world: &mut PokedexWorld, name: String, content: String) {
    let dir = world
        .site_dir
        .get_or_insert_with(|| tempfile::tempdir().expect("failed to create temp dir"));
    std::fs::write(dir.path().join(&name), content).expect("failed to write site file");
    world.config.site.site_root = dir.path().to_path_buf();
}

#[when(expr = "the page {string} is requested")]
async fn request_page(world: &mut PokedexWorld, uri: String) {
    let app = build_router(&world.config);
    let response = app
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut PokedexWorld, status: u16) {
    assert_eq!(world.response_status, Some(status));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut PokedexWorld, expected: String) {
    let body = world.body();
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the response should not contain {string}")]
fn response_not_contains(world: &mut PokedexWorld, unexpected: String) {
    let body = world.body();
    assert!(
        !body.contains(&unexpected),
        "Expected response not to contain '{}'.\nResponse body:\n{}",
        unexpected,
        body
    );
}

#[then("the mount point should precede the end of the body")]
fn mount_point_in_body(world: &mut PokedexWorld) {
    let body = world.body();
    let mount = body.find(r#"id="root""#).expect("mount point missing");
    let body_start = body.find("<body").expect("body missing");
    let body_end = body.find("</body>").expect("body end missing");
    assert!(body_start < mount && mount < body_end);
}
