//! BDD step definitions for the bootstrap lifecycle

use cucumber::{given, then, when};
use pokedex_app::bootstrap::{Completion, Frame};
use pokedex_app::region::RegionKind;

use crate::world::{BootstrapWorld, DevtoolsSetup};

fn parse_setup(name: &str) -> DevtoolsSetup {
    match name {
        "no-op" => DevtoolsSetup::Noop,
        "recording" => DevtoolsSetup::Recording,
        "failing" => DevtoolsSetup::Failing,
        other => panic!("Unknown devtools hook: {}", other),
    }
}

fn make_ready(world: &mut BootstrapWorld) {
    world.build_bootstrap();
    world.bootstrap().mount();
    world.initialize().expect("initialization failed");
    world.previous_store = world.current_store();
}

#[given("a client bootstrap without a devtools hook")]
fn bootstrap_without_hook(world: &mut BootstrapWorld) {
    world.devtools = None;
    world.build_bootstrap();
}

#[given(expr = "a client bootstrap with a {word} devtools hook")]
fn bootstrap_with_hook(world: &mut BootstrapWorld, hook: String) {
    world.devtools = Some(parse_setup(&hook));
    world.build_bootstrap();
}

#[given("a ready client bootstrap without a devtools hook")]
fn ready_bootstrap_without_hook(world: &mut BootstrapWorld) {
    world.devtools = None;
    make_ready(world);
}

#[given(expr = "a ready client bootstrap with a {word} devtools hook")]
fn ready_bootstrap_with_hook(world: &mut BootstrapWorld, hook: String) {
    world.devtools = Some(parse_setup(&hook));
    make_ready(world);
}

#[when("the bootstrap is mounted")]
fn mount(world: &mut BootstrapWorld) {
    world.bootstrap().mount();
}

#[when("the bootstrap is unmounted")]
fn unmount(world: &mut BootstrapWorld) {
    world.previous_store = world.current_store();
    world.bootstrap().unmount();
}

#[when("the initialization step runs")]
fn run_initialization(world: &mut BootstrapWorld) {
    match world.initialize() {
        Ok(completion) => world.completion = Some(completion),
        Err(e) => world.last_error = Some(e.to_string()),
    }
}

#[when("the initialization is prepared")]
fn prepare_initialization(world: &mut BootstrapWorld) {
    let prepared = world
        .bootstrap()
        .prepare()
        .expect("prepare failed");
    world.pending = Some(prepared);
}

#[when("the prepared initialization is committed")]
fn commit_initialization(world: &mut BootstrapWorld) {
    let prepared = world.pending.take().expect("nothing prepared");
    let completion = world.commit(prepared);
    world.completion = Some(completion);
}

#[when("the frame is recorded")]
fn record_frame(world: &mut BootstrapWorld) {
    world.record_frame();
}

#[when(expr = "the frame is recorded {int} times")]
fn record_frames(world: &mut BootstrapWorld, times: usize) {
    for _ in 0..times {
        world.record_frame();
    }
}

#[then("the current frame should be blank")]
fn frame_is_blank(world: &mut BootstrapWorld) {
    assert_eq!(world.bootstrap().render(), Frame::Blank);
}

#[then("the recorded frames should be a blank frame followed by the interactive layout")]
fn blank_then_interactive(world: &mut BootstrapWorld) {
    assert_eq!(world.frames.len(), 2);
    assert_eq!(world.frames[0], Frame::Blank);
    assert!(matches!(world.frames[1], Frame::Interactive(_)));
}

#[then(expr = "the interactive layout should use the container class {string}")]
fn container_class(world: &mut BootstrapWorld, class: String) {
    match world.bootstrap().render() {
        Frame::Interactive(layout) => {
            assert_eq!(layout.container_class, class);
            assert!(layout.strict, "layout should sit under the strict boundary");
        }
        Frame::Blank => panic!("expected interactive layout"),
    }
}

#[then("the regions should be ordered logo then router")]
fn regions_ordered(world: &mut BootstrapWorld) {
    match world.bootstrap().render() {
        Frame::Interactive(layout) => {
            let kinds: Vec<RegionKind> = layout.regions.iter().map(|r| r.kind).collect();
            assert_eq!(kinds, vec![RegionKind::Logo, RegionKind::Router]);
        }
        Frame::Blank => panic!("expected interactive layout"),
    }
}

#[then("every recorded frame should reference the same store")]
fn same_store(world: &mut BootstrapWorld) {
    let expected = world.previous_store.expect("no store recorded");
    assert!(!world.frames.is_empty());
    for frame in &world.frames {
        match frame {
            Frame::Interactive(layout) => assert_eq!(layout.provider, expected),
            Frame::Blank => panic!("expected interactive frame"),
        }
    }
}

#[then("the initialization should be discarded")]
fn discarded(world: &mut BootstrapWorld) {
    assert!(
        matches!(world.completion, Some(Completion::Discarded(_))),
        "expected discarded completion, got {:?}",
        world.completion
    );
}

#[then("the store should be unchanged")]
fn store_unchanged(world: &mut BootstrapWorld) {
    let current = world.current_store();
    assert!(current.is_some());
    assert_eq!(current, world.previous_store);
}

#[then("the store should differ from the previous one")]
fn store_differs(world: &mut BootstrapWorld) {
    let current = world.current_store();
    assert!(current.is_some());
    assert!(world.previous_store.is_some());
    assert_ne!(current, world.previous_store);
}

#[then(expr = "the initialization should fail with {string}")]
fn initialization_failed(world: &mut BootstrapWorld, message: String) {
    let error = world.last_error.as_ref().expect("initialization did not fail");
    assert!(
        error.contains(&message),
        "Expected error to contain '{}', got '{}'",
        message,
        error
    );
}
