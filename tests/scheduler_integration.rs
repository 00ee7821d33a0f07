//! Scheduler and animation properties, driven through the public API.

use bevy_ecs::prelude::Resource;

use familytreasure::components::animation::{Animable, Animation, TileMove};
use familytreasure::components::tile::TilePosition;
use familytreasure::ecs::World;
use familytreasure::scheduler::Scheduler;
use familytreasure::systems::animation::update_animations;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Resource, Default)]
struct Log(Vec<&'static str>);

fn log(name: &'static str) -> impl FnOnce(&mut World) + 'static {
    move |world: &mut World| world.resource_mut::<Log>().0.push(name)
}

fn logged(world: &World) -> Vec<&'static str> {
    world.resource::<Log>().0.clone()
}

fn world() -> World {
    let mut world = World::new();
    world.insert_resource(Log::default());
    world
}

#[test]
fn move_retires_on_the_tick_reaching_its_duration() {
    let mut world = World::new();
    let e = world.spawn((TilePosition::new("ground", (1.0, 2.0), 0.0),));
    let mut animation = TileMove::new((5.0, 0.0), 2.0);

    let mut running = Vec::new();
    for dt in [0.5, 0.5, 0.5, 0.5] {
        running.push(animation.advance(&mut world, e, dt).unwrap());
    }
    assert_eq!(running, vec![true, true, true, false]);

    let tile = world.get_component::<TilePosition>(e).unwrap();
    assert!(approx_eq(tile.x, 6.0));
    assert!(approx_eq(tile.y, 2.0));
}

#[test]
fn trailing_tick_after_retirement_is_a_no_op() {
    let mut world = World::new();
    let e = world.spawn((
        TilePosition::new("ground", (1.0, 2.0), 0.0),
        Animable::with(Animation::movement((5.0, 0.0), 2.0)),
    ));
    for dt in [0.5, 0.5, 0.5, 0.5, 0.1] {
        update_animations(&mut world, dt).unwrap();
    }
    let tile = world.get_component::<TilePosition>(e).unwrap();
    assert!(approx_eq(tile.x, 6.0));
    assert!(world.get_component::<Animable>(e).unwrap().is_empty());
}

#[test]
fn at_fires_once() {
    let mut world = world();
    let mut scheduler = Scheduler::new();
    scheduler.at(5.0).call(log("f"));
    scheduler.update(&mut world, 5.0).unwrap();
    scheduler.update(&mut world, 0.0).unwrap();
    assert_eq!(logged(&world), vec!["f"]);
}

#[test]
fn coalesced_steps_and_zero_offset_child_fire_together_in_order() {
    let mut world = world();
    let mut scheduler = Scheduler::new();
    let first = scheduler.at(1.0).call(log("first")).id();
    scheduler.at(1.0).call(log("second"));
    scheduler.step(first).after(0.0).call(log("child"));

    scheduler.update(&mut world, 0.9).unwrap();
    assert!(logged(&world).is_empty());
    scheduler.update(&mut world, 0.2).unwrap();
    assert_eq!(logged(&world), vec!["first", "second", "child"]);
}

#[test]
fn false_branch_descendants_never_run() {
    let mut world = world();
    let mut scheduler = Scheduler::new();
    let parent = scheduler.at(1.0).call(log("parent")).id();
    scheduler
        .step(parent)
        .when(|_| false)
        .call(log("no"))
        .after(0.5)
        .call(log("no later"));
    scheduler
        .step(parent)
        .when(|_| true)
        .after(0.5)
        .call(log("yes later"));

    for _ in 0..40 {
        scheduler.update(&mut world, 0.25).unwrap();
    }
    assert_eq!(logged(&world), vec!["parent", "yes later"]);
    assert_eq!(scheduler.pending_len(), 0);
}

#[test]
fn branches_can_chain_further_branches() {
    #[derive(Resource)]
    struct Count(u32);

    let mut world = world();
    world.insert_resource(Count(2));
    let mut scheduler = Scheduler::new();
    let outer = scheduler
        .at(0.0)
        .when(|w| w.resource::<Count>().0 > 1)
        .call(log("outer"))
        .after(1.0)
        .id();
    scheduler
        .step(outer)
        .when(|w| w.resource::<Count>().0 > 5)
        .call(log("too many"));
    scheduler
        .step(outer)
        .when(|w| w.resource::<Count>().0 == 2)
        .call(log("two"));

    scheduler.update(&mut world, 2.0).unwrap();
    assert_eq!(logged(&world), vec!["outer", "two"]);
}
