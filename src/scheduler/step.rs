use bevy_ecs::prelude::Entity;

use super::actions;
use super::{Action, Scheduler, Step, StepId};
use crate::components::activable::Activable;
use crate::components::animation::{Animable, Animation};
use crate::components::character::Direction;
use crate::components::lightable::Lightable;
use crate::components::renderable::Renderable;
use crate::components::tile::TilePosition;
use crate::ecs::World;
use crate::error::ScenarioError;

/// Fluent handle on one step of a [`Scheduler`].
///
/// Every action method registers a hook on the step and returns the same
/// builder; [`after`](Self::after) and [`when`](Self::when) return a builder
/// on a new child step. Hooks that need a component fail with
/// [`ScenarioError::Ecs`] when the entity lacks it.
pub struct StepBuilder<'a> {
    scheduler: &'a mut Scheduler,
    id: StepId,
}

impl<'a> StepBuilder<'a> {
    pub(super) fn new(scheduler: &'a mut Scheduler, id: StepId) -> Self {
        StepBuilder { scheduler, id }
    }

    pub fn id(&self) -> StepId {
        self.id
    }

    /// Absolute fire time of this step.
    pub fn time(&self) -> f32 {
        self.scheduler.steps[self.id.0].time
    }

    /// Chain a step firing `delay` seconds after this one.
    pub fn after(self, delay: f32) -> StepBuilder<'a> {
        let time = self.time() + delay;
        let id = self.scheduler.child(self.id, time);
        StepBuilder::new(self.scheduler, id)
    }

    /// Branch entered only if `predicate` holds when this step fires.
    ///
    /// The branch fires at the point of this step's hook list where `when`
    /// was called.
    pub fn when<P>(self, predicate: P) -> StepBuilder<'a>
    where
        P: FnOnce(&World) -> bool + 'static,
    {
        let time = self.time();
        let mut step = Step::new(time, false);
        step.guard = Some(Box::new(predicate));
        let child = self.scheduler.push_step(step);
        self.scheduler.add_action(self.id, Action::Branch(child));
        StepBuilder::new(self.scheduler, child)
    }

    /// Run a fallible closure.
    pub fn try_call<F>(self, hook: F) -> Self
    where
        F: FnOnce(&mut World) -> Result<(), ScenarioError> + 'static,
    {
        self.scheduler.add_action(self.id, Action::Call(Box::new(hook)));
        self
    }

    /// Run a closure.
    pub fn call<F>(self, hook: F) -> Self
    where
        F: FnOnce(&mut World) + 'static,
    {
        self.try_call(move |world| {
            hook(world);
            Ok(())
        })
    }

    /// Queue `animation` on the entity's [`Animable`].
    pub fn animate(self, entity: Entity, animation: Animation) -> Self {
        self.try_call(move |world| {
            world.require_mut::<Animable>(entity)?.add(animation);
            Ok(())
        })
    }

    /// Flip the entity's [`Activable`] flag.
    pub fn toggle(self, entity: Entity) -> Self {
        self.try_call(move |world| {
            world.require_mut::<Activable>(entity)?.toggle();
            Ok(())
        })
    }

    /// Switch a [`Lightable`] on or off.
    pub fn toggle_light(self, entity: Entity, on: bool) -> Self {
        self.try_call(move |world| {
            world.require_mut::<Lightable>(entity)?.toggle(on);
            Ok(())
        })
    }

    /// Replace the image drawn by the entity's [`Renderable`].
    pub fn set_image(self, entity: Entity, key: impl Into<String>) -> Self {
        let key = key.into();
        self.try_call(move |world| {
            world.require_mut::<Renderable>(entity)?.set_image(key);
            Ok(())
        })
    }

    /// Move a tile entity to `(x, y)` instantly.
    pub fn place(self, entity: Entity, x: f32, y: f32) -> Self {
        self.try_call(move |world| {
            world.require_mut::<TilePosition>(entity)?.set(x, y);
            Ok(())
        })
    }

    /// Make a character walk; see [`actions::walk`].
    pub fn walk(
        self,
        character: Entity,
        direction: Direction,
        distance: f32,
        duration: f32,
    ) -> Self {
        self.try_call(move |world| {
            actions::walk(world, character, direction, distance, duration)
        })
    }

    /// Turn a character; see [`actions::look`].
    pub fn look(self, character: Entity, direction: Direction) -> Self {
        self.try_call(move |world| actions::look(world, character, direction))
    }

    /// Show `image` in the speech bubble over a character; see [`actions::show_bubble`].
    pub fn bubble(
        self,
        character: Entity,
        bubble: Entity,
        image: impl Into<String>,
        duration: f32,
    ) -> Self {
        let image = image.into();
        self.try_call(move |world| {
            actions::show_bubble(world, character, bubble, &image, duration)
        })
    }

    /// Queue a named sound cue.
    pub fn sound(self, cue: &'static str) -> Self {
        self.call(move |world| actions::play_sound(world, cue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::colorable::Color;
    use crate::components::position::Position;

    #[test]
    fn test_builder_actions_touch_components() {
        let mut world = World::new();
        let lamp = world.spawn((
            Position::default(),
            Activable::new(false),
            Lightable::new(Position::default(), Position::default(), Color::WHITE),
            Renderable::image("lamp.png", 1.0),
            TilePosition::new("ground", (0.0, 0.0), 1.0),
            Animable::new(),
        ));
        let mut scheduler = Scheduler::new();
        scheduler
            .at(1.0)
            .toggle(lamp)
            .toggle_light(lamp, true)
            .set_image(lamp, "lamp_on.png")
            .place(lamp, 3.0, 4.0)
            .animate(lamp, Animation::vanish(2.0));
        scheduler.update(&mut world, 1.0).unwrap();

        assert!(world.get_component::<Activable>(lamp).unwrap().active);
        assert!(world.get_component::<Lightable>(lamp).unwrap().toggled);
        assert_eq!(
            world.get_component::<Renderable>(lamp).unwrap().current_image(),
            Some("lamp_on.png")
        );
        let tile = world.get_component::<TilePosition>(lamp).unwrap();
        assert_eq!((tile.x, tile.y), (3.0, 4.0));
        assert_eq!(world.get_component::<Animable>(lamp).unwrap().len(), 1);
    }

    #[test]
    fn test_when_child_shares_parent_time() {
        let mut scheduler = Scheduler::new();
        let parent = scheduler.at(2.5);
        let child = parent.when(|_| true);
        assert_eq!(child.time(), 2.5);
        assert_eq!(child.after(1.0).time(), 3.5);
    }

    #[test]
    fn test_missing_component_fails_loudly() {
        let mut world = World::new();
        let bare = world.create_entity();
        let mut scheduler = Scheduler::new();
        scheduler.at(0.0).set_image(bare, "x.png");
        let err = scheduler.update(&mut world, 0.0).unwrap_err();
        assert!(matches!(err, ScenarioError::Ecs(_)));
    }
}
