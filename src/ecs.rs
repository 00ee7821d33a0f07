//! Entity store.
//!
//! [`World`] wraps a [`bevy_ecs`] world and adds the guarantees the game
//! relies on:
//! - a component kind can be added only once per entity through
//!   [`World::add_component`] (bulk [`World::add_components`] skips the check),
//! - [`World::query`] returns entities in creation order,
//! - [`World::clear`] drops every entity but keeps resources.
//!
//! Component kinds form the closed set [`ComponentKind`]; each component type
//! declares its tag by implementing [`GameComponent`].

use bevy_ecs::component::Mutable;
use bevy_ecs::prelude::{Bundle, Component, Entity, Mut, Resource};
use bevy_ecs::world::{EntityRef, World as EcsWorld};

use crate::components::activable::Activable;
use crate::components::animation::Animable;
use crate::components::character::Character;
use crate::components::clickable::{Clickable, Hoverable};
use crate::components::colorable::Colorable;
use crate::components::fear::{Frightenable, Frightening};
use crate::components::lightable::Lightable;
use crate::components::minimap::MinimapCell;
use crate::components::position::Position;
use crate::components::renderable::Renderable;
use crate::components::sky::Sky;
use crate::components::tile::{TilePosition, TileSpace};
use crate::error::EcsError;

/// Tag identifying a component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Position,
    TilePosition,
    TileSpace,
    Renderable,
    Colorable,
    Activable,
    Animable,
    Lightable,
    Clickable,
    Hoverable,
    Character,
    Frightenable,
    Frightening,
    MinimapCell,
    Sky,
}

impl ComponentKind {
    /// Whether the entity holds a component of this kind.
    pub fn present(self, entity: &EntityRef) -> bool {
        match self {
            ComponentKind::Position => entity.contains::<Position>(),
            ComponentKind::TilePosition => entity.contains::<TilePosition>(),
            ComponentKind::TileSpace => entity.contains::<TileSpace>(),
            ComponentKind::Renderable => entity.contains::<Renderable>(),
            ComponentKind::Colorable => entity.contains::<Colorable>(),
            ComponentKind::Activable => entity.contains::<Activable>(),
            ComponentKind::Animable => entity.contains::<Animable>(),
            ComponentKind::Lightable => entity.contains::<Lightable>(),
            ComponentKind::Clickable => entity.contains::<Clickable>(),
            ComponentKind::Hoverable => entity.contains::<Hoverable>(),
            ComponentKind::Character => entity.contains::<Character>(),
            ComponentKind::Frightenable => entity.contains::<Frightenable>(),
            ComponentKind::Frightening => entity.contains::<Frightening>(),
            ComponentKind::MinimapCell => entity.contains::<MinimapCell>(),
            ComponentKind::Sky => entity.contains::<Sky>(),
        }
    }
}

/// A bevy component that belongs to the game's closed set of kinds.
pub trait GameComponent: Component {
    const KIND: ComponentKind;
}

macro_rules! game_components {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl GameComponent for $ty {
                const KIND: ComponentKind = ComponentKind::$kind;
            }
        )*
    };
}

game_components! {
    Position => Position,
    TilePosition => TilePosition,
    TileSpace => TileSpace,
    Renderable => Renderable,
    Colorable => Colorable,
    Activable => Activable,
    Animable => Animable,
    Lightable => Lightable,
    Clickable => Clickable,
    Hoverable => Hoverable,
    Character => Character,
    Frightenable => Frightenable,
    Frightening => Frightening,
    MinimapCell => MinimapCell,
    Sky => Sky,
}

/// Entity bag with kind-set queries and world-wide resources.
pub struct World {
    inner: EcsWorld,
    /// Live entities in creation order.
    order: Vec<Entity>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        World {
            inner: EcsWorld::new(),
            order: Vec::new(),
        }
    }

    /// Allocate a new entity with no components.
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.inner.spawn_empty().id();
        self.order.push(entity);
        entity
    }

    /// Attach `component`, failing if the entity already holds one of its kind.
    pub fn add_component<C: GameComponent>(
        &mut self,
        entity: Entity,
        component: C,
    ) -> Result<(), EcsError> {
        let mut entity_mut = self
            .inner
            .get_entity_mut(entity)
            .map_err(|_| EcsError::NoSuchEntity(entity))?;
        if entity_mut.contains::<C>() {
            return Err(EcsError::DuplicateComponent {
                entity,
                component: C::KIND,
            });
        }
        entity_mut.insert(component);
        Ok(())
    }

    /// Attach several components at once.
    ///
    /// Used while building scenes. Kinds the entity already holds are not
    /// reported: the existing component stays and the bundle's one is
    /// dropped. A bundle naming the same kind twice is rejected by bevy when
    /// the bundle type is registered, which panics.
    pub fn add_components<B: Bundle>(&mut self, entity: Entity, bundle: B) -> Result<(), EcsError> {
        let mut entity_mut = self
            .inner
            .get_entity_mut(entity)
            .map_err(|_| EcsError::NoSuchEntity(entity))?;
        entity_mut.insert_if_new(bundle);
        Ok(())
    }

    /// Create an entity and attach `bundle` to it.
    pub fn spawn<B: Bundle>(&mut self, bundle: B) -> Entity {
        let entity = self.inner.spawn(bundle).id();
        self.order.push(entity);
        entity
    }

    pub fn get_component<C: GameComponent>(&self, entity: Entity) -> Option<&C> {
        self.inner.get::<C>(entity)
    }

    pub fn get_component_mut<C>(&mut self, entity: Entity) -> Option<Mut<'_, C>>
    where
        C: GameComponent + Component<Mutability = Mutable>,
    {
        self.inner.get_mut::<C>(entity)
    }

    /// Like [`get_component`](Self::get_component) but treats absence as an error.
    pub fn require<C: GameComponent>(&self, entity: Entity) -> Result<&C, EcsError> {
        self.inner
            .get::<C>(entity)
            .ok_or(EcsError::MissingComponent {
                entity,
                component: C::KIND,
            })
    }

    /// Like [`get_component_mut`](Self::get_component_mut) but treats absence as an error.
    pub fn require_mut<C>(&mut self, entity: Entity) -> Result<Mut<'_, C>, EcsError>
    where
        C: GameComponent + Component<Mutability = Mutable>,
    {
        self.inner
            .get_mut::<C>(entity)
            .ok_or(EcsError::MissingComponent {
                entity,
                component: C::KIND,
            })
    }

    pub fn has_component<C: GameComponent>(&self, entity: Entity) -> bool {
        self.inner
            .get_entity(entity)
            .map(|e| e.contains::<C>())
            .unwrap_or(false)
    }

    pub fn has_kind(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.inner
            .get_entity(entity)
            .map(|e| kind.present(&e))
            .unwrap_or(false)
    }

    /// All entities holding every kind in `kinds`, in creation order.
    pub fn query(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        self.order
            .iter()
            .copied()
            .filter(|&entity| {
                self.inner
                    .get_entity(entity)
                    .map(|e| kinds.iter().all(|kind| kind.present(&e)))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn contains_entity(&self, entity: Entity) -> bool {
        self.inner.get_entity(entity).is_ok()
    }

    /// Live entities in creation order.
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove an entity and all its components. Returns false if it was not live.
    pub fn remove_entity(&mut self, entity: Entity) -> bool {
        let Some(index) = self.order.iter().position(|&e| e == entity) else {
            return false;
        };
        self.order.remove(index);
        self.inner.despawn(entity)
    }

    /// Drop every entity. Resources are kept.
    pub fn clear(&mut self) {
        for entity in self.order.drain(..) {
            self.inner.despawn(entity);
        }
    }

    pub fn insert_resource<R: Resource>(&mut self, resource: R) {
        self.inner.insert_resource(resource);
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.inner.resource::<R>()
    }

    pub fn resource_mut<R: Resource>(&mut self) -> Mut<'_, R> {
        self.inner.resource_mut::<R>()
    }

    pub fn get_resource<R: Resource>(&self) -> Option<&R> {
        self.inner.get_resource::<R>()
    }

    pub fn get_resource_mut<R: Resource>(&mut self) -> Option<Mut<'_, R>> {
        self.inner.get_resource_mut::<R>()
    }

    pub fn contains_resource<R: Resource>(&self) -> bool {
        self.inner.contains_resource::<R>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_component_rejects_duplicate_kind() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Activable::new(true)).unwrap();
        let err = world.add_component(e, Activable::new(false)).unwrap_err();
        assert_eq!(
            err,
            EcsError::DuplicateComponent {
                entity: e,
                component: ComponentKind::Activable
            }
        );
        // The first value survives.
        assert!(world.get_component::<Activable>(e).unwrap().active);
    }

    #[test]
    fn test_add_components_keeps_existing_kind() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Activable::new(true)).unwrap();
        world
            .add_components(e, (Activable::new(false), Position::new(1.0, 2.0, 3.0, 4.0)))
            .unwrap();
        // No error, the first value stays in effect and new kinds are added.
        assert!(world.get_component::<Activable>(e).unwrap().active);
        assert_eq!(
            world.get_component::<Position>(e),
            Some(&Position::new(1.0, 2.0, 3.0, 4.0))
        );
    }

    #[test]
    #[should_panic]
    fn test_add_components_bundle_repeating_a_kind_panics() {
        let mut world = World::new();
        let e = world.create_entity();
        let _ = world.add_components(e, (Activable::new(true), Activable::new(false)));
    }

    #[test]
    fn test_require_reports_missing_kind() {
        let mut world = World::new();
        let e = world.create_entity();
        let err = world.require::<Position>(e).unwrap_err();
        assert_eq!(
            err,
            EcsError::MissingComponent {
                entity: e,
                component: ComponentKind::Position
            }
        );
        assert!(world.get_component::<Position>(e).is_none());
    }

    #[test]
    fn test_add_component_to_removed_entity_fails() {
        let mut world = World::new();
        let e = world.create_entity();
        assert!(world.remove_entity(e));
        assert!(!world.remove_entity(e));
        assert_eq!(
            world.add_component(e, Sky).unwrap_err(),
            EcsError::NoSuchEntity(e)
        );
    }

    #[test]
    fn test_query_keeps_creation_order() {
        let mut world = World::new();
        let a = world.spawn((Position::new(0.0, 0.0, 1.0, 1.0), Sky));
        let _b = world.spawn((Position::new(0.0, 0.0, 1.0, 1.0),));
        let c = world.spawn((Sky, Position::new(0.0, 0.0, 1.0, 1.0)));
        let d = world.create_entity();
        world.add_component(d, Sky).unwrap();
        world.add_component(d, Position::new(1.0, 1.0, 1.0, 1.0)).unwrap();

        let found = world.query(&[ComponentKind::Position, ComponentKind::Sky]);
        assert_eq!(found, vec![a, c, d]);
        assert!(world.query(&[ComponentKind::Lightable]).is_empty());
        assert_eq!(world.query(&[]).len(), 4);
    }

    #[test]
    fn test_clear_keeps_resources() {
        #[derive(Resource)]
        struct Marker(u32);

        let mut world = World::new();
        world.insert_resource(Marker(7));
        world.spawn((Sky,));
        world.spawn((Sky,));
        world.clear();
        assert!(world.is_empty());
        assert!(world.query(&[ComponentKind::Sky]).is_empty());
        assert_eq!(world.resource::<Marker>().0, 7);
    }
}
