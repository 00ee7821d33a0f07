//! Error types shared by the entity store, animations and the scenario script.
//!
//! Every variant here signals a scenario-authoring bug rather than a runtime
//! condition: callers propagate them with `?` up to the frame loop, which
//! logs and aborts. Query misses and false branch predicates are not errors.

use bevy_ecs::prelude::Entity;
use thiserror::Error;

use crate::ecs::ComponentKind;

/// Failures raised by [`World`](crate::ecs::World) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
    #[error("entity {entity} already has a {component:?} component")]
    DuplicateComponent {
        entity: Entity,
        component: ComponentKind,
    },
    #[error("entity {entity} has no {component:?} component")]
    MissingComponent {
        entity: Entity,
        component: ComponentKind,
    },
    #[error("entity {0} does not exist")]
    NoSuchEntity(Entity),
}

/// Failures raised while building or playing a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Ecs(#[from] EcsError),
    #[error("speech bubble {bubble} is still showing")]
    BubbleBusy { bubble: Entity },
    #[error("no tile space named '{0}'")]
    UnknownTileSpace(String),
}
