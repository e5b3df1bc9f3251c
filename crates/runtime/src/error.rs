//! Errors surfaced by the world API.
//!
//! Orders naming entities or templates that do not exist are rejected with
//! [`WorldError`]; assembly failures from the core are wrapped so callers can
//! bubble them up with context.
use skirmish_core::{
    AssemblyError, CoreError, EntityId, ErrorSeverity, Position, UnitStateKind,
};
use state_machine::{GraphError, MachineError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorldError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("unknown unit template '{0}'")]
    UnknownTemplate(String),

    #[error("no unit {0} in the world")]
    UnknownEntity(EntityId),

    #[error("tile {0} is outside the map")]
    OffMap(Position),

    #[error("tile {0} cannot be stood on")]
    Blocked(Position),

    #[error("unit {0} is dying and takes no orders")]
    Dead(EntityId),

    #[error("tile {0} holds no resource")]
    NoResource(Position),

    #[error("unit {0} cannot harvest")]
    CannotHarvest(EntityId),

    #[error("unit {0} cannot attack")]
    CannotAttack(EntityId),

    #[error("scenario unit {index} targets missing unit {target}")]
    UnknownSpawnTarget { index: usize, target: usize },

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("invalid unit state graph: {0}")]
    Graph(#[from] GraphError<UnitStateKind>),

    #[error(transparent)]
    Machine(#[from] MachineError<UnitStateKind>),
}

impl CoreError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Assembly(error) => error.severity(),
            Self::Graph(_) => ErrorSeverity::Fatal,
            Self::Machine(error) => error.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTemplate(_) => "WORLD_UNKNOWN_TEMPLATE",
            Self::UnknownEntity(_) => "WORLD_UNKNOWN_ENTITY",
            Self::OffMap(_) => "WORLD_OFF_MAP",
            Self::Blocked(_) => "WORLD_BLOCKED",
            Self::Dead(_) => "WORLD_DEAD",
            Self::NoResource(_) => "WORLD_NO_RESOURCE",
            Self::CannotHarvest(_) => "WORLD_CANNOT_HARVEST",
            Self::CannotAttack(_) => "WORLD_CANNOT_ATTACK",
            Self::UnknownSpawnTarget { .. } => "WORLD_UNKNOWN_SPAWN_TARGET",
            Self::Assembly(error) => error.error_code(),
            Self::Graph(_) => "WORLD_GRAPH",
            Self::Machine(error) => error.error_code(),
        }
    }
}
