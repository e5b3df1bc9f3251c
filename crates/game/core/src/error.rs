//! Common error infrastructure for skirmish-core.
//!
//! This module provides the severity classification shared by all error types
//! in the crate, plus the errors raised while assembling units and running the
//! resource workflow.
//!
//! # Design Principles
//!
//! - **Configuration errors are fatal**: a unit whose parts or state graph are
//!   incomplete is never constructed
//! - **Workflow errors are local**: the failing action is aborted and the unit
//!   keeps running
//! - **Absence is not an error**: reading an unset flag yields `None`/`false`

use state_machine::{GraphError, MachineError};

use crate::common::EntityId;
use crate::kinds::Race;
use crate::unit::UnitStateKind;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The action is dropped; the entity carries on
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Broken configuration; the entity cannot be built or driven
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or broken configuration.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all skirmish-core errors.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Raised while assembling a unit from its parts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    #[error("unit {entity} is missing required part `{part}`")]
    MissingPart {
        entity: EntityId,
        part: &'static str,
    },

    #[error("unit state graph does not register lifecycle state {0}")]
    MissingState(UnitStateKind),

    #[error("invalid unit state graph: {0}")]
    Graph(#[from] GraphError<UnitStateKind>),

    #[error("cannot enter initial state: {0}")]
    Machine(#[from] MachineError<UnitStateKind>),
}

impl CoreError for AssemblyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPart { .. } => "ASSEMBLY_MISSING_PART",
            Self::MissingState(_) => "ASSEMBLY_MISSING_STATE",
            Self::Graph(_) => "ASSEMBLY_GRAPH",
            Self::Machine(_) => "ASSEMBLY_MACHINE",
        }
    }
}

/// Inconsistency detected by the resource workflow.
///
/// The workflow recovers by stopping the extraction that triggered it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error("unit {entity} cannot carry: race {race} has no warehouse")]
    NoWarehouse { entity: EntityId, race: Race },

    #[error("unit {entity} has no resource location to cut")]
    NoResourceLocation { entity: EntityId },
}

impl CoreError for WorkflowError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoWarehouse { .. } => "WORKFLOW_NO_WAREHOUSE",
            Self::NoResourceLocation { .. } => "WORKFLOW_NO_RESOURCE_LOCATION",
        }
    }
}

impl CoreError for MachineError<UnitStateKind> {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "MACHINE_UNKNOWN_STATE"
    }
}
