//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Lingua Rank domain.

mod alpha;
mod errors;
mod ids;
mod stage;
mod state_machine;
mod timestamp;

pub use alpha::AlphaLevel;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use stage::EvaluationStage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
