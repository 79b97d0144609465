//! Linguistic terms and the ordered term registry.

mod registry;
mod term;
mod validation;

pub use registry::{TermPatch, TermRegistry};
pub use term::{LinguisticTerm, MIN_NAME_LENGTH};
pub use validation::TermValidation;
