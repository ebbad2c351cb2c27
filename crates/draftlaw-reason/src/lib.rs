//! Instruction reasoning: classify free-text instructions against an
//! extracted record and turn them into resolution clauses.

pub mod actions;
pub mod authorities;
pub mod reasoner;
pub mod rules;

pub use actions::{ACTION_PLACEHOLDER, formalize_action};
pub use authorities::suggest_authorities;
pub use reasoner::{Overrides, Reasoner, analyze, warning};
pub use rules::{AUTHORITY, Cascade, Condition, RESOLUTION_TYPE, Rule};
