//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces that the message layer requires
//! from collaborating engines. Adapters implement these ports.

pub mod ruleset;

pub use ruleset::{RuleSet, RuleSetResult};
