//! Message interactions for consumer-driven contract files.
//!
//! This crate models a single asynchronous message interaction, its body
//! and content type, and the JSON form it takes inside a contract file.
//! Matching rules and generators are carried opaquely through the
//! [`message::ports::RuleSet`] port.
//!
//! # Modules
//!
//! - [`message`]: the message aggregate, its wire form and supporting types

pub mod message;
