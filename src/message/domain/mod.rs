//! Domain types for message interactions.
//!
//! This module contains pure domain types with no I/O. Rendering failures
//! are recoverable and only logged; nothing here returns an error except
//! explicit validation.

mod body;
mod charset;
pub mod content_type;
mod interaction;
mod message;
mod metadata;
mod provider_state;
mod spec_version;

pub use body::{Body, detect_content_type};
pub use charset::Charset;
pub use content_type::{APPLICATION_JSON, APPLICATION_OCTET_STREAM, ContentType, TEXT_PLAIN};
pub use interaction::{Interaction, InteractionKind};
pub use message::Message;
pub use metadata::Metadata;
pub use provider_state::ProviderState;
pub use spec_version::{ParseSpecVersionError, SpecVersion};
