//! The common face of interactions stored in a contract file.

use super::ProviderState;
use std::fmt;

/// The concrete kind of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// An asynchronous message.
    Message,
    /// A synchronous request/response exchange.
    RequestResponse,
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message => f.write_str("message"),
            Self::RequestResponse => f.write_str("request/response"),
        }
    }
}

/// An interaction recorded in a contract file.
///
/// Contract readers keep interactions of different kinds side by side; this
/// trait is the part they share.
pub trait Interaction {
    /// Returns the concrete kind of this interaction.
    fn kind(&self) -> InteractionKind;

    /// Returns the interaction description.
    fn description(&self) -> &str;

    /// Returns the provider states, in declaration order.
    fn provider_states(&self) -> &[ProviderState];

    /// Returns the interaction identifier assigned by a broker, if any.
    fn interaction_id(&self) -> Option<&str>;

    /// Returns the key identifying this interaction within a contract.
    ///
    /// Provider-state names are joined with `", "` (`"None"` when there are
    /// none) and followed by `_` and the description.
    fn identity_key(&self) -> String {
        let joined = self
            .provider_states()
            .iter()
            .map(|state| state.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let names = if joined.is_empty() { "None" } else { joined.as_str() };
        format!("{names}_{}", self.description())
    }

    /// Returns `true` if `other` cannot share an identity key with `self`.
    ///
    /// Only interactions of a different kind conflict.
    fn conflicts_with(&self, other: &dyn Interaction) -> bool {
        self.kind() != other.kind()
    }
}
