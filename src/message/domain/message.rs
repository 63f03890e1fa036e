//! The Message aggregate: one asynchronous interaction in a contract file.

use super::{Body, ContentType, Interaction, InteractionKind, Metadata, ProviderState, SpecVersion};
use crate::message::{
    adapters::{JsonGenerators, JsonMatchingRules},
    error::ValidationError,
    ports::RuleSet,
};
use serde_json::{Map, Value};
use std::hash::{Hash, Hasher};

/// An asynchronous message interaction.
///
/// The description, provider states and interaction identifier are fixed at
/// construction. The body, matching rules, generators and metadata may be
/// replaced afterwards without further validation.
///
/// Two messages are equal (and hash alike) when their description, provider
/// states, body, matching rules and generators agree. Metadata and the
/// interaction identifier do not take part.
///
/// A `Message` has no interior synchronisation. Callers sharing one across
/// threads must serialise mutation themselves.
///
/// # Examples
///
/// ```
/// use pact_message::message::domain::{Body, ContentType, Interaction, Message, ProviderState};
///
/// let message: Message = Message::new("an order created event")
///     .with_provider_state(ProviderState::new("an order exists"))
///     .with_body(Body::from_text(r#"{"id":1}"#, Some(ContentType::json())));
///
/// assert_eq!(message.identity_key(), "an order exists_an order created event");
/// assert_eq!(message.formatted_body(), "{\n  \"id\": 1\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Message<M = JsonMatchingRules, G = JsonGenerators> {
    description: String,
    provider_states: Vec<ProviderState>,
    interaction_id: Option<String>,
    body: Body,
    matching_rules: M,
    generators: G,
    metadata: Metadata,
}

impl<M: RuleSet, G: RuleSet> Message<M, G> {
    /// Creates a message with a missing body, no rules and no metadata.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            provider_states: Vec::new(),
            interaction_id: None,
            body: Body::Missing,
            matching_rules: M::default(),
            generators: G::default(),
            metadata: Metadata::new(),
        }
    }

    /// Appends a provider state.
    #[must_use]
    pub fn with_provider_state(mut self, state: ProviderState) -> Self {
        self.provider_states.push(state);
        self
    }

    /// Appends several provider states, keeping their order.
    #[must_use]
    pub fn with_provider_states(mut self, states: impl IntoIterator<Item = ProviderState>) -> Self {
        self.provider_states.extend(states);
        self
    }

    /// Sets the interaction identifier.
    #[must_use]
    pub fn with_interaction_id(mut self, id: impl Into<String>) -> Self {
        self.interaction_id = Some(id.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Sets the matching rules.
    #[must_use]
    pub fn with_matching_rules(mut self, rules: M) -> Self {
        self.matching_rules = rules;
        self
    }

    /// Sets the generators.
    #[must_use]
    pub fn with_generators(mut self, generators: G) -> Self {
        self.generators = generators;
        self
    }

    /// Sets the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Replaces the body.
    pub fn set_body(&mut self, body: Body) -> &mut Self {
        self.body = body;
        self
    }

    /// Replaces the matching rules.
    pub fn set_matching_rules(&mut self, rules: M) -> &mut Self {
        self.matching_rules = rules;
        self
    }

    /// Replaces the generators.
    pub fn set_generators(&mut self, generators: G) -> &mut Self {
        self.generators = generators;
        self
    }

    /// Replaces the metadata.
    pub fn set_metadata(&mut self, metadata: Metadata) -> &mut Self {
        self.metadata = metadata;
        self
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the provider states.
    #[must_use]
    pub fn provider_states(&self) -> &[ProviderState] {
        &self.provider_states
    }

    /// Returns the interaction identifier.
    #[must_use]
    pub fn interaction_id(&self) -> Option<&str> {
        self.interaction_id.as_deref()
    }

    /// Returns the body.
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Returns the matching rules.
    #[must_use]
    pub const fn matching_rules(&self) -> &M {
        &self.matching_rules
    }

    /// Returns the generators.
    #[must_use]
    pub const fn generators(&self) -> &G {
        &self.generators
    }

    /// Returns the metadata.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the body payload, empty when the body is missing or null.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.body.bytes()
    }

    /// Returns the body decoded with the body's own charset.
    #[must_use]
    pub fn text(&self) -> String {
        self.body.text()
    }

    /// Returns the content type governing the message.
    ///
    /// A parseable declaration in the metadata wins; otherwise the body's own
    /// content type is used.
    #[must_use]
    pub fn effective_content_type(&self) -> Option<ContentType> {
        self.metadata
            .content_type()
            .or_else(|| self.body.content_type().cloned())
    }

    /// Renders the body as a string.
    ///
    /// The body's own content type selects the rendering; the metadata
    /// declaration is only consulted when the body carries none.
    #[must_use]
    pub fn formatted_body(&self) -> String {
        let content_type = self
            .body
            .content_type()
            .cloned()
            .or_else(|| self.metadata.content_type());
        self.body.format(content_type.as_ref())
    }

    /// Returns `true` if the body is embedded in the wire form as a JSON
    /// document rather than as a string.
    #[must_use]
    pub fn has_structured_body(&self) -> bool {
        self.body
            .is_structured_json(self.effective_content_type().as_ref())
    }

    /// Checks that the message can be written at `version`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing every ruleset that the
    /// version cannot represent.
    pub fn validate_for_version(&self, version: SpecVersion) -> Result<(), ValidationError> {
        let mut problems = self.matching_rules.validate_for_version(version);
        problems.extend(self.generators.validate_for_version(version));
        ValidationError::multiple(problems).map_or(Ok(()), Err)
    }

    /// Builds the wire representation of the message.
    ///
    /// `description` and `metaData` are always written. When the metadata
    /// declares no content type, the body's own type is written to
    /// `metaData.contentType` so the contents decode back to the same bytes.
    /// `contents` is left out for a missing body; the rulesets and
    /// `providerStates` are left out when empty.
    #[must_use]
    pub fn to_wire_map(&self, version: SpecVersion) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "description".to_owned(),
            Value::String(self.description.clone()),
        );
        map.insert("metaData".to_owned(), Value::Object(self.wire_metadata()));
        if let Some(contents) = self.wire_contents() {
            map.insert("contents".to_owned(), contents);
        }
        if !self.provider_states.is_empty() {
            map.insert(
                "providerStates".to_owned(),
                Value::Array(
                    self.provider_states
                        .iter()
                        .map(ProviderState::to_json)
                        .collect(),
                ),
            );
        }
        if !self.matching_rules.is_empty() {
            map.insert(
                "matchingRules".to_owned(),
                self.matching_rules.to_json(version),
            );
        }
        if !self.generators.is_empty() {
            map.insert("generators".to_owned(), self.generators.to_json(version));
        }
        map
    }

    fn wire_metadata(&self) -> Map<String, Value> {
        let mut metadata = self.metadata.to_json_map();
        if let Some(content_type) = self
            .body
            .content_type()
            .filter(|_| !self.metadata.declares_content_type())
        {
            metadata.insert(
                "contentType".to_owned(),
                Value::String(content_type.to_string()),
            );
        }
        metadata
    }

    fn wire_contents(&self) -> Option<Value> {
        match &self.body {
            Body::Missing => None,
            Body::Null => Some(Value::Null),
            Body::Present { .. } => {
                // A bare JSON string embeds as its unquoted text.
                let json = self
                    .body
                    .parse_json(self.effective_content_type().as_ref());
                Some(json.unwrap_or_else(|| Value::String(self.formatted_body())))
            }
        }
    }
}

impl<M: RuleSet, G: RuleSet> Interaction for Message<M, G> {
    fn kind(&self) -> InteractionKind {
        InteractionKind::Message
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn provider_states(&self) -> &[ProviderState] {
        &self.provider_states
    }

    fn interaction_id(&self) -> Option<&str> {
        self.interaction_id.as_deref()
    }
}

impl<M: RuleSet, G: RuleSet> PartialEq for Message<M, G> {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.provider_states == other.provider_states
            && self.body == other.body
            && self.matching_rules == other.matching_rules
            && self.generators == other.generators
    }
}

impl<M: RuleSet, G: RuleSet> Eq for Message<M, G> {}

impl<M: RuleSet, G: RuleSet> Hash for Message<M, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description.hash(state);
        self.provider_states.hash(state);
        self.body.hash(state);
        self.matching_rules.hash(state);
        self.generators.hash(state);
    }
}
