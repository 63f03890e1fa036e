//! Field-by-field decoding of a message wire object.

use crate::message::{
    domain::{Body, ContentType, Message, Metadata, ProviderState, detect_content_type},
    error::{TranscodeError, json_type_name},
    ports::RuleSet,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde_json::{Map, Value};

type Object = Map<String, Value>;

/// Decodes a message from its wire object.
///
/// # Errors
///
/// Returns [`TranscodeError`] when `json` is not an object, lacks a string
/// `description`, or holds a malformed provider state, metadata object or
/// ruleset.
pub fn decode<M: RuleSet, G: RuleSet>(json: &Value) -> Result<Message<M, G>, TranscodeError> {
    let object = json
        .as_object()
        .ok_or_else(|| TranscodeError::NotAnObject(json_type_name(json)))?;

    let description = match object.get("description") {
        Some(Value::String(description)) => description.clone(),
        Some(other) => return Err(TranscodeError::invalid_field("description", "a string", other)),
        None => return Err(TranscodeError::MissingField("description")),
    };
    let provider_states = decode_provider_states(object)?;
    let metadata = decode_metadata(object)?;
    let body = decode_body(object.get("contents"), metadata.content_type());
    let matching_rules = decode_rule_set::<M>(object, "matchingRules")?;
    let generators = decode_rule_set::<G>(object, "generators")?;

    let mut message = Message::new(description)
        .with_provider_states(provider_states)
        .with_body(body)
        .with_matching_rules(matching_rules)
        .with_generators(generators)
        .with_metadata(metadata);
    if let Some(id) = object.get("_id").and_then(Value::as_str) {
        message = message.with_interaction_id(id);
    }
    Ok(message)
}

/// Reads `providerStates`, falling back to the legacy `providerState` string.
fn decode_provider_states(object: &Object) -> Result<Vec<ProviderState>, TranscodeError> {
    match object.get("providerStates") {
        Some(Value::Array(states)) => {
            return states
                .iter()
                .enumerate()
                .map(|(index, state)| {
                    ProviderState::from_json(state)
                        .map_err(|source| TranscodeError::ProviderState { index, source })
                })
                .collect();
        }
        Some(Value::Null) | None => {}
        Some(other) => {
            return Err(TranscodeError::invalid_field(
                "providerStates",
                "an array",
                other,
            ));
        }
    }

    match object.get("providerState") {
        Some(Value::String(name)) => Ok(vec![ProviderState::new(name.clone())]),
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(other) => Err(TranscodeError::invalid_field(
            "providerState",
            "a string",
            other,
        )),
    }
}

fn decode_metadata(object: &Object) -> Result<Metadata, TranscodeError> {
    match object.get("metaData") {
        Some(Value::Object(entries)) => Ok(entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()),
        Some(Value::Null) | None => Ok(Metadata::new()),
        Some(other) => Err(TranscodeError::invalid_field("metaData", "an object", other)),
    }
}

/// Builds the body from `contents` and the content type declared in the
/// metadata.
///
/// Without a declaration, structured contents are typed as JSON and string
/// contents are sniffed. A string never picks up a JSON type by sniffing,
/// so it is written back as the same string.
fn decode_body(contents: Option<&Value>, declared: Option<ContentType>) -> Body {
    match contents {
        None => Body::Missing,
        Some(Value::Null) => Body::Null,
        Some(Value::String(text)) => match declared {
            Some(content_type) if content_type.is_octet_stream() => binary_body(text, content_type),
            Some(content_type) => Body::from_text(text, Some(content_type)),
            None => {
                let sniffed = Some(detect_content_type(text)).filter(|ct| !ct.is_json());
                Body::from_text(text, sniffed)
            }
        },
        Some(structured) => Body::from_text(
            &structured.to_string(),
            Some(declared.unwrap_or_else(ContentType::json)),
        ),
    }
}

/// Binary bodies are written base64 encoded; undo that when possible.
fn binary_body(text: &str, content_type: ContentType) -> Body {
    let bytes = BASE64_STANDARD
        .decode(text)
        .inspect_err(|error| {
            tracing::debug!(%error, "binary contents are not base64, keeping the text");
        })
        .unwrap_or_else(|_| text.as_bytes().to_vec());
    Body::present(bytes, Some(content_type))
}

fn decode_rule_set<R: RuleSet>(object: &Object, field: &'static str) -> Result<R, TranscodeError> {
    match object.get(field) {
        Some(Value::Null) | None => Ok(R::default()),
        Some(json) => R::from_json(json).map_err(|error| TranscodeError::rule_set(field, error.0)),
    }
}
