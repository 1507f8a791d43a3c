// Rust guideline compliant 2026-10-17

//! The response envelope and its builder.

use crate::catalog::{self, Category};
use crate::truthy::{present_or_none, truthy_or_empty, truthy_or_none};
use crate::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Uniform response record returned by every helper.
///
/// Fields are read-only after construction: `data` is never `null` and
/// `message` is absent rather than falsy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    status: u16,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_message"
    )]
    message: Option<Value>,
    #[serde(default = "empty_data", deserialize_with = "deserialize_data")]
    data: Value,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_stack"
    )]
    stack: Option<Value>,
}

/// Builds a response envelope.
///
/// # Arguments
///
/// * `status` - Status code, passed through unchecked
/// * `message` - Description; dropped when falsy
/// * `data` - Payload; replaced by `{}` when falsy
/// * `stack` - Diagnostic value; dropped only when `null`
///
/// # Returns
///
/// A new envelope. This never fails.
pub fn build_envelope(
    status: u16,
    message: impl Into<Value>,
    data: impl Into<Value>,
    stack: impl Into<Value>,
) -> ResponseEnvelope {
    ResponseEnvelope {
        status,
        message: truthy_or_none(message.into()),
        data: truthy_or_empty(data.into()),
        stack: present_or_none(stack.into()),
    }
}

impl ResponseEnvelope {
    /// Creates an envelope with only a status code and empty data.
    #[must_use]
    pub fn new(status: u16) -> Self {
        build_envelope(status, Value::Null, Value::Null, Value::Null)
    }

    /// Replaces the message, applying the builder's truthiness rule.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Value>) -> Self {
        self.message = truthy_or_none(message.into());
        self
    }

    /// Replaces the payload, applying the builder's truthiness rule.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = truthy_or_empty(data.into());
        self
    }

    /// Replaces the diagnostic value.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<Value>) -> Self {
        self.stack = present_or_none(stack.into());
        self
    }

    /// Returns the status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the message, if one was supplied.
    #[must_use]
    pub fn message(&self) -> Option<&Value> {
        self.message.as_ref()
    }

    /// Returns the message when it is a plain string.
    #[must_use]
    pub fn message_str(&self) -> Option<&str> {
        self.message.as_ref().and_then(Value::as_str)
    }

    /// Returns the payload. Never `null`.
    #[must_use]
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Returns the diagnostic value, if one was supplied.
    #[must_use]
    pub fn stack(&self) -> Option<&Value> {
        self.stack.as_ref()
    }

    /// Splits the envelope into `(status, message, data, stack)`.
    #[must_use]
    pub fn into_parts(self) -> (u16, Option<Value>, Value, Option<Value>) {
        (self.status, self.message, self.data, self.stack)
    }

    /// Returns the catalog reason phrase for the status code.
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        catalog::reason_phrase(self.status)
    }

    /// Returns the status class, or `None` outside 100-599.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        Category::of(self.status)
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.category() == Some(Category::Success)
    }

    /// Returns true for 4xx and 5xx statuses.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(
            self.category(),
            Some(Category::ClientError | Category::ServerError)
        )
    }

    /// Converts the envelope into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if a payload value cannot be represented as JSON.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the envelope into a single-line JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if a payload value cannot be represented as JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses an envelope from JSON, re-applying the builder's rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON or lacks a status.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

fn empty_data() -> Value {
    Value::Object(Map::new())
}

fn deserialize_message<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(truthy_or_none(Value::deserialize(deserializer)?))
}

fn deserialize_data<'de, D>(deserializer: D) -> std::result::Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(truthy_or_empty(Value::deserialize(deserializer)?))
}

fn deserialize_stack<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(present_or_none(Value::deserialize(deserializer)?))
}
