//! Structural serialization for [`Outcome`].
//!
//! The wire shape is part of the compatibility contract: fields appear in
//! the order `value, status, isSuccess, successMessage, correlationId,
//! location, errors, validationErrors`. `isSuccess` is derived from the
//! status, so serialization is hand-written and deserialization accepts and
//! ignores the field.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::status::Status;
use crate::types::{ErrorVec, ValidationError};

use super::Outcome;

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Outcome", 8)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("isSuccess", &self.is_success())?;
        state.serialize_field("successMessage", &self.success_message)?;
        state.serialize_field("correlationId", &self.correlation_id)?;
        state.serialize_field("location", &self.location)?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("validationErrors", &self.validation_errors)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct OutcomeWire<T> {
    #[serde(default)]
    value: Option<T>,
    status: Status,
    #[serde(default)]
    #[allow(dead_code)]
    is_success: bool,
    #[serde(default)]
    success_message: String,
    #[serde(default)]
    correlation_id: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    errors: ErrorVec<String>,
    #[serde(default)]
    validation_errors: ErrorVec<ValidationError>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = OutcomeWire::<T>::deserialize(deserializer)?;
        Ok(Outcome {
            value: wire.value,
            status: wire.status,
            errors: wire.errors,
            validation_errors: wire.validation_errors,
            success_message: wire.success_message,
            correlation_id: wire.correlation_id,
            location: wire.location,
        })
    }
}
