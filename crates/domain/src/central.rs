//! Central — a network controller registered by name, MAC and IPv4 address.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RegistryError;
use crate::id::CentralId;
use crate::time::Timestamp;
use crate::validation::{self, FieldRules, Rule};

/// Declarative schema checked against every [`CentralDraft`].
///
/// Order matters: violations are reported in the order fields appear here.
/// Field names are the record's own (`Name`, `MAC`, `IP`), not the JSON keys.
pub const CENTRAL_SCHEMA: &[FieldRules] = &[
    FieldRules {
        field: "Name",
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "MAC",
        rules: &[Rule::Required, Rule::Mac],
    },
    FieldRules {
        field: "IP",
        rules: &[Rule::Required, Rule::Ipv4],
    },
];

/// A persisted central.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Central {
    pub id: CentralId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
    pub mac: String,
    pub ip: String,
}

impl Central {
    /// Materialise a draft as a freshly created record.
    #[must_use]
    pub fn from_draft(id: CentralId, draft: CentralDraft, at: Timestamp) -> Self {
        Self {
            id,
            created_at: at,
            updated_at: at,
            name: draft.name,
            mac: draft.mac,
            ip: draft.ip,
        }
    }

    /// Overwrite every client-owned field, keeping `id` and `created_at`.
    pub fn overwrite(&mut self, draft: CentralDraft, at: Timestamp) {
        self.name = draft.name;
        self.mac = draft.mac;
        self.ip = draft.ip;
        self.updated_at = at;
    }
}

/// Client-supplied fields of a [`Central`], as received on create and update.
///
/// Absent and `null` fields deserialize as empty strings so that they are
/// reported by [`CentralDraft::validate`] rather than by the JSON parser. Any
/// `id` or timestamp sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralDraft {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub mac: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ip: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CentralDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, mac: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mac: mac.into(),
            ip: ip.into(),
        }
    }

    /// Check the draft against [`CENTRAL_SCHEMA`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] listing every failing field.
    pub fn validate(&self) -> Result<(), RegistryError> {
        validation::check(CENTRAL_SCHEMA, |field| match field {
            "Name" => Some(self.name.as_str()),
            "MAC" => Some(self.mac.as_str()),
            "IP" => Some(self.ip.as_str()),
            _ => None,
        })?;
        Ok(())
    }
}
