//! Core types for webservice

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name reported by every health probe.
pub const SERVICE_NAME: &str = "webservice";

/// A D&D player character.
///
/// Every field is optional on input and always present on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    #[schema(example = "60d5ecb74b24c72b8c8b4567")]
    pub id: String,
    #[schema(example = "Aragorn")]
    pub name: String,
    #[schema(example = "Human")]
    pub race: String,
    #[schema(example = "Fighter")]
    pub class: String,
    #[schema(example = 5)]
    pub level: i64,
    #[schema(example = "2025-11-09T08:00:00Z")]
    pub created_at: String,
    #[schema(example = "2025-11-09T08:00:00Z")]
    pub updated_at: String,
}

impl Character {
    /// Overwrite the descriptive fields with those of `changes`.
    ///
    /// `id` and `created_at` are kept; `updated_at` is set to `now`.
    pub fn merge(&mut self, changes: Character, now: DateTime<Utc>) {
        self.name = changes.name;
        self.race = changes.race;
        self.class = changes.class;
        self.level = changes.level;
        self.updated_at = timestamp(now);
    }
}

/// RFC 3339 UTC timestamp with millisecond precision.
///
/// The fixed width keeps stamps ordered when compared as strings.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Status values reported by the health probes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Alive,
    Ready,
    Unavailable,
}

/// Health probe payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: ProbeStatus,
    #[schema(example = "webservice")]
    pub service: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

impl HealthStatus {
    pub fn new(status: ProbeStatus) -> Self {
        Self {
            status,
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
