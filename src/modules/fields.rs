//! Serde helpers for the loosely-typed payloads the storefront API returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::timezone::parse_api_timestamp;
use crate::core::{AppError, DeletableRecord, EntityKind, LifecycleState, Listing, Result};

/// Lifecycle fields every storefront document carries
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub mongo_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_deleted: Option<bool>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    /// Build the lifecycle part of a record for the given listing
    ///
    /// Items of the deleted listing are `Deleted` by membership; `deletedAt` falls back
    /// to `updatedAt`. Items of the active listing that carry a deletion marker are
    /// dropped, since a record is never both active and deleted.
    pub fn into_record(self, kind: EntityKind, listing: Listing) -> Result<Option<DeletableRecord>> {
        let id = self
            .mongo_id
            .or(self.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::validation(format!("{} record without an id", kind)))?;

        let state = listing.state();
        match state {
            LifecycleState::Deleted => Ok(Some(
                DeletableRecord::new(id, state).with_deleted_at(self.deleted_at.or(self.updated_at)),
            )),
            _ => {
                if self.is_deleted == Some(true) || self.deleted_at.is_some() {
                    tracing::warn!(
                        entity = %kind,
                        id = %id,
                        "Dropping soft-deleted record from active listing"
                    );
                    return Ok(None);
                }
                Ok(Some(DeletableRecord::new(id, state)))
            }
        }
    }
}

/// Strings, numbers and booleans as a string; `{"$oid": ..}` as its inner id
pub fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_string))
}

/// A plain string, or a populated reference such as `{ "name": "Shiva" }`,
/// or a list of either joined with ", "
pub fn name_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(display_name))
}

pub fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        Some(Value::Number(n)) => n.as_i64().map(|n| n != 0),
        _ => None,
    })
}

/// RFC 3339 strings or epoch milliseconds
pub fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_api_timestamp(&s),
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        Some(Value::Object(map)) => map
            .get("$date")
            .and_then(Value::as_str)
            .and_then(parse_api_timestamp),
        _ => None,
    })
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => map.get("$oid").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

fn display_name(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => ["name", "title", "fullName"]
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
            .map(str::to_string),
        Value::Array(items) => {
            let names: Vec<String> = items.iter().filter_map(display_name).collect();
            if names.is_empty() {
                None
            } else {
                Some(names.join(", "))
            }
        }
        other => value_to_string(other),
    }
}
