// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::shared::models::UserId;

use super::{avatar_url, ProfileChanges, ProfilePayload};

mod fields {
    pub const ID: &str = "id";
    pub const LAST_UPDATED: &str = "lastUpdated";
    pub const COMPANY: &str = "company";
    pub const NAME: &str = "name";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

impl ProfileRecord {
    /// Builds the record for a freshly loaded user. Missing text fields become empty strings and
    /// the avatar is derived from the name.
    pub fn from_payload(id: UserId, payload: ProfilePayload, last_updated: DateTime<Utc>) -> Self {
        let name = payload.name.unwrap_or_default();

        Self {
            id,
            avatar_url: avatar_url(&name),
            name,
            email: payload.email.unwrap_or_default(),
            username: Some(payload.username.unwrap_or_default()),
            phone: Some(payload.phone.unwrap_or_default()),
            website: Some(payload.website.unwrap_or_default()),
            company: Some(
                payload
                    .company
                    .and_then(|company| company.name)
                    .unwrap_or_default(),
            ),
            last_updated,
            last_seen: None,
        }
    }

    /// Overlays `changes` on top of `existing` (if any). Values in `changes` win, `null` clears a
    /// field. `id` and `lastUpdated` are never taken from `changes`.
    pub fn merged(
        id: UserId,
        existing: Option<&ProfileRecord>,
        changes: &ProfileChanges,
        last_updated: DateTime<Utc>,
    ) -> Result<Self, serde_json::Error> {
        let mut record = match existing.map(serde_json::to_value).transpose()? {
            Some(Value::Object(fields)) => fields,
            _ => Map::new(),
        };

        for (field, value) in changes.iter() {
            match (field.as_str(), value) {
                (fields::ID | fields::LAST_UPDATED, _) => continue,
                (_, Value::Null) => {
                    record.remove(field);
                }
                (fields::COMPANY, Value::Object(company)) => {
                    match company.get(fields::NAME) {
                        Some(name @ Value::String(_)) => {
                            record.insert(field.clone(), name.clone());
                        }
                        _ => {
                            record.remove(field);
                        }
                    };
                }
                _ => {
                    record.insert(field.clone(), value.clone());
                }
            }
        }

        record.insert(fields::ID.to_string(), serde_json::to_value(id)?);
        record.insert(
            fields::LAST_UPDATED.to_string(),
            serde_json::to_value(last_updated)?,
        );

        serde_json::from_value(Value::Object(record))
    }

    /// Returns a copy of the record marked as seen at `now`.
    pub fn seen_at(&self, now: DateTime<Utc>, last_updated: DateTime<Utc>) -> Self {
        Self {
            last_seen: Some(now),
            last_updated,
            ..self.clone()
        }
    }
}
