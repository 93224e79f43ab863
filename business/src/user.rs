//! User records as served by the users endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// One user's profile.
///
/// Only `id` is required when decoding. Missing or `null` strings become empty
/// and missing nested objects become `None`, so a sparse record renders with blank cells
/// instead of failing the whole response. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub website: String,
    #[serde(default)]
    pub company: Option<Company>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserRecord {
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref()?.city.as_deref()
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref()?.name.as_deref()
    }
}
