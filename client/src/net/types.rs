//! Wire types for the `/login` and `/signup` endpoints.
//!
//! DESIGN
//! ======
//! The user object returned on success is opaque to the form: it is kept as
//! raw JSON and handed to the parent unchanged. Error bodies only promise a
//! `message` member; anything else is preserved alongside it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One input of the authentication form.
///
/// The serialized name doubles as the JSON key in [`FormValues`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// HTML `name` attribute and JSON key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Request body for both endpoints. All three members are always sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// Authenticated user as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthUser(pub serde_json::Value);

impl AuthUser {
    /// Best-effort label for greeting the user.
    pub fn display_name(&self) -> Option<&str> {
        ["name", "username"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(serde_json::Value::as_str))
    }
}

/// Error body of a non-2xx response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerError {
    pub message: String,
    /// Any other members the server sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ServerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), extra: serde_json::Map::new() }
    }
}
