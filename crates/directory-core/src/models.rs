use serde::{Serialize, Serializer};
use std::fmt;

/// A user record as it arrives from the remote API, before normalization
pub type RawUserRecord = serde_json::Value;

/// Identifier used to key a user in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserId {
    /// Numeric id taken from the source record
    Number(serde_json::Number),
    /// Textual id taken from the source record
    Text(String),
    /// Synthetic id for records without one (1-based position in the response)
    Generated(usize),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => write!(f, "{}", s),
            UserId::Generated(n) => write!(f, "generated-{}", n),
        }
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UserId::Number(n) => n.serialize(serializer),
            UserId::Text(s) => serializer.serialize_str(s),
            UserId::Generated(_) => serializer.collect_str(self),
        }
    }
}

/// Normalized user shown in the directory
///
/// Every field is always populated, either from the source record or with
/// the placeholder configured for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub name: String,
}

impl User {
    /// First character of the name, uppercased, for the card badge
    pub fn initial(&self) -> Option<String> {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }
}
