//! Field mapping from raw API records to the normalized [`User`] shape
//!
//! Each target field has an ordered list of candidate source paths. The
//! first candidate that resolves to a present value wins; when none does,
//! the field takes its literal default. Paths are dotted (`address.city`)
//! and descend into nested objects.
//!
//! A value is present when it is a string, number or boolean. `null`,
//! objects, arrays and missing keys fall through to the next candidate.
//! An empty string is present and is kept as-is.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Address, Company, RawUserRecord, User, UserId};

/// Candidate source fields and fallback for one text field
///
/// Both keys are required when a rule is deserialized on its own. Config
/// files may leave `default` out because the config layer merges them over
/// the built-in rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub candidates: Vec<String>,
    pub default: String,
}

impl FieldRule {
    pub fn new(candidates: &[&str], default: &str) -> Self {
        Self {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            default: default.to_string(),
        }
    }

    fn resolve(&self, raw: &RawUserRecord) -> String {
        self.candidates
            .iter()
            .find_map(|path| lookup(raw, path).and_then(scalar_text))
            .unwrap_or_else(|| self.default.clone())
    }
}

/// Candidate source fields for the identifier
///
/// Records without any candidate get [`UserId::Generated`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRule {
    pub candidates: Vec<String>,
}

impl IdRule {
    fn resolve(&self, raw: &RawUserRecord, position: usize) -> UserId {
        self.candidates
            .iter()
            .find_map(|path| match lookup(raw, path)? {
                Value::Number(n) => Some(UserId::Number(n.clone())),
                Value::String(s) => Some(UserId::Text(s.clone())),
                Value::Bool(b) => Some(UserId::Text(b.to_string())),
                _ => None,
            })
            .unwrap_or(UserId::Generated(position))
    }
}

/// Mapping table for every field of [`User`]
///
/// Deserializes from partial input: fields left out keep the built-in rule.
/// A rule that is given must be complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    pub id: IdRule,
    pub name: FieldRule,
    pub username: FieldRule,
    pub email: FieldRule,
    pub phone: FieldRule,
    pub city: FieldRule,
    pub company: FieldRule,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            id: IdRule {
                candidates: vec!["id".to_string(), "userId".to_string()],
            },
            name: FieldRule::new(&["name", "fullName"], "Unknown"),
            username: FieldRule::new(&["username", "userName"], ""),
            email: FieldRule::new(&["email", "emailAddress"], "N/A"),
            phone: FieldRule::new(&["phone", "mobile"], "N/A"),
            city: FieldRule::new(&["address.city", "city"], "Unknown"),
            company: FieldRule::new(&["company.name", "companyName"], "Unknown"),
        }
    }
}

impl FieldMapping {
    /// Normalize one raw record
    ///
    /// `position` is the record's 1-based position in the response and only
    /// feeds the generated id of records that carry none.
    pub fn normalize(&self, raw: &RawUserRecord, position: usize) -> User {
        User {
            id: self.id.resolve(raw, position),
            name: self.name.resolve(raw),
            username: self.username.resolve(raw),
            email: self.email.resolve(raw),
            phone: self.phone.resolve(raw),
            address: Address {
                city: self.city.resolve(raw),
            },
            company: Company {
                name: self.company.resolve(raw),
            },
        }
    }

    /// Normalize a whole response, preserving order
    pub fn normalize_all(&self, records: &[RawUserRecord]) -> Vec<User> {
        records
            .iter()
            .enumerate()
            .map(|(index, raw)| self.normalize(raw, index + 1))
            .collect()
    }
}

fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(raw, |current, key| current.as_object()?.get(key))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_take_placeholders() {
        let raw = json!({"id": 1, "name": "Bob", "email": "b@x.com"});

        let user = FieldMapping::default().normalize(&raw, 1);

        assert_eq!(user.id, UserId::Number(1.into()));
        assert_eq!(user.name, "Bob");
        assert_eq!(user.username, "");
        assert_eq!(user.email, "b@x.com");
        assert_eq!(user.phone, "N/A");
        assert_eq!(user.address.city, "Unknown");
        assert_eq!(user.company.name, "Unknown");
    }

    #[test]
    fn test_normalized_json_shape() {
        let raw = json!({"id": 1, "name": "Bob", "email": "b@x.com"});

        let user = FieldMapping::default().normalize(&raw, 1);

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "id": 1,
                "name": "Bob",
                "username": "",
                "email": "b@x.com",
                "phone": "N/A",
                "address": {"city": "Unknown"},
                "company": {"name": "Unknown"}
            })
        );
    }

    #[test]
    fn test_fallback_candidates_are_used() {
        let raw = json!({
            "userId": "u-9",
            "fullName": "Ann Lee",
            "userName": "ann",
            "emailAddress": "ann@example.com",
            "mobile": "555-0100",
            "city": "Lisbon",
            "companyName": "Acme"
        });

        let user = FieldMapping::default().normalize(&raw, 4);

        assert_eq!(user.id, UserId::Text("u-9".to_string()));
        assert_eq!(user.name, "Ann Lee");
        assert_eq!(user.username, "ann");
        assert_eq!(user.email, "ann@example.com");
        assert_eq!(user.phone, "555-0100");
        assert_eq!(user.address.city, "Lisbon");
        assert_eq!(user.company.name, "Acme");
    }

    #[test]
    fn test_primary_candidate_wins_over_fallback() {
        let raw = json!({
            "name": "Primary",
            "fullName": "Fallback",
            "address": {"city": "Gwenborough"},
            "city": "Elsewhere",
            "company": {"name": "Romaguera-Crona"},
            "companyName": "Other"
        });

        let user = FieldMapping::default().normalize(&raw, 1);

        assert_eq!(user.name, "Primary");
        assert_eq!(user.address.city, "Gwenborough");
        assert_eq!(user.company.name, "Romaguera-Crona");
    }

    #[test]
    fn test_null_falls_through_but_empty_string_is_kept() {
        let raw = json!({"name": null, "fullName": "From Fallback", "username": "", "userName": "x"});

        let user = FieldMapping::default().normalize(&raw, 1);

        assert_eq!(user.name, "From Fallback");
        assert_eq!(user.username, "");
    }

    #[test]
    fn test_scalars_are_rendered_as_text() {
        let raw = json!({"phone": 5550100, "name": true});

        let user = FieldMapping::default().normalize(&raw, 1);

        assert_eq!(user.phone, "5550100");
        assert_eq!(user.name, "true");
    }

    #[test]
    fn test_nested_object_is_not_a_value() {
        // "address" being a string or an object without city must not leak through
        let raw = json!({"address": "Main St", "company": {"catchPhrase": "x"}});

        let user = FieldMapping::default().normalize(&raw, 1);

        assert_eq!(user.address.city, "Unknown");
        assert_eq!(user.company.name, "Unknown");
    }

    #[test]
    fn test_missing_id_is_generated_from_position() {
        let records = vec![json!({"name": "A"}), json!({"id": 10, "name": "B"}), json!({"name": "C"})];

        let users = FieldMapping::default().normalize_all(&records);

        assert_eq!(users[0].id, UserId::Generated(1));
        assert_eq!(users[1].id, UserId::Number(10.into()));
        assert_eq!(users[2].id, UserId::Generated(3));
    }

    #[test]
    fn test_non_object_record_gets_all_defaults() {
        let user = FieldMapping::default().normalize(&json!(42), 2);

        assert_eq!(user.id, UserId::Generated(2));
        assert_eq!(user.name, "Unknown");
        assert_eq!(user.username, "");
        assert_eq!(user.email, "N/A");
    }

    #[test]
    fn test_normalize_does_not_mutate_input() {
        let raw = json!({"id": 1, "fullName": "Bob"});
        let before = raw.clone();

        let _ = FieldMapping::default().normalize(&raw, 1);

        assert_eq!(raw, before);
    }

    #[test]
    fn test_custom_mapping_for_other_api_shape() {
        let mapping = FieldMapping {
            id: IdRule {
                candidates: vec!["uuid".to_string()],
            },
            name: FieldRule::new(&["profile.displayName"], "Anonymous"),
            ..FieldMapping::default()
        };
        let raw = json!({"uuid": "abc", "profile": {"displayName": "Zed"}});

        let user = mapping.normalize(&raw, 1);

        assert_eq!(user.id, UserId::Text("abc".to_string()));
        assert_eq!(user.name, "Zed");

        let anonymous = mapping.normalize(&json!({}), 1);
        assert_eq!(anonymous.name, "Anonymous");
    }

    #[test]
    fn test_partial_mapping_deserializes_over_defaults() {
        let mapping: FieldMapping = serde_json::from_value(json!({
            "email": {"candidates": ["mail"], "default": "none"}
        }))
        .unwrap();

        assert_eq!(mapping.email, FieldRule::new(&["mail"], "none"));
        assert_eq!(mapping.name, FieldMapping::default().name);
    }

    #[test]
    fn test_rule_without_default_is_rejected() {
        let result = serde_json::from_value::<FieldMapping>(json!({
            "name": {"candidates": ["x"]}
        }));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing field `default`"));
    }
}
