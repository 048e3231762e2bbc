use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::models::User;

/// Direction of the name ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Short label for the sort control
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "A-Z",
            SortOrder::Desc => "Z-A",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Derive the displayed list from the full list
///
/// An empty `search` keeps every user; otherwise a user is kept when its
/// name, email or username contains the term, ignoring case. The result is
/// always ordered by name. Descending order is the exact reverse of
/// ascending order, ties included.
pub fn filter_and_sort(users: &[User], search: &str, order: SortOrder) -> Vec<User> {
    let mut result: Vec<User> = if search.is_empty() {
        users.to_vec()
    } else {
        let needle = search.to_lowercase();
        users
            .iter()
            .filter(|user| matches_search(user, &needle))
            .cloned()
            .collect()
    };

    let mut collator = Collator::default();
    result.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
    if order == SortOrder::Desc {
        result.reverse();
    }
    result
}

/// Whether a user matches an already-lowercased search term
fn matches_search(user: &User, needle: &str) -> bool {
    [&user.name, &user.email, &user.username]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Locale-aware name comparison (Unicode collation, CLDR root order)
///
/// Accented letters sort with their base letter and case is only a
/// tiebreak, lowercase first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
