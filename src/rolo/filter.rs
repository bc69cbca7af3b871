//! Pure, client-side filtering of the contact collection. Both filters are
//! recomputed from the current controls on every call and never touch the
//! store.

use std::fmt;
use std::str::FromStr;

use crate::model::{Contact, Relationship};

/// Relationship category control; `All` is the sentinel that disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Is(Relationship),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Is(relationship) => f.write_str(relationship.code()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Relationship>()
            .map(CategoryFilter::Is)
            .map_err(|_| {
                format!(
                    "unknown category '{}' (expected all, me, friend, family, colleague, client or other)",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub category: CategoryFilter,
    pub query: Option<String>,
}

/// Category first, then free-text over name, email OR phone,
/// case-insensitively. A contact passes the text filter if the query is
/// found in any one of the three.
pub fn apply<'a>(contacts: &'a [Contact], filter: &ContactFilter) -> Vec<&'a Contact> {
    let query = filter.query.as_deref().map(str::to_lowercase);

    contacts
        .iter()
        .filter(|contact| match filter.category {
            CategoryFilter::All => true,
            CategoryFilter::Is(relationship) => contact.values.relationship == relationship,
        })
        .filter(|contact| match &query {
            None => true,
            Some(query) => {
                contact.values.name.to_lowercase().contains(query)
                    || contact.values.email.to_lowercase().contains(query)
                    || contact.values.phone.to_lowercase().contains(query)
            }
        })
        .collect()
}
