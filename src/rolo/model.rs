use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier assigned by the remote API on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for ContactId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// Relationship category of a contact. The code (serde/CLI form) and the
/// display label live here so list and detail rendering share one mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Me,
    Friend,
    Family,
    Colleague,
    Client,
    Other,
}

impl Relationship {
    pub const ALL: [Relationship; 6] = [
        Relationship::Me,
        Relationship::Friend,
        Relationship::Family,
        Relationship::Colleague,
        Relationship::Client,
        Relationship::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Relationship::Me => "me",
            Relationship::Friend => "friend",
            Relationship::Family => "family",
            Relationship::Colleague => "colleague",
            Relationship::Client => "client",
            Relationship::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Me => "Me",
            Relationship::Friend => "Friend",
            Relationship::Family => "Family",
            Relationship::Colleague => "Colleague",
            Relationship::Client => "Client",
            Relationship::Other => "Other",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relationship::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| {
                format!(
                    "unknown relationship '{}' (expected me, friend, family, colleague, client or other)",
                    s
                )
            })
    }
}

/// The editable fields of a contact, without the server-assigned id.
/// Field names follow the remote API's JSON; optional text fields travel
/// as empty strings and the birthday as "" or YYYY-MM-DD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub country: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default, with = "date_field")]
    pub birthday: Option<NaiveDate>,
    pub relationship: Relationship,
    #[serde(default)]
    pub notes: String,
}

impl ContactValues {
    pub fn social_links(&self) -> [(&'static str, &str); 5] {
        [
            ("Facebook", self.facebook.as_str()),
            ("WhatsApp", self.whatsapp.as_str()),
            ("Twitter", self.twitter.as_str()),
            ("Instagram", self.instagram.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
        ]
    }

    pub fn has_social_links(&self) -> bool {
        self.social_links().iter().any(|(_, url)| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    #[serde(flatten)]
    pub values: ContactValues,
}

/// Bridge between `Option<NaiveDate>` and the wire's ""-or-ISO-date strings.
mod date_field {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Some)
                .map_err(de::Error::custom),
        }
    }
}
