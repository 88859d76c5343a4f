//! Named-entity vocabulary
//!
//! The fixed set of entity types the relation extractor iterates over.
//! The declaration order is the output order of extracted relations.

use serde::{Deserialize, Serialize};

/// Entity types recognized by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Person,
    Norp,
    Facility,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
}

impl EntityType {
    /// Every entity type, in vocabulary order
    pub const ALL: [EntityType; 18] = [
        Self::Person,
        Self::Norp,
        Self::Facility,
        Self::Org,
        Self::Gpe,
        Self::Loc,
        Self::Product,
        Self::Event,
        Self::WorkOfArt,
        Self::Law,
        Self::Language,
        Self::Date,
        Self::Time,
        Self::Percent,
        Self::Money,
        Self::Quantity,
        Self::Ordinal,
        Self::Cardinal,
    ];

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Norp => "NORP",
            Self::Facility => "FACILITY",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Product => "PRODUCT",
            Self::Event => "EVENT",
            Self::WorkOfArt => "WORK_OF_ART",
            Self::Law => "LAW",
            Self::Language => "LANGUAGE",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Percent => "PERCENT",
            Self::Money => "MONEY",
            Self::Quantity => "QUANTITY",
            Self::Ordinal => "ORDINAL",
            Self::Cardinal => "CARDINAL",
        }
    }

    /// Parse a parser entity label
    ///
    /// Newer parser models label facilities `FAC`; both spellings map to
    /// [`EntityType::Facility`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "FAC" => Some(Self::Facility),
            _ => Self::ALL.into_iter().find(|t| t.as_str() == label),
        }
    }

    /// Whether a raw token label belongs to this type
    pub fn matches(&self, label: &str) -> bool {
        Self::from_label(label) == Some(*self)
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
