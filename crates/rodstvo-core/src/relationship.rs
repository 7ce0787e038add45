//! Canonical relationship descriptors shared by kinship search and
//! relationship authoring.
//!
//! `RelationshipCode` is the coarse kinship category; `SpecificValue` is
//! the gendered, degree-qualified refinement stored next to it. The
//! string tokens here are exactly what the relationships store persists
//! and what the web client exchanges, so `as_str`, `FromStr`, and the
//! serde forms must stay in lockstep — the tests pin that down.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse a persisted relationship token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("unknown relationship code: {0}")]
    UnknownCode(String),
    #[error("unknown specific value: {0}")]
    UnknownValue(String),
}

/// Coarse kinship category, independent of gender and lineage degree.
///
/// Closed set, fixed at design time; extending it means extending the
/// specific-value vocabulary and the recognition rules with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipCode {
    Parent,
    Child,
    Grandparent,
    Grandchild,
    Sibling,
    AuntUncle,
    NieceNephew,
    Cousin,
}

impl RelationshipCode {
    /// Every code, in vocabulary order.
    pub const ALL: [Self; 8] = [
        Self::Parent,
        Self::Child,
        Self::Grandparent,
        Self::Grandchild,
        Self::Sibling,
        Self::AuntUncle,
        Self::NieceNephew,
        Self::Cousin,
    ];

    /// The persisted token for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Grandparent => "grandparent",
            Self::Grandchild => "grandchild",
            Self::Sibling => "sibling",
            Self::AuntUncle => "aunt_uncle",
            Self::NieceNephew => "niece_nephew",
            Self::Cousin => "cousin",
        }
    }

    /// The code of the same edge read from the other endpoint.
    ///
    /// When a member records "B is my mother", the stored reverse edge
    /// carries the reciprocal code: parent↔child, grandparent↔grandchild,
    /// aunt_uncle↔niece_nephew; sibling and cousin read the same from
    /// both ends.
    pub fn reciprocal(&self) -> Self {
        match self {
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            Self::Grandparent => Self::Grandchild,
            Self::Grandchild => Self::Grandparent,
            Self::Sibling => Self::Sibling,
            Self::AuntUncle => Self::NieceNephew,
            Self::NieceNephew => Self::AuntUncle,
            Self::Cousin => Self::Cousin,
        }
    }

    /// Specific values belonging to this code, in vocabulary order.
    ///
    /// This is what the structured picker offers when free-text
    /// resolution comes back empty.
    pub fn values(&self) -> &'static [SpecificValue] {
        match self {
            Self::Parent => &[SpecificValue::Mother, SpecificValue::Father],
            Self::Child => &[SpecificValue::Son, SpecificValue::Daughter],
            Self::Grandparent => &[SpecificValue::Grandmother, SpecificValue::Grandfather],
            Self::Grandchild => &[SpecificValue::Grandson, SpecificValue::Granddaughter],
            Self::Sibling => &[SpecificValue::Brother, SpecificValue::Sister],
            Self::AuntUncle => &[SpecificValue::Aunt, SpecificValue::Uncle],
            Self::NieceNephew => &[SpecificValue::Nephew, SpecificValue::Niece],
            Self::Cousin => &[
                SpecificValue::CousinM1st,
                SpecificValue::CousinF1st,
                SpecificValue::CousinM2nd,
                SpecificValue::CousinF2nd,
            ],
        }
    }
}

impl fmt::Display for RelationshipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipCode {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(Self::Parent),
            "child" => Ok(Self::Child),
            "grandparent" => Ok(Self::Grandparent),
            "grandchild" => Ok(Self::Grandchild),
            "sibling" => Ok(Self::Sibling),
            "aunt_uncle" => Ok(Self::AuntUncle),
            "niece_nephew" => Ok(Self::NieceNephew),
            "cousin" => Ok(Self::Cousin),
            other => Err(TokenError::UnknownCode(other.to_string())),
        }
    }
}

/// Gender attached to every token in the specific-value vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// The persisted token for this gender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gendered, degree-qualified refinement of a [`RelationshipCode`].
///
/// Each token belongs to exactly one code. Cousin tokens carry the
/// lineage degree: `cousin_m_1st` is a first cousin (male), `cousin_f_2nd`
/// a second cousin (female).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecificValue {
    Mother,
    Father,
    Son,
    Daughter,
    Grandmother,
    Grandfather,
    Grandson,
    Granddaughter,
    Brother,
    Sister,
    Aunt,
    Uncle,
    Nephew,
    Niece,
    #[serde(rename = "cousin_m_1st")]
    CousinM1st,
    #[serde(rename = "cousin_f_1st")]
    CousinF1st,
    #[serde(rename = "cousin_m_2nd")]
    CousinM2nd,
    #[serde(rename = "cousin_f_2nd")]
    CousinF2nd,
}

impl SpecificValue {
    /// Every value, in vocabulary order.
    pub const ALL: [Self; 18] = [
        Self::Mother,
        Self::Father,
        Self::Son,
        Self::Daughter,
        Self::Grandmother,
        Self::Grandfather,
        Self::Grandson,
        Self::Granddaughter,
        Self::Brother,
        Self::Sister,
        Self::Aunt,
        Self::Uncle,
        Self::Nephew,
        Self::Niece,
        Self::CousinM1st,
        Self::CousinF1st,
        Self::CousinM2nd,
        Self::CousinF2nd,
    ];

    /// The persisted token for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mother => "mother",
            Self::Father => "father",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::Grandmother => "grandmother",
            Self::Grandfather => "grandfather",
            Self::Grandson => "grandson",
            Self::Granddaughter => "granddaughter",
            Self::Brother => "brother",
            Self::Sister => "sister",
            Self::Aunt => "aunt",
            Self::Uncle => "uncle",
            Self::Nephew => "nephew",
            Self::Niece => "niece",
            Self::CousinM1st => "cousin_m_1st",
            Self::CousinF1st => "cousin_f_1st",
            Self::CousinM2nd => "cousin_m_2nd",
            Self::CousinF2nd => "cousin_f_2nd",
        }
    }

    /// The code this value belongs to.
    pub fn relationship_code(&self) -> RelationshipCode {
        match self {
            Self::Mother | Self::Father => RelationshipCode::Parent,
            Self::Son | Self::Daughter => RelationshipCode::Child,
            Self::Grandmother | Self::Grandfather => RelationshipCode::Grandparent,
            Self::Grandson | Self::Granddaughter => RelationshipCode::Grandchild,
            Self::Brother | Self::Sister => RelationshipCode::Sibling,
            Self::Aunt | Self::Uncle => RelationshipCode::AuntUncle,
            Self::Nephew | Self::Niece => RelationshipCode::NieceNephew,
            Self::CousinM1st | Self::CousinF1st | Self::CousinM2nd | Self::CousinF2nd => {
                RelationshipCode::Cousin
            }
        }
    }

    /// Gender of the person this value describes.
    pub fn gender(&self) -> Gender {
        match self {
            Self::Mother
            | Self::Daughter
            | Self::Grandmother
            | Self::Granddaughter
            | Self::Sister
            | Self::Aunt
            | Self::Niece
            | Self::CousinF1st
            | Self::CousinF2nd => Gender::Female,
            Self::Father
            | Self::Son
            | Self::Grandfather
            | Self::Grandson
            | Self::Brother
            | Self::Uncle
            | Self::Nephew
            | Self::CousinM1st
            | Self::CousinM2nd => Gender::Male,
        }
    }

    /// Lineage degree for cousin values, `None` for everything else.
    pub fn cousin_degree(&self) -> Option<u8> {
        match self {
            Self::CousinM1st | Self::CousinF1st => Some(1),
            Self::CousinM2nd | Self::CousinF2nd => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for SpecificValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecificValue {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|value| value.as_str() == s)
            .copied()
            .ok_or_else(|| TokenError::UnknownValue(s.to_string()))
    }
}

/// Canonical resolution result: the pair a relationship record stores.
///
/// A value object created fresh per resolution call, owned by the caller,
/// with no identity beyond its two fields. Serialises with the camelCase
/// keys the web client exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedKinship {
    pub relationship_code: RelationshipCode,
    pub specific_value: SpecificValue,
}

impl MappedKinship {
    /// Pair a specific value with the code it belongs to.
    pub fn from_value(specific_value: SpecificValue) -> Self {
        Self {
            relationship_code: specific_value.relationship_code(),
            specific_value,
        }
    }
}
