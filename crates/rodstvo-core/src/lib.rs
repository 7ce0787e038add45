//! Kinship domain layer: relationship descriptors, label patterns, and per-locale resolvers.

pub mod lexicon;
pub mod locales;
pub mod pattern;
pub mod relationship;

pub use lexicon::{KinshipRule, Lexicon};
pub use locales::{builtin_lexicons, default_lexicon, lexicon_for, resolve};
pub use pattern::{LabelPattern, normalize_label};
pub use relationship::{Gender, MappedKinship, RelationshipCode, SpecificValue, TokenError};
