//! Built-in kinship vocabularies and the locale registry.
//!
//! The tables are data: every row pairs a label pattern with the
//! descriptor it resolves to, in evaluation order. Exact rows come
//! first, then the degree-marked cousin rows, then the broad prefix
//! rows, so a wide pattern can never shadow a narrower one.

use tracing::debug;

use crate::lexicon::{KinshipRule, Lexicon};
use crate::pattern::LabelPattern::{self, Exact, Marked, Prefix};
use crate::relationship::{MappedKinship, RelationshipCode as Code, SpecificValue as Value};

const fn rule(pattern: LabelPattern, code: Code, value: Value) -> KinshipRule {
    KinshipRule {
        pattern,
        code,
        value,
    }
}

/// Reference vocabulary: Russian, the platform's launch locale.
#[rustfmt::skip]
const RU_RULES: &[KinshipRule] = &[
    // Exact, unambiguous labels first.
    rule(Exact(&["мама", "мать"]), Code::Parent, Value::Mother),
    rule(Exact(&["папа", "отец"]), Code::Parent, Value::Father),
    rule(Exact(&["брат", "родной брат"]), Code::Sibling, Value::Brother),
    rule(Exact(&["сестра", "родная сестра"]), Code::Sibling, Value::Sister),
    // Degree-qualified cousins. The marker is inflected, so it is looked
    // for anywhere in the phrase.
    rule(Marked { marker: "двоюродн", term: "брат" }, Code::Cousin, Value::CousinM1st),
    rule(Marked { marker: "двоюродн", term: "сестр" }, Code::Cousin, Value::CousinF1st),
    rule(Marked { marker: "троюродн", term: "брат" }, Code::Cousin, Value::CousinM2nd),
    rule(Marked { marker: "троюродн", term: "сестр" }, Code::Cousin, Value::CousinF2nd),
    // Broad prefix rows: trailing qualifiers are tolerated.
    rule(Prefix(&["сын"]), Code::Child, Value::Son),
    rule(Prefix(&["доч"]), Code::Child, Value::Daughter),
    rule(Prefix(&["бабушк", "бабул"]), Code::Grandparent, Value::Grandmother),
    rule(Prefix(&["дед"]), Code::Grandparent, Value::Grandfather),
    rule(Prefix(&["внук"]), Code::Grandchild, Value::Grandson),
    rule(Prefix(&["внучк"]), Code::Grandchild, Value::Granddaughter),
    rule(Prefix(&["тёт"]), Code::AuntUncle, Value::Aunt),
    rule(Prefix(&["дяд"]), Code::AuntUncle, Value::Uncle),
    rule(Prefix(&["племянник"]), Code::NieceNephew, Value::Nephew),
    rule(Prefix(&["племянниц"]), Code::NieceNephew, Value::Niece),
];

const RU_DEGREE_MARKERS: &[&str] = &["двоюродн", "троюродн"];

/// English vocabulary. Cousin tokens are gendered and English "cousin"
/// is not, so only explicitly gendered cousin phrases resolve; the rest
/// stay unrecognised for the caller's structured fallback.
#[rustfmt::skip]
const EN_RULES: &[KinshipRule] = &[
    rule(Exact(&["mother", "mom"]), Code::Parent, Value::Mother),
    rule(Exact(&["father", "dad"]), Code::Parent, Value::Father),
    rule(Exact(&["brother", "full brother"]), Code::Sibling, Value::Brother),
    rule(Exact(&["sister", "full sister"]), Code::Sibling, Value::Sister),
    // "second cousin" contains "cousin", and "female" contains "male":
    // the narrower rows must sit above the rows they would otherwise
    // feed.
    rule(Marked { marker: "second cousin", term: "female" }, Code::Cousin, Value::CousinF2nd),
    rule(Marked { marker: "second cousin", term: "male" }, Code::Cousin, Value::CousinM2nd),
    rule(Marked { marker: "cousin", term: "female" }, Code::Cousin, Value::CousinF1st),
    rule(Marked { marker: "cousin", term: "male" }, Code::Cousin, Value::CousinM1st),
    rule(Prefix(&["son"]), Code::Child, Value::Son),
    rule(Prefix(&["daughter"]), Code::Child, Value::Daughter),
    rule(Prefix(&["grandmother", "grandma"]), Code::Grandparent, Value::Grandmother),
    rule(Prefix(&["grandfather", "grandpa"]), Code::Grandparent, Value::Grandfather),
    rule(Prefix(&["grandson"]), Code::Grandchild, Value::Grandson),
    rule(Prefix(&["granddaughter"]), Code::Grandchild, Value::Granddaughter),
    rule(Prefix(&["aunt"]), Code::AuntUncle, Value::Aunt),
    rule(Prefix(&["uncle"]), Code::AuntUncle, Value::Uncle),
    rule(Prefix(&["nephew"]), Code::NieceNephew, Value::Nephew),
    rule(Prefix(&["niece"]), Code::NieceNephew, Value::Niece),
];

const EN_DEGREE_MARKERS: &[&str] = &["cousin"];

static RU: Lexicon = Lexicon::new("ru", "Russian", RU_RULES, RU_DEGREE_MARKERS);
static EN: Lexicon = Lexicon::new("en", "English", EN_RULES, EN_DEGREE_MARKERS);

/// Built-in lexicons, default locale first.
static BUILTIN: &[&Lexicon] = &[&RU, &EN];

/// All built-in lexicons, default first.
pub fn builtin_lexicons() -> &'static [&'static Lexicon] {
    BUILTIN
}

/// The default lexicon (the Russian reference vocabulary).
pub fn default_lexicon() -> &'static Lexicon {
    BUILTIN[0]
}

/// Look up a built-in lexicon by locale tag, ASCII case-insensitively.
pub fn lexicon_for(locale: &str) -> Option<&'static Lexicon> {
    let tag = locale.trim();
    let found = BUILTIN
        .iter()
        .copied()
        .find(|lexicon| lexicon.locale().eq_ignore_ascii_case(tag));
    if found.is_none() {
        debug!(locale = tag, "no built-in lexicon for locale");
    }
    found
}

/// Resolve a kinship label against the default (Russian) vocabulary.
///
/// Convenience for callers that predate the per-locale lexicons.
pub fn resolve(label: &str) -> Option<MappedKinship> {
    default_lexicon().resolve(label)
}
