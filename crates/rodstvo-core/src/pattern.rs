//! Label normalisation and match patterns for kinship phrases.
//!
//! A raw label goes through exactly two steps before rule matching: trim
//! and Unicode lowercasing. Nothing else — no diacritic folding (ё stays
//! ё), no pluralisation, no collapsing of inner whitespace. A phrase
//! outside the expected orthography fails to match instead of being
//! guessed at.

/// Normalise a raw kinship label for matching.
///
/// Input: free text as typed, e.g. "  ТЁТЯ  " or "Двоюродный Брат".
/// Output: trimmed, lowercased string: "тётя", "двоюродный брат".
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// How one rule matches a normalised label.
///
/// Pattern strings are stored pre-normalised (trimmed, lowercase); the
/// vocabulary tables are audited for that in their own tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPattern {
    /// The label equals one of the listed surface forms.
    Exact(&'static [&'static str]),
    /// The label starts with one of the listed stems. Trailing qualifiers
    /// are tolerated ("дочь моя" still reads as a daughter).
    Prefix(&'static [&'static str]),
    /// A lineage-degree marker and a gendered term both occur anywhere in
    /// the label. Substring search, because the marker is inflected and
    /// may sit mid-phrase ("троюродная сестра", "сестра двоюродная").
    Marked {
        marker: &'static str,
        term: &'static str,
    },
}

impl LabelPattern {
    /// Test this pattern against an already-normalised label.
    pub fn matches(&self, label: &str) -> bool {
        match self {
            Self::Exact(forms) => forms.iter().any(|form| label == *form),
            Self::Prefix(stems) => stems.iter().any(|stem| label.starts_with(stem)),
            Self::Marked { marker, term } => label.contains(marker) && label.contains(term),
        }
    }

    /// Short name of the match style, for rule listings.
    pub fn match_style(&self) -> &'static str {
        match self {
            Self::Exact(_) => "exact",
            Self::Prefix(_) => "prefix",
            Self::Marked { .. } => "marked",
        }
    }
}
