//! Human-readable rendering for resolver output.
//!
//! Renders a resolution result as a vertical card, and a vocabulary as an
//! aligned rule listing, one row per rule in evaluation order so each row
//! can be audited against what the resolver actually does.

use rodstvo_core::{LabelPattern, Lexicon, MappedKinship, RelationshipCode};

/// Print a resolution result as a vertical card.
pub fn print_resolution(label: &str, lexicon: &Lexicon, mapped: Option<MappedKinship>) {
    println!("=== {} ===", label.trim());
    println!("  {:<19} {} ({})", "locale", lexicon.locale(), lexicon.name());
    match mapped {
        Some(kinship) => {
            println!("  {:<19} {}", "relationship code", kinship.relationship_code);
            println!("  {:<19} {}", "specific value", kinship.specific_value);
            println!("  {:<19} {}", "gender", kinship.specific_value.gender());
            if let Some(degree) = kinship.specific_value.cousin_degree() {
                println!("  {:<19} {}", "cousin degree", degree);
            }
            println!("  {:<19} {}", "reciprocal code", kinship.relationship_code.reciprocal());
        }
        None => {
            println!("  no match; structured picker options:");
            for code in RelationshipCode::ALL {
                let values: Vec<&str> = code.values().iter().map(|v| v.as_str()).collect();
                println!("    {:<13} {}", code.as_str(), values.join(", "));
            }
        }
    }
}

/// Print a lexicon's ordered rule table.
pub fn print_rules(lexicon: &Lexicon) {
    println!("=== {} ({}) ===", lexicon.name(), lexicon.locale());
    println!(
        "{} rules, first match wins; degree markers: {}",
        lexicon.rules().len(),
        lexicon.degree_markers().join(", ")
    );
    println!();

    println!(
        "  {:>3}  {:<7} {:<30} {:<13} {}",
        "#", "style", "patterns", "code", "value"
    );
    for (row, rule) in lexicon.rules().iter().enumerate() {
        println!(
            "  {:>3}  {:<7} {:<30} {:<13} {}",
            row + 1,
            rule.pattern.match_style(),
            pattern_column(&rule.pattern),
            rule.code,
            rule.value
        );
    }
}

/// Print the built-in vocabularies, default first.
pub fn print_locales(lexicons: &[&Lexicon]) {
    println!("Built-in vocabularies:");
    for (i, lexicon) in lexicons.iter().enumerate() {
        println!(
            "  {:<4} {:<10} {:>2} rules{}",
            lexicon.locale(),
            lexicon.name(),
            lexicon.rules().len(),
            if i == 0 { "  (default)" } else { "" }
        );
    }
}

/// Render a rule's pattern strings for one listing row.
///
/// A trailing `*` marks a prefix stem; surrounding `*` marks substring
/// search for the degree marker and gendered term of a marked rule.
fn pattern_column(pattern: &LabelPattern) -> String {
    match pattern {
        LabelPattern::Exact(forms) => forms.join(" | "),
        LabelPattern::Prefix(stems) => stems
            .iter()
            .map(|stem| format!("{stem}*"))
            .collect::<Vec<_>>()
            .join(" | "),
        LabelPattern::Marked { marker, term } => format!("*{marker}* + *{term}*"),
    }
}
