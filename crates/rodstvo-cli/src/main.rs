use clap::{Parser, Subcommand};
use rodstvo_core::{Lexicon, MappedKinship};
use serde_json::json;
use tracing::debug;

mod display;

#[derive(Parser)]
#[command(name = "rodstvo", version)]
#[command(about = "Kinship label resolution tooling for Rodstvo")]
struct Cli {
    /// Locale tag of the vocabulary to resolve against.
    #[arg(long, global = true, env = "RODSTVO_LOCALE", default_value = "ru")]
    locale: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a free-text kinship label to its canonical descriptor.
    Resolve {
        /// The label as typed, e.g. "двоюродный брат".
        label: String,
        /// Print the result as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },
    /// Print the ordered rule table of a vocabulary.
    Rules,
    /// List the built-in vocabularies.
    Locales,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resolve { label, json } => {
            let lexicon = vocabulary(&cli.locale)?;
            let mapped = lexicon.resolve(&label);
            debug!(
                locale = lexicon.locale(),
                recognised = mapped.is_some(),
                "label resolved"
            );
            if json {
                let payload = resolve_payload(&label, lexicon, mapped);
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                display::print_resolution(&label, lexicon, mapped);
            }
        }
        Commands::Rules => {
            let lexicon = vocabulary(&cli.locale)?;
            debug!(
                locale = lexicon.locale(),
                rules = lexicon.rules().len(),
                "rule table requested"
            );
            display::print_rules(lexicon);
        }
        Commands::Locales => display::print_locales(rodstvo_core::builtin_lexicons()),
    }
    Ok(())
}

/// Look up the vocabulary for a locale tag.
///
/// An unknown tag is a real error, unlike an unrecognised label, and the
/// message names the tags that would have worked.
fn vocabulary(locale: &str) -> anyhow::Result<&'static Lexicon> {
    rodstvo_core::lexicon_for(locale).ok_or_else(|| {
        let available: Vec<&str> = rodstvo_core::builtin_lexicons()
            .iter()
            .map(|lexicon| lexicon.locale())
            .collect();
        anyhow::anyhow!(
            "no built-in vocabulary for locale '{locale}' (available: {})",
            available.join(", ")
        )
    })
}

/// The JSON body for `resolve --json`: the raw label, the locale it was
/// resolved against, and the descriptor or `null`.
fn resolve_payload(
    label: &str,
    lexicon: &Lexicon,
    mapped: Option<MappedKinship>,
) -> serde_json::Value {
    json!({
        "label": label,
        "locale": lexicon.locale(),
        "kinship": mapped,
    })
}
