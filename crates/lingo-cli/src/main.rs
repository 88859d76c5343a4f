//! Lingo CLI - Command-line interface
//!
//! Usage:
//!   lingo parse <sentence> [--fixtures <file>]
//!   lingo relations <file>
//!   lingo spell <sentence>
//!   lingo word <word> [--pos <pos>]
//!   lingo serve [--host <host>] [--port <port>]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lingo_api::handlers::spellcheck::SpellcheckResponse;
use lingo_core::config::AppConfig;
use lingo_core::{PartOfSpeech, SentenceParser, SpellChecker};
use lingo_extractor::{analyze, merge_spans, DependencyPatternRe, Relation, RelationExtractor};
use lingo_lexicon::{lookup_word, FrequencySpeller, LexiconSentiment, WordNet};
use lingo_parser::{FixtureParser, RemoteParser};

#[derive(Parser)]
#[command(name = "lingo")]
#[command(about = "Dependency-parse analysis, spelling and WordNet lookup")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "LINGO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a sentence and print relations, sentences and entities
    Parse {
        /// Text to analyse
        sentence: String,

        /// Answer from saved parses instead of the parser service
        #[arg(long)]
        fixtures: Option<PathBuf>,
    },
    /// Extract relations from saved parser output
    Relations {
        /// Wire document, or JSON array of wire documents
        file: PathBuf,
    },
    /// Correct the spelling of a sentence
    Spell {
        sentence: String,
    },
    /// Look up every sense of a word
    Word {
        word: String,

        /// Part of speech filter: n, v, a, s or r
        #[arg(long)]
        pos: Option<PartOfSpeech>,
    },
    /// Run the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Serialize)]
struct DocumentRelations<'a> {
    text: &'a str,
    relations: Vec<Relation>,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON
fn init_cli_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{},lingo=info", config.logging.level).into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if matches!(cli.command, Commands::Serve { .. }) {
        lingo_api::init_tracing(&config.logging);
    } else {
        init_cli_tracing(&config);
    }

    match cli.command {
        Commands::Parse { sentence, fixtures } => {
            let parser: Box<dyn SentenceParser> = match fixtures {
                Some(path) => Box::new(FixtureParser::from_path(&path)?),
                None => Box::new(RemoteParser::connect(&config.parser).await?),
            };
            let sentiment = LexiconSentiment::from_path(&config.lexicon.sentiment_path)?;

            let doc = parser.parse(&sentence).await?;
            print_json(&analyze(&doc, &DependencyPatternRe, &sentiment))?;
        }
        Commands::Relations { file } => {
            let parses = FixtureParser::from_path(&file)
                .with_context(|| format!("loading parses from {}", file.display()))?;

            let extractor = DependencyPatternRe;
            let output: Vec<DocumentRelations> = parses
                .documents()
                .map(|(text, doc)| {
                    let relations = extractor.extract(&merge_spans(doc));
                    debug!("{} relations in {text:?}", relations.len());
                    DocumentRelations { text, relations }
                })
                .collect();
            print_json(&output)?;
        }
        Commands::Spell { sentence } => {
            let speller = FrequencySpeller::from_path(&config.lexicon.spelling_path)?;
            let corrected = speller.correct(&sentence);
            print_json(&SpellcheckResponse {
                correct: corrected == sentence,
                original: sentence,
                corrected,
            })?;
        }
        Commands::Word { word, pos } => {
            let wordnet = WordNet::from_path(&config.lexicon.wordnet_path)?;
            print_json(&lookup_word(&wordnet, &word, pos))?;
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            lingo_api::serve(config).await?;
        }
    }

    Ok(())
}
