//! Command parsing and dispatch.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use docsage_core::Error;
use docsage_extract::{
    analyze_document, categorize_highlights, detect_important_lines, extract_entities,
};
use docsage_search::{semantic_similarity, similarity, SearchOptions};
use serde_json::{json, Value};

use crate::state::AppState;

pub const USAGE: &str = "\
DocSage: rule-based document intelligence over plain text

Usage: docsage <command> [args]

Commands:
  lines <file> [n]              Rank the n most important sentences
  entities <file>               Extract dates, amounts, definitions, emails, phones, URLs
  highlights <file>             Color-coded definition/date/amount sentences
  classify <file>               Classify the document type
  search <file> <query> [--exact] [--mark]
                                Paragraph search with synonym expansion
  synonyms <term> [max]         Look up synonyms
  synonym-search <file> <query> [max]
                                Synonym list plus synonym-expanded search
  similarity <file-a> <file-b>  TF-IDF cosine similarity of two texts
  keyphrases <file> [n]         Most frequent key phrases
  topics <file> [n]             Key phrases reshaped as topics
  analyze <file>                Run every analysis
  help                          Show this help message

Use '-' as <file> to read from stdin.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lines { input: PathBuf, top_n: Option<usize> },
    Entities { input: PathBuf },
    Highlights { input: PathBuf },
    Classify { input: PathBuf },
    Search { input: PathBuf, query: String, exact: bool, mark: bool },
    Synonyms { term: String, max: Option<usize> },
    SynonymSearch { input: PathBuf, query: String, max: Option<usize> },
    Similarity { first: PathBuf, second: PathBuf },
    Keyphrases { input: PathBuf, top_n: Option<usize> },
    Topics { input: PathBuf, top_n: Option<usize> },
    Analyze { input: PathBuf },
    Help,
}

impl Command {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Self, Error> {
        let Some(name) = args.first() else {
            return Ok(Self::Help);
        };
        let name = name.as_str();
        let args = Arguments::split(&args[1..]);

        let command = match name {
            "lines" => {
                args.expect(name, 2, &[])?;
                Self::Lines {
                    input: args.path(name, 0)?,
                    top_n: args.count(1)?,
                }
            }
            "entities" => {
                args.expect(name, 1, &[])?;
                Self::Entities {
                    input: args.path(name, 0)?,
                }
            }
            "highlights" => {
                args.expect(name, 1, &[])?;
                Self::Highlights {
                    input: args.path(name, 0)?,
                }
            }
            "classify" => {
                args.expect(name, 1, &[])?;
                Self::Classify {
                    input: args.path(name, 0)?,
                }
            }
            "search" => {
                args.expect(name, 2, &["--exact", "--mark"])?;
                Self::Search {
                    input: args.path(name, 0)?,
                    query: args.string(name, 1)?,
                    exact: args.has_flag("--exact"),
                    mark: args.has_flag("--mark"),
                }
            }
            "synonyms" => {
                args.expect(name, 2, &[])?;
                Self::Synonyms {
                    term: args.string(name, 0)?,
                    max: args.count(1)?,
                }
            }
            "synonym-search" => {
                args.expect(name, 3, &[])?;
                Self::SynonymSearch {
                    input: args.path(name, 0)?,
                    query: args.string(name, 1)?,
                    max: args.count(2)?,
                }
            }
            "similarity" => {
                args.expect(name, 2, &[])?;
                Self::Similarity {
                    first: args.path(name, 0)?,
                    second: args.path(name, 1)?,
                }
            }
            "keyphrases" => {
                args.expect(name, 2, &[])?;
                Self::Keyphrases {
                    input: args.path(name, 0)?,
                    top_n: args.count(1)?,
                }
            }
            "topics" => {
                args.expect(name, 2, &[])?;
                Self::Topics {
                    input: args.path(name, 0)?,
                    top_n: args.count(1)?,
                }
            }
            "analyze" => {
                args.expect(name, 1, &[])?;
                Self::Analyze {
                    input: args.path(name, 0)?,
                }
            }
            "help" | "--help" | "-h" => Self::Help,
            other => {
                return Err(Error::InvalidInput(format!(
                    "unknown command: {}. Use 'docsage help' for usage.",
                    other
                )))
            }
        };
        Ok(command)
    }
}

/// Command arguments split into `--flags` and positionals.
///
/// Everything after a bare `--` is positional, so queries may start with dashes.
/// A lone `-` (stdin) is positional.
struct Arguments {
    positional: Vec<String>,
    flags: Vec<String>,
}

impl Arguments {
    fn split(raw: &[String]) -> Self {
        let mut positional = Vec::new();
        let mut flags = Vec::new();
        let mut flags_done = false;
        for arg in raw {
            if flags_done {
                positional.push(arg.clone());
            } else if arg == "--" {
                flags_done = true;
            } else if arg.starts_with("--") {
                flags.push(arg.clone());
            } else {
                positional.push(arg.clone());
            }
        }
        Self { positional, flags }
    }

    /// Reject unknown flags and surplus positionals.
    fn expect(&self, command: &str, max_positional: usize, allowed_flags: &[&str]) -> Result<(), Error> {
        if let Some(unknown) = self
            .flags
            .iter()
            .find(|f| !allowed_flags.contains(&f.as_str()))
        {
            return Err(Error::InvalidInput(format!("{}: unknown flag {}", command, unknown)));
        }
        if self.positional.len() > max_positional {
            return Err(Error::InvalidInput(format!(
                "{}: expected at most {} arguments, got {}",
                command,
                max_positional,
                self.positional.len()
            )));
        }
        Ok(())
    }

    fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    fn string(&self, command: &str, index: usize) -> Result<String, Error> {
        self.positional.get(index).cloned().ok_or_else(|| {
            Error::InvalidInput(format!("{}: missing argument {}", command, index + 1))
        })
    }

    fn path(&self, command: &str, index: usize) -> Result<PathBuf, Error> {
        self.string(command, index).map(PathBuf::from)
    }

    fn count(&self, index: usize) -> Result<Option<usize>, Error> {
        self.positional
            .get(index)
            .map(|raw| {
                raw.parse::<usize>()
                    .map_err(|_| Error::InvalidInput(format!("expected a count, got {:?}", raw)))
            })
            .transpose()
    }
}

/// Read a text file, or stdin for `-`.
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Execute a command and return its JSON output.
pub fn run(state: &AppState, command: &Command) -> anyhow::Result<Value> {
    let config = &state.config;
    let value = match command {
        Command::Lines { input, top_n } => {
            let text = read_input(input)?;
            let lines = detect_important_lines(&text, top_n.unwrap_or(config.top_lines));
            json!({ "important_lines": lines, "count": lines.len() })
        }
        Command::Entities { input } => serde_json::to_value(extract_entities(&read_input(input)?))?,
        Command::Highlights { input } => {
            serde_json::to_value(categorize_highlights(&read_input(input)?))?
        }
        Command::Classify { input } => {
            serde_json::to_value(state.classifier.classify(&read_input(input)?))?
        }
        Command::Search {
            input,
            query,
            exact,
            mark,
        } => {
            let text = read_input(input)?;
            let options = SearchOptions {
                include_synonyms: !exact,
                highlight_paragraphs: *mark,
            };
            serde_json::to_value(state.search.search(&text, query, options))?
        }
        Command::Synonyms { term, max } => {
            let synonyms = state
                .search
                .synonyms()
                .get_synonyms(term, max.unwrap_or(config.max_synonyms));
            json!({
                "term": term,
                "known": state.search.synonyms().contains(term),
                "synonyms": synonyms,
            })
        }
        Command::SynonymSearch { input, query, max } => {
            let text = read_input(input)?;
            let result = state.search.synonym_search(
                &text,
                query,
                max.unwrap_or(config.max_synonyms),
            );
            serde_json::to_value(result)?
        }
        Command::Similarity { first, second } => {
            let (a, b) = (read_input(first)?, read_input(second)?);
            json!({
                "similarity": semantic_similarity(&a, &b),
                "outcome": similarity(&a, &b),
            })
        }
        Command::Keyphrases { input, top_n } => {
            let text = read_input(input)?;
            let phrases = state
                .keyphrases
                .extract(&text, top_n.unwrap_or(config.keyphrase_count));
            json!({
                "keyphrases": phrases,
                "count": phrases.len(),
                "backend": state.keyphrases.capability(),
            })
        }
        Command::Topics { input, top_n } => {
            let text = read_input(input)?;
            let topics =
                docsage_extract::extract_topics(state.keyphrases.as_ref(), &text, top_n.unwrap_or(5));
            json!({ "topics": topics, "count": topics.len() })
        }
        Command::Analyze { input } => {
            let text = read_input(input)?;
            serde_json::to_value(analyze_document(&text, config, state.keyphrases.as_ref()))?
        }
        Command::Help => json!({ "usage": USAGE }),
    };
    Ok(value)
}
