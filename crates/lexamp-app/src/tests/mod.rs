
use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use lexamp_lookup::response::{Entry, HeadwordEntry, LexicalEntry, Sense};
use lexamp_lookup::{DefinitionProvider, LookupError, RetrieveEntry};
use lexamp_types::Session;

use crate::session::run_session;

/// Scripted stand-in for the dictionary service: serves canned documents
/// for known words and a not-found error for everything else.
struct ScriptedProvider {
    entries: HashMap<String, RetrieveEntry>,
}

impl ScriptedProvider {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn with_entry(mut self, word: &str, definitions: &[&str]) -> Self {
        self.entries
            .insert(word.to_string(), single_sense(definitions));
        self
    }
}

#[async_trait]
impl DefinitionProvider for ScriptedProvider {
    async fn definitions(&self, word: &str) -> Result<RetrieveEntry, LookupError> {
        self.entries
            .get(word)
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                word: word.to_string(),
            })
    }
}

/// Document with one lexical entry, one entry, one sense.
fn single_sense(definitions: &[&str]) -> RetrieveEntry {
    RetrieveEntry {
        results: vec![HeadwordEntry {
            lexical_entries: vec![LexicalEntry {
                entries: vec![Entry {
                    senses: vec![Sense {
                        definitions: definitions.iter().map(|d| d.to_string()).collect(),
                    }],
                }],
            }],
        }],
    }
}

/// Run one session against scripted console input, returning the final
/// session and the full transcript written to the console.
async fn run_scripted(
    provider: &ScriptedProvider,
    script: &str,
    export_path: &Path,
) -> (Session, String) {
    let mut input = script.as_bytes();
    let mut output = Vec::new();

    let session = run_session(provider, &mut input, &mut output, export_path)
        .await
        .expect("session failed");

    (session, String::from_utf8(output).expect("output was not utf-8"))
}
