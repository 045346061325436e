use std::io::Write;
use std::path::Path;

use anyhow::Result;
use lexamp_export::write_workbook;
use lexamp_lookup::{DefinitionProvider, extract_definitions};
use lexamp_types::{Session, WordQuery};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::report::render_session;

pub const WORD_PROMPT: &str = "Please enter the word you would like to define: ";
pub const ANOTHER_PROMPT: &str =
    "Would you like to define another word? Type 'yes' if so or press any key to quit: ";
pub const SUMMARY_PROMPT: &str = "Would you like a full list of the queried words and their definitions before exiting? Type 'yes' if so or press any key to quit: ";
pub const EXPORT_PROMPT: &str = "Would you like to export the list as an Excel (.xlsx) file as well? Type 'yes' if so or press any key to simply print a list to the screen before exiting: ";
pub const NOT_FOUND: &str = "Word not found!";
pub const EXPORT_DONE: &str = "Your Excel file has been saved to the same folder this app was run from.";

/// Position in the prompt sequence.
enum Stage {
    AskWord,
    Define(String),
    AskAnother,
    AskSummary,
    AskExport,
    Export,
    Done,
}

/// Drive one interactive session: prompt for words, look each one up, and
/// offer a printed summary and a spreadsheet export on the way out.
///
/// Lookup and export failures are reported on `output` and never end the
/// session. The accumulated session is returned for inspection.
pub async fn run_session<P, R, W>(
    provider: &P,
    input: &mut R,
    output: &mut W,
    export_path: &Path,
) -> Result<Session>
where
    P: DefinitionProvider + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::new();
    let mut stage = Stage::AskWord;

    loop {
        stage = match stage {
            Stage::AskWord => {
                let word = prompt_line(input, output, WORD_PROMPT).await?;
                Stage::Define(word)
            }
            Stage::Define(word) => {
                define_word(provider, output, &mut session, &word).await?;
                Stage::AskAnother
            }
            Stage::AskAnother => {
                let answer = prompt_line(input, output, ANOTHER_PROMPT).await?;
                if is_yes(&answer) {
                    Stage::AskWord
                } else {
                    Stage::AskSummary
                }
            }
            Stage::AskSummary => {
                let answer = prompt_line(input, output, SUMMARY_PROMPT).await?;
                if is_yes(&answer) {
                    Stage::AskExport
                } else {
                    Stage::Done
                }
            }
            Stage::AskExport => {
                // The summary is printed whether or not the export was
                // requested.
                let answer = prompt_line(input, output, EXPORT_PROMPT).await?;
                output.write_all(render_session(&session).as_bytes())?;
                if is_yes(&answer) {
                    Stage::Export
                } else {
                    Stage::Done
                }
            }
            Stage::Export => {
                match write_workbook(session.records(), export_path) {
                    Ok(()) => writeln!(output, "{EXPORT_DONE}")?,
                    Err(e) => writeln!(output, "{e}")?,
                }
                Stage::Done
            }
            Stage::Done => break,
        };
    }

    Ok(session)
}

/// Look up one word and record it if any definitions came back. Failures
/// are reduced to a "not found" notice; the cause is logged.
async fn define_word<P, W>(
    provider: &P,
    output: &mut W,
    session: &mut Session,
    word: &str,
) -> Result<()>
where
    P: DefinitionProvider + ?Sized,
    W: Write,
{
    match fetch_definitions(provider, word).await {
        Ok(definitions) => {
            for definition in &definitions {
                writeln!(output, "- {definition}")?;
            }
            session.append(WordQuery {
                word: word.to_string(),
                definitions,
            });
        }
        Err(e) => {
            tracing::debug!("Lookup for '{}' failed: {}", word, e);
            writeln!(output, "{NOT_FOUND}")?;
        }
    }

    Ok(())
}

async fn fetch_definitions<P>(provider: &P, word: &str) -> Result<Vec<String>>
where
    P: DefinitionProvider + ?Sized,
{
    let response = provider.definitions(word).await?;
    let definitions = extract_definitions(&response)?;
    Ok(definitions)
}

async fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).await?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
