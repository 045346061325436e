use crate::response::RetrieveEntry;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("response contained no results")]
    NoResults,

    #[error("headword has no lexical entries")]
    NoLexicalEntries,

    #[error("lexical entry {index} has no entries")]
    NoEntries { index: usize },

    #[error("lexical entry {index} has no senses")]
    NoSenses { index: usize },

    #[error("sense {sense} of lexical entry {index} has no definitions")]
    NoDefinitions { index: usize, sense: usize },
}

/// Flatten a definitions document into the plain definition strings, in
/// document order.
///
/// Only the first headword result is traversed, and within each lexical
/// entry only the first entry; senses and their definitions are taken in
/// full. Every definition is whitespace-trimmed. Fails at the first empty
/// list encountered, so a successful extraction always yields at least one
/// definition.
pub fn extract_definitions(response: &RetrieveEntry) -> Result<Vec<String>, ExtractionError> {
    let headword = response.results.first().ok_or(ExtractionError::NoResults)?;

    if headword.lexical_entries.is_empty() {
        return Err(ExtractionError::NoLexicalEntries);
    }

    let mut definitions = Vec::new();

    for (index, lexical) in headword.lexical_entries.iter().enumerate() {
        let entry = lexical
            .entries
            .first()
            .ok_or(ExtractionError::NoEntries { index })?;

        if entry.senses.is_empty() {
            return Err(ExtractionError::NoSenses { index });
        }

        for (sense_index, sense) in entry.senses.iter().enumerate() {
            if sense.definitions.is_empty() {
                return Err(ExtractionError::NoDefinitions {
                    index,
                    sense: sense_index,
                });
            }

            for definition in &sense.definitions {
                definitions.push(definition.trim().to_string());
            }
        }
    }

    Ok(definitions)
}
