use serde::Deserialize;

// Response document structures for the Oxford entries endpoint. Only the
// levels the extractor walks are modeled; absent arrays deserialize to
// empty ones so the extractor reports absence and emptiness the same way.

/// Top-level response for one entry lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrieveEntry {
    #[serde(default)]
    pub results: Vec<HeadwordEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadwordEntry {
    #[serde(rename = "lexicalEntries", default)]
    pub lexical_entries: Vec<LexicalEntry>,
}

/// One grammatical reading of the headword (noun, verb, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct LexicalEntry {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub definitions: Vec<String>,
}
