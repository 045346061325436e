/// A single successful lookup: the queried word and every definition
/// extracted for it, in document order.
#[derive(Debug, Clone)]
pub struct WordQuery {
    pub word: String,
    pub definitions: Vec<String>,
}

/// Ordered, append-only collection of the queries made during one run.
///
/// Insertion order is query order; duplicate words are kept as separate
/// records. The store is discarded at process exit unless exported.
#[derive(Debug, Default)]
pub struct Session {
    records: Vec<WordQuery>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed query. Callers only append queries that carry at
    /// least one definition.
    pub fn append(&mut self, query: WordQuery) {
        self.records.push(query);
    }

    pub fn records(&self) -> &[WordQuery] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
