use std::fmt::Write;

use lexamp_types::Session;

/// Render the session as console text: each word on its own line followed
/// by its definitions, indented.
pub fn render_session(session: &Session) -> String {
    if session.is_empty() {
        return "No words were defined this session.\n".to_string();
    }

    let mut output = String::new();
    for query in session.records() {
        let _ = writeln!(output, "{}:", query.word);
        for definition in &query.definitions {
            let _ = writeln!(output, "  - {definition}");
        }
    }

    output
}
