use std::path::Path;

use lexamp_types::WordQuery;
use rust_xlsxwriter::{Color, DocProperties, Format, FormatAlign, Workbook};

/// File name of the exported spreadsheet, written to the working directory.
pub const RESULTS_FILE: &str = "Lexical_Amplifier_Results.xlsx";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// Write the session's queries to a spreadsheet at `path`.
///
/// The sheet has a "Word" and a "Definition(s)" column, one row per query,
/// with a word's definitions joined into a single cell. The header row is
/// bold and filled: yellow for the word column, navy with white text for
/// the definitions column.
pub fn write_workbook(records: &[WordQuery], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    workbook.set_properties(&DocProperties::new().set_author("Lexical Amplifier"));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Definitions")?;
    worksheet.set_column_width(0, 36)?;
    worksheet.set_column_width(1, 120)?;

    let word_header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_background_color(Color::RGB(0xFFFF00));
    let definitions_header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x002060));

    worksheet.write_string_with_format(0, 0, "Word", &word_header)?;
    worksheet.write_string_with_format(0, 1, "Definition(s)", &definitions_header)?;

    for (index, query) in records.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_string(row, 0, &query.word)?;
        worksheet.write_string(row, 1, definition_cell(&query.definitions))?;
    }

    workbook.save(path)?;
    Ok(())
}

fn definition_cell(definitions: &[String]) -> String {
    definitions.join("; ")
}
