mod workbook;

pub use workbook::{ExportError, RESULTS_FILE, write_workbook};
