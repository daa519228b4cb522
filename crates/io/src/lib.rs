// Workbook decode - in-memory spreadsheet bytes to a raw cell grid

pub mod xlsx;

pub use xlsx::read;
