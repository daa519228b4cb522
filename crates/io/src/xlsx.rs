// Price-list workbook decode (xlsx, xlsm, xlsb, xls, ods)
//
// One-way conversion: an in-memory byte buffer in, a raw cell grid out.
// Only the FIRST sheet is ever considered — a policy decision, so imports
// stay deterministic whatever the supplier put on the other tabs.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use cotador_ingest::{Cell, Grid, IngestError};

/// Decode workbook bytes into the first sheet's cell grid.
///
/// Leading empty rows/columns before the used range are materialized as
/// empty cells so grid indices line up with on-sheet row numbers (the used
/// range may not start at A1). An empty first sheet yields an empty grid;
/// unreadable bytes yield [`IngestError::Decode`].
pub fn read(bytes: &[u8]) -> Result<Grid, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| IngestError::Decode(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names
        .first()
        .ok_or_else(|| IngestError::Decode("workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(first)
        .map_err(|e| IngestError::Decode(format!("cannot read sheet '{first}': {e}")))?;

    // Range start offset (data may not begin at A1).
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    let mut grid: Grid = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells: Vec<Cell> = Vec::with_capacity(start_col as usize + row.len());
        cells.resize(start_col as usize, Cell::Empty);
        cells.extend(row.iter().map(convert_cell));
        grid.push(cells);
    }

    Ok(grid)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        // Booleans surface as text the matcher can still see.
        Data::Bool(b) => Cell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        // Error values keep their #-style text representation.
        Data::Error(e) => Cell::Text(format!("#{e:?}")),
        // Date serials; price lists rarely carry them but the mapping is total.
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
