//! Read/write kernel matrices as delimited text.
//!
//! Format:
//! - one line per matrix row, `\n` terminated
//! - every cell is a fixed-point decimal with 6 fractional digits followed by
//!   a comma, including the last cell of the row
//! - no header, no quoting, `.` decimal point
//!
//! ```text
//! 0.000012,0.000019,...,0.000012,
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::domain::KernelMatrix;
use crate::error::AppError;

/// Write `matrix` to `path`, creating or truncating the file.
pub fn write_matrix_csv(path: &Path, matrix: &KernelMatrix) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create output file '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    write_matrix(&mut out, matrix)
        .map_err(|e| AppError::io(format!("Failed to write output file '{}': {e}", path.display())))?;
    out.flush()
        .map_err(|e| AppError::io(format!("Failed to flush output file '{}': {e}", path.display())))?;

    tracing::info!(
        path = %path.display(),
        rows = matrix.height(),
        cols = matrix.width(),
        "kernel matrix written"
    );
    Ok(())
}

/// Encode `matrix` into any writer.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &KernelMatrix) -> std::io::Result<()> {
    for row in matrix.rows() {
        for v in row {
            write!(out, "{v:.6},")?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Read a matrix previously written by [`write_matrix_csv`].
pub fn read_matrix_csv(path: &Path) -> Result<KernelMatrix, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open matrix file '{}': {e}", path.display())))?;
    parse_matrix(BufReader::new(file))
        .map_err(|e| AppError::io(format!("Invalid matrix file '{}': {e}", path.display())))
}

/// Decode a matrix from any buffered reader.
///
/// Blank lines are skipped; a single trailing empty token per line (from the
/// trailing comma) is allowed. All rows must have the same number of cells.
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<KernelMatrix, String> {
    let mut width: Option<usize> = None;
    let mut height = 0usize;
    let mut data = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| format!("line {line_no}: {e}"))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let body = line.strip_suffix(',').unwrap_or(line);
        let before = data.len();
        for token in body.split(',') {
            let token = token.trim();
            let v: f32 = token
                .parse()
                .map_err(|_| format!("line {line_no}: invalid value '{token}'"))?;
            data.push(v);
        }

        let cols = data.len() - before;
        match width {
            None => width = Some(cols),
            Some(w) if w != cols => {
                return Err(format!("line {line_no}: expected {w} values, found {cols}"));
            }
            Some(_) => {}
        }
        height += 1;
    }

    let width = width.ok_or_else(|| "no rows".to_string())?;
    KernelMatrix::from_row_major(width, height, data).ok_or_else(|| "inconsistent row lengths".to_string())
}
