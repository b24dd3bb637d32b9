use rebarc_base::{Error, Result};

/// Splits comma-separated text into trimmed rows, validating the header
/// row against the expected column names. Returns each data row with its
/// one-based line number.
pub(crate) fn parse_table(
    text: &str,
    expected_header: &[&str],
) -> Result<Vec<(usize, Vec<String>)>> {
    let mut lines = text.lines().enumerate();
    let Some((_, header)) = lines.next() else {
        return Err(Error::Parse {
            line: 1,
            message: "missing header row".to_string(),
        });
    };

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    if columns != expected_header {
        return Err(Error::Parse {
            line: 1,
            message: format!(
                "expected header '{}', got '{}'",
                expected_header.join(","),
                header.trim()
            ),
        });
    }

    let mut rows = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<String> = line.split(',').map(|cell| cell.trim().to_string()).collect();
        if cells.len() != expected_header.len() {
            return Err(Error::Parse {
                line: index + 1,
                message: format!(
                    "expected {} fields, got {}",
                    expected_header.len(),
                    cells.len()
                ),
            });
        }
        rows.push((index + 1, cells));
    }
    Ok(rows)
}

pub(crate) fn parse_number(cell: &str, line: usize, column: &str) -> Result<f64> {
    cell.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid number '{cell}' in column {column}"),
    })
}
