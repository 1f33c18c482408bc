use crate::config::{PROGRESS_INTERVAL, READER_BUFFER_SIZE};
use crate::error::PajekError;
use crate::models::EdgeTable;
use csv::ReaderBuilder;
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads a delimited edge list with a header row. Empty cells become nulls.
pub fn read_csv(path: impl AsRef<Path>, delimiter: u8) -> Result<EdgeTable, PajekError> {
    let path = path.as_ref();
    info!(path = ?path, "Reading edge table");
    let file = File::open(path)?;
    from_reader(BufReader::with_capacity(READER_BUFFER_SIZE, file), delimiter)
}

pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<EdgeTable, PajekError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    debug!(columns = ?headers, "Parsed header");

    let mut table = EdgeTable::new(headers, Vec::new());
    let pb = ProgressBar::new_spinner();

    for (count, result) in (1u64..).zip(reader.records()) {
        let record = result?;
        let row = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        table.push_row(row);
        if count % PROGRESS_INTERVAL == 0 {
            pb.tick();
        }
    }

    pb.finish_and_clear();

    info!(rows = table.len(), "Edge table loaded");
    Ok(table)
}

/// Reads one label per line, skipping blank lines, for an explicit vertex order.
pub fn read_label_list(path: impl AsRef<Path>) -> Result<Vec<String>, PajekError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn reads_headers_and_rows() {
        let data = "ID,cited_ID\na,b\na,c\n";
        let table = from_reader(data.as_bytes(), b',').unwrap();
        assert_eq!(table.headers(), &["ID".to_string(), "cited_ID".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1][1].as_deref(), Some("c"));
    }

    #[test]
    fn empty_cells_are_null() {
        let data = "src,dst,w\na,,1.5\n";
        let table = from_reader(data.as_bytes(), b',').unwrap();
        assert_eq!(table.rows()[0][1], None);
        assert_eq!(table.rows()[0][2].as_deref(), Some("1.5"));
    }

    #[test]
    fn reads_tab_delimited() {
        let data = "src\tdst\nx y\tz\n";
        let table = from_reader(data.as_bytes(), b'\t').unwrap();
        assert_eq!(table.rows()[0][0].as_deref(), Some("x y"));
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let data = "src,dst\na,b,c\n";
        let err = from_reader(data.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, PajekError::Csv(_)));
    }

    #[test]
    fn read_csv_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_csv(dir.path().join("missing.csv"), b',').unwrap_err();
        assert!(matches!(err, PajekError::Io(_)));
    }

    #[test]
    fn label_list_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("order.txt");
        let mut file = File::create(&path).unwrap();
        write!(file, "c\r\n\na\nb\n").unwrap();

        let labels = read_label_list(&path).unwrap();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }
}
