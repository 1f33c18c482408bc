use crate::config::WriterConfig;
use crate::error::PajekError;

/// In-memory edge list: a header of column names and rows of nullable cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl EdgeTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    /// Builds a table where every cell is present.
    pub fn from_strings(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| Some(c.to_string())).collect())
                .collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub(crate) fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }
}

/// One validated row of the edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: Option<f64>,
}

/// Column positions for each role, resolved once against a table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRoles {
    pub source: usize,
    pub target: usize,
    pub weight: Option<usize>,
}

impl ColumnRoles {
    pub fn resolve(table: &EdgeTable, config: &WriterConfig) -> Result<Self, PajekError> {
        let lookup = |role: &str, name: &str| {
            table.column(name).ok_or_else(|| {
                PajekError::Configuration(format!(
                    "{} column '{}' not in table columns {:?}",
                    role,
                    name,
                    table.headers()
                ))
            })
        };

        let source = lookup("source", &config.source_column)?;
        let target = lookup("target", &config.target_column)?;
        let weight = match &config.weight_column {
            Some(name) => Some(lookup("weight", name)?),
            None => None,
        };

        Ok(Self {
            source,
            target,
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EdgeTable {
        EdgeTable::from_strings(&["ID", "cited_ID", "w"], &[&["a", "b", "1"]])
    }

    #[test]
    fn resolves_configured_columns() {
        let config = WriterConfig::new("cited_ID", "ID").with_weight_column("w");
        let roles = ColumnRoles::resolve(&table(), &config).unwrap();
        assert_eq!(
            roles,
            ColumnRoles {
                source: 1,
                target: 0,
                weight: Some(2)
            }
        );
    }

    #[test]
    fn missing_source_column_is_configuration_error() {
        let config = WriterConfig::new("PaperId", "cited_ID");
        let err = ColumnRoles::resolve(&table(), &config).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("PaperId"));
    }

    #[test]
    fn missing_weight_column_is_configuration_error() {
        let config = WriterConfig::new("ID", "cited_ID").with_weight_column("weight");
        let err = ColumnRoles::resolve(&table(), &config).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn from_strings_fills_every_cell() {
        let t = table();
        assert_eq!(t.len(), 1);
        assert_eq!(t.rows()[0][1].as_deref(), Some("b"));
        assert_eq!(t.column("w"), Some(2));
        assert_eq!(t.column("x"), None);
    }
}
