use crate::error::PajekError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default column holding the source (citing) node label
pub const DEFAULT_SOURCE_COLUMN: &str = "source";

/// Default column holding the target (cited) node label
pub const DEFAULT_TARGET_COLUMN: &str = "target";

/// Default header for the vertex section
pub const DEFAULT_VERTICES_LABEL: &str = "Vertices";

/// Edge section header for directed networks
pub const DIRECTED_EDGES_LABEL: &str = "Arcs";

/// Edge section header for undirected networks
pub const UNDIRECTED_EDGES_LABEL: &str = "Edges";

/// Buffer size for the .net and vertex CSV writers
pub const WRITER_BUFFER_SIZE: usize = 128 * 1024;

/// Buffer size for reading input tables
pub const READER_BUFFER_SIZE: usize = 256 * 1024;

/// Largest accepted `weight_precision`; `f64` carries at most 17 significant digits
pub const MAX_WEIGHT_PRECISION: usize = 17;

/// Progress update interval (tick every N rows)
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// How vertices are numbered in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexOrder {
    /// Order of first appearance, scanning each row's source then target
    #[default]
    FirstSeen,
    /// Numeric order when every label is an integer, byte order otherwise
    Sorted,
    /// Caller-supplied order; every label used by an edge must be listed
    Explicit(Vec<String>),
}

/// Column roles and formatting options for a Pajek conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    pub directed: bool,
    pub source_column: String,
    pub target_column: String,
    pub weight_column: Option<String>,
    pub vertex_order: VertexOrder,
    pub vertices_label: String,
    /// Overrides the `Arcs`/`Edges` header chosen from `directed`
    pub edges_label: Option<String>,
    /// Append the edge count to the edge section header (`*Arcs 4`)
    pub annotate_edge_count: bool,
    /// Fixed number of decimals for weights; shortest round-trip form when unset
    pub weight_precision: Option<usize>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            directed: true,
            source_column: DEFAULT_SOURCE_COLUMN.to_string(),
            target_column: DEFAULT_TARGET_COLUMN.to_string(),
            weight_column: None,
            vertex_order: VertexOrder::FirstSeen,
            vertices_label: DEFAULT_VERTICES_LABEL.to_string(),
            edges_label: None,
            annotate_edge_count: false,
            weight_precision: None,
        }
    }
}

impl WriterConfig {
    pub fn new(source_column: impl Into<String>, target_column: impl Into<String>) -> Self {
        Self {
            source_column: source_column.into(),
            target_column: target_column.into(),
            ..Self::default()
        }
    }

    pub fn with_weight_column(mut self, column: impl Into<String>) -> Self {
        self.weight_column = Some(column.into());
        self
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_vertex_order(mut self, order: VertexOrder) -> Self {
        self.vertex_order = order;
        self
    }

    /// Header of the edge section, without the leading `*`.
    pub fn edges_label(&self) -> &str {
        match &self.edges_label {
            Some(label) => label,
            None if self.directed => DIRECTED_EDGES_LABEL,
            None => UNDIRECTED_EDGES_LABEL,
        }
    }

    /// Rejects settings that would produce an unreadable .net file.
    pub fn validate(&self) -> Result<(), PajekError> {
        for (what, label) in [
            ("vertices label", self.vertices_label.as_str()),
            ("edges label", self.edges_label()),
        ] {
            if label.is_empty() || label.contains(char::is_whitespace) || label.contains('*') {
                return Err(PajekError::Configuration(format!(
                    "{} {:?} must be a single word without '*'",
                    what, label
                )));
            }
        }
        if let Some(precision) = self.weight_precision {
            if precision > MAX_WEIGHT_PRECISION {
                return Err(PajekError::Configuration(format!(
                    "weight precision {} exceeds the maximum of {}",
                    precision, MAX_WEIGHT_PRECISION
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PajekError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            PajekError::Configuration(format!("invalid config file {:?}: {}", path, e))
        })
    }
}
