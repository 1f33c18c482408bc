use crate::config::{WriterConfig, WRITER_BUFFER_SIZE};
use crate::error::PajekError;
use crate::index::LabelIndex;
use crate::models::{ColumnRoles, EdgeRecord, EdgeTable};
use crate::stats::WriteSummary;
use csv::Writer;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Serializes an edge table as a Pajek `.net` network.
///
/// Columns are resolved when the writer is built, so a missing column fails
/// before any row is read or any file is opened.
pub struct PajekWriter<'a> {
    table: &'a EdgeTable,
    config: WriterConfig,
    roles: ColumnRoles,
}

/// Validated edges and their vertex numbering, ready to be emitted.
struct Network {
    edges: Vec<EdgeRecord>,
    index: LabelIndex,
}

impl<'a> PajekWriter<'a> {
    pub fn new(table: &'a EdgeTable, config: WriterConfig) -> Result<Self, PajekError> {
        config.validate()?;
        let roles = ColumnRoles::resolve(table, &config)?;
        debug!(?roles, "Resolved column roles");
        Ok(Self {
            table,
            config,
            roles,
        })
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Extracts one record per row, rejecting nulls and unusable values.
    pub fn edges(&self) -> Result<Vec<EdgeRecord>, PajekError> {
        let mut edges = Vec::with_capacity(self.table.len());
        for (i, row) in self.table.rows().iter().enumerate() {
            let row_num = i + 1;
            let source = self.label_cell(row, self.roles.source, "source", row_num)?;
            let target = self.label_cell(row, self.roles.target, "target", row_num)?;
            let weight = match self.roles.weight {
                Some(col) => Some(self.weight_cell(row, col, row_num)?),
                None => None,
            };
            edges.push(EdgeRecord {
                source,
                target,
                weight,
            });
        }
        Ok(edges)
    }

    fn label_cell(
        &self,
        row: &[Option<String>],
        col: usize,
        role: &str,
        row_num: usize,
    ) -> Result<String, PajekError> {
        let value = row.get(col).and_then(Option::as_deref).ok_or_else(|| {
            PajekError::data(
                row_num,
                format!("null {} value in column '{}'", role, self.table.headers()[col]),
            )
        })?;
        check_label(value).map_err(|reason| {
            PajekError::data(row_num, format!("{} label {:?} {}", role, value, reason))
        })?;
        Ok(value.to_string())
    }

    fn weight_cell(
        &self,
        row: &[Option<String>],
        col: usize,
        row_num: usize,
    ) -> Result<f64, PajekError> {
        let column = &self.table.headers()[col];
        let raw = row.get(col).and_then(Option::as_deref).ok_or_else(|| {
            PajekError::data(row_num, format!("null weight in column '{}'", column))
        })?;
        match raw.trim().parse::<f64>() {
            Ok(w) if w.is_finite() => Ok(w),
            _ => Err(PajekError::data(
                row_num,
                format!("weight {:?} in column '{}' is not a finite number", raw, column),
            )),
        }
    }

    /// Builds the vertex numbering for this table.
    pub fn label_index(&self) -> Result<LabelIndex, PajekError> {
        Ok(self.prepare()?.index)
    }

    fn prepare(&self) -> Result<Network, PajekError> {
        let edges = self.edges()?;
        let index = LabelIndex::build(&edges, &self.config.vertex_order)?;
        // Explicit orders may list vertices no row mentions
        for label in index.labels() {
            check_label(label).map_err(|reason| {
                PajekError::Configuration(format!("vertex order label {:?} {}", label, reason))
            })?;
        }
        Ok(Network { edges, index })
    }

    /// Writes the network to `out`. Nothing is written unless validation succeeds.
    pub fn render_to<W: Write>(&self, out: &mut W) -> Result<WriteSummary, PajekError> {
        let network = self.prepare()?;
        self.emit(&network, out)
    }

    pub fn render_to_string(&self) -> Result<String, PajekError> {
        let mut buf = Vec::new();
        self.render_to(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| PajekError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn emit<W: Write>(&self, network: &Network, out: &mut W) -> Result<WriteSummary, PajekError> {
        let mut ids = itoa::Buffer::new();

        writeln!(out, "*{} {}", self.config.vertices_label, network.index.len())?;
        for (id, label) in network.index.iter() {
            out.write_all(ids.format(id).as_bytes())?;
            writeln!(out, " \"{}\"", label)?;
        }

        if self.config.annotate_edge_count {
            writeln!(out, "*{} {}", self.config.edges_label(), network.edges.len())?;
        } else {
            writeln!(out, "*{}", self.config.edges_label())?;
        }

        for edge in &network.edges {
            let source = self.lookup(&network.index, &edge.source)?;
            let target = self.lookup(&network.index, &edge.target)?;
            out.write_all(ids.format(source).as_bytes())?;
            out.write_all(b" ")?;
            out.write_all(ids.format(target).as_bytes())?;
            if let Some(weight) = edge.weight {
                match self.config.weight_precision {
                    Some(precision) => write!(out, " {:.*}", precision, weight)?,
                    None => write!(out, " {}", weight)?,
                }
            }
            out.write_all(b"\n")?;
        }

        Ok(WriteSummary {
            vertices: network.index.len(),
            edges: network.edges.len(),
            weighted: self.roles.weight.is_some(),
            directed: self.config.directed,
        })
    }

    fn lookup(&self, index: &LabelIndex, label: &str) -> Result<usize, PajekError> {
        index.id(label).ok_or_else(|| {
            PajekError::Configuration(format!("label '{}' has no vertex index", label))
        })
    }

    /// Writes the `.net` file at `path`, replacing any existing file.
    ///
    /// Output goes to `<path>.tmp` first and is renamed into place, so a
    /// failed write never leaves a truncated file at `path`.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<WriteSummary, PajekError> {
        let path = path.as_ref();
        let network = self.prepare()?;

        let tmp_path = tmp_path(path);
        let file = File::create(&tmp_path)?;
        let mut out = BufWriter::with_capacity(WRITER_BUFFER_SIZE, file);
        let summary = self.emit(&network, &mut out)?;
        out.flush()?;
        drop(out);

        fs::rename(&tmp_path, path)?;

        info!(
            path = ?path,
            vertices = summary.vertices,
            edges = summary.edges,
            directed = summary.directed,
            weighted = summary.weighted,
            "Pajek network written"
        );
        Ok(summary)
    }

    /// Writes the vertex numbering as a `node_id,node_name` CSV.
    pub fn write_vertices_csv(&self, path: impl AsRef<Path>) -> Result<usize, PajekError> {
        let path = path.as_ref();
        let index = self.label_index()?;

        let mut writer = Writer::from_writer(BufWriter::with_capacity(
            WRITER_BUFFER_SIZE,
            File::create(path)?,
        ));
        writer.write_record(["node_id", "node_name"])?;
        let mut ids = itoa::Buffer::new();
        for (id, label) in index.iter() {
            writer.write_record([ids.format(id), label])?;
        }
        writer.flush()?;

        info!(path = ?path, vertices = index.len(), "Vertex table written");
        Ok(index.len())
    }
}

/// Labels are wrapped in double quotes, so they cannot carry quotes or line breaks.
fn check_label(label: &str) -> Result<(), &'static str> {
    if label.contains('"') {
        Err("contains a double quote")
    } else if label.contains(['\n', '\r']) {
        Err("contains a line break")
    } else {
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
