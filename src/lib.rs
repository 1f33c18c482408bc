//! pajek-tools: convert tabular edge lists into Pajek `.net` network files
//!
//! A conversion is a single pass over an in-memory edge table:
//!
//! 1. **Column resolution** -- Source, target and optional weight columns are looked up
//!    once when the writer is built; a missing column is a configuration error
//! 2. **Extraction** -- Each row becomes a validated [`models::EdgeRecord`]; null labels
//!    and unparseable weights are data errors
//! 3. **Indexing** -- Distinct labels are numbered `1..=N` in first-seen, sorted, or
//!    caller-supplied order
//! 4. **Emission** -- A `*Vertices N` section followed by `*Arcs` (directed) or
//!    `*Edges` (undirected), written to a temp file and renamed into place
//!
//! Output is deterministic: the same table and configuration always produce the
//! same bytes.
//!
//! # Key Modules
//!
//! - [`writer`] -- `PajekWriter`, validation and `.net` emission
//! - [`index`] -- Label-to-index numbering
//! - [`table`] -- CSV/TSV loading into an `EdgeTable`
//! - [`models`] -- Core data types (EdgeTable, EdgeRecord, ColumnRoles)
//! - [`config`] -- `WriterConfig` and defaults
//! - [`error`] -- `PajekError`
//! - [`stats`] -- Summary of a completed write
//!
//! # Example Usage
//!
//! ```bash
//! pajek-tools convert -i citations.csv -o citations.net \
//!     --source-column PaperId --target-column PaperReferenceId
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod stats;
pub mod table;
pub mod writer;

pub use config::{VertexOrder, WriterConfig};
pub use error::PajekError;
pub use models::{EdgeRecord, EdgeTable};
pub use writer::PajekWriter;
