//! `cotador-ingest` — Price-list ingestion engine.
//!
//! Pure engine crate: receives a raw cell grid, returns a normalized
//! [`ServiceCatalog`](cotador_engine::ServiceCatalog). Header location is
//! content-addressed (substring vocabulary over accent-folded text), never
//! position-addressed — supplier sheets vary too much for fixed offsets.

pub mod error;
pub mod grid;
pub mod header;
pub mod ingest;
pub mod price;

pub use error::IngestError;
pub use grid::{Cell, Grid};
pub use header::{HeaderMatch, HeaderVocabulary, HEADER_SCAN_ROWS};
pub use ingest::{ingest, ingest_with_vocabulary};
