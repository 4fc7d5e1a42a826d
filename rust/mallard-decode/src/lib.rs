//! Decoding of an analytical engine's chunked, columnar, in-memory query
//! results into typed Rust row values.
//!
//! The engine delivers query results as a stream of fixed-capacity data
//! chunks, each holding one raw vector per column: a native data buffer, an
//! optional validity bitmap and a logical type descriptor. This crate owns
//! the decode path from those raw buffers to rows of owned [`value::Value`]s:
//!
//! - [`validity::ValidityMask`] — validity-bitmap interpretation, consulted
//!   before any value bytes are read.
//! - [`view::ByteView`] — bounds-checked, native-endian typed reads over a
//!   vector's raw buffer.
//! - [`strings`] — the 16-byte hybrid inline/out-of-line string records
//!   backing `VARCHAR`, `BLOB` and `BIT` cells, copied out before chunk
//!   release.
//! - [`scalar`], [`decimal`], [`temporal`] — fixed-width primitives,
//!   width-classed decimal mantissas and 128-bit integers, and the temporal
//!   encodings (dates, times, unit-tagged timestamps, intervals, packed
//!   time-with-offset values).
//! - [`decode::decode_cell`] — the single exhaustive dispatch over the
//!   closed [`typeid::TypeId`] set, including loud rejection of composite
//!   types this decoder does not support.
//! - [`source`] — the narrow read contract consumed from the external
//!   engine (chunk fetch, per-column vectors, out-of-line payload access).
//! - [`rows::RowReader`] — the pull-based iterator turning a chunk source
//!   into a finite, forward-only sequence of decoded rows.
//!
//! Everything upstream of the read contract — connections, SQL execution,
//! scheduling — is an external collaborator and out of scope here.

pub mod decimal;
pub mod decode;
pub mod rows;
pub mod scalar;
pub mod source;
pub mod strings;
pub mod temporal;
pub mod typeid;
pub mod validity;
pub mod value;
pub mod view;

pub use decode::decode_cell;
pub use rows::RowReader;
pub use source::{ChunkSource, ColumnVector, DataChunk};
pub use typeid::{LogicalType, TimeUnit, TypeId};
pub use value::{Row, Value};
