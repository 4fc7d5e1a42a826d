//! The narrow read contract the decoder consumes from the external engine.
//!
//! The engine's connection lifecycle, SQL execution and scheduling are
//! external collaborators; all the decode path needs from them is a stream
//! of data chunks and, per chunk, per-column access to raw data, validity
//! and logical type. These traits capture exactly that surface, so the core
//! stays independent of any particular native binding and the tests can
//! drive it with in-memory chunks.

use mallard_common::Result;

use crate::typeid::LogicalType;

/// A source of result chunks, typically backed by an engine result handle.
///
/// The source is the session-scoped handle: it is constructed once by the
/// caller and moved into the row reader. There is no process-wide engine
/// state behind this trait.
pub trait ChunkSource {
    type Chunk: DataChunk;

    /// Fetches the next chunk of the result.
    ///
    /// This is a blocking call. `Ok(None)` signals the end of the result;
    /// the stream is finite and forward-only, and a source is not required
    /// to tolerate further calls after returning `None`.
    ///
    /// The previously fetched chunk must be dropped before this is called
    /// again; the returned chunk is exclusively owned by the caller until
    /// dropped.
    fn fetch_chunk(&mut self) -> Result<Option<Self::Chunk>>;
}

impl<S: ChunkSource + ?Sized> ChunkSource for &mut S {
    type Chunk = S::Chunk;

    fn fetch_chunk(&mut self) -> Result<Option<Self::Chunk>> {
        (**self).fetch_chunk()
    }
}

/// One fetched batch of column vectors.
///
/// Dropping the chunk releases its native buffers and invalidates every
/// vector borrowed from it, which the borrow checker enforces through the
/// `Vector<'a>` lifetime.
pub trait DataChunk {
    type Vector<'a>: ColumnVector
    where
        Self: 'a;

    /// Number of columns in the chunk.
    fn column_count(&self) -> usize;

    /// Number of rows in the chunk. At most the engine's fixed vector
    /// capacity (2048 rows).
    fn row_count(&self) -> usize;

    /// Borrows the vector of the column at `index`.
    ///
    /// Fails with `IndexOutOfBounds` if `index >= column_count()`.
    fn vector(&self, index: usize) -> Result<Self::Vector<'_>>;
}

/// One column's data within a chunk: raw bytes, optional validity words and
/// the logical type descriptor.
pub trait ColumnVector {
    /// The column's logical type.
    fn logical_type(&self) -> LogicalType;

    /// The raw data buffer, sized for the chunk's row count at this type's
    /// slot width.
    fn data(&self) -> &[u8];

    /// The validity words, or `None` when every row is valid.
    fn validity(&self) -> Option<&[u64]>;

    /// Copies `len` bytes addressed by an out-of-line string pointer.
    ///
    /// `ptr` is the 8-byte pointer taken verbatim from a string-view record
    /// in this vector; only the vector that produced the record can resolve
    /// it. The bytes are returned as an owned copy so they survive the
    /// chunk's release.
    fn read_out_of_line(&self, ptr: u64, len: usize) -> Result<Vec<u8>>;
}

impl<V: ColumnVector + ?Sized> ColumnVector for &V {
    fn logical_type(&self) -> LogicalType {
        (**self).logical_type()
    }

    fn data(&self) -> &[u8] {
        (**self).data()
    }

    fn validity(&self) -> Option<&[u64]> {
        (**self).validity()
    }

    fn read_out_of_line(&self, ptr: u64, len: usize) -> Result<Vec<u8>> {
        (**self).read_out_of_line(ptr, len)
    }
}
