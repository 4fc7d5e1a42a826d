//! Pull-based iteration over decoded result rows.

use std::collections::VecDeque;

use mallard_common::{Result, try_or_ret_some_err};

use crate::decode::decode_cell;
use crate::source::{ChunkSource, DataChunk};
use crate::value::Row;

/// A lazy, finite, forward-only sequence of decoded rows.
///
/// The reader pulls chunks from its [`ChunkSource`] one at a time. For each
/// fetched chunk it extracts every column vector exactly once, decodes all
/// of the chunk's rows into owned [`Row`]s, and drops the chunk before the
/// next fetch. Peak native memory is therefore bounded by a single chunk's
/// buffers; the decoded rows are plain owned values.
///
/// The iterator is fused: once the source reports end-of-stream, or a decode
/// error has been yielded, `next()` keeps returning `None`. It is not
/// restartable, since the underlying chunks are consumed destructively.
pub struct RowReader<S: ChunkSource> {
    source: S,
    pending: VecDeque<Row>,
    rows_produced: u64,
    done: bool,
}

impl<S: ChunkSource> RowReader<S> {
    /// Creates a reader over the given chunk source.
    ///
    /// The source is the externally produced result handle; the reader takes
    /// ownership and drives it to completion.
    pub fn new(source: S) -> RowReader<S> {
        RowReader {
            source,
            pending: VecDeque::new(),
            rows_produced: 0,
            done: false,
        }
    }

    /// Total number of rows yielded so far.
    pub fn rows_produced(&self) -> u64 {
        self.rows_produced
    }

    /// Decodes every row of `chunk` into owned rows, extracting each column
    /// vector once.
    fn decode_chunk(chunk: &S::Chunk) -> Result<VecDeque<Row>> {
        let column_count = chunk.column_count();
        let row_count = chunk.row_count();

        let mut vectors = Vec::with_capacity(column_count);
        for column in 0..column_count {
            vectors.push(chunk.vector(column)?);
        }

        let mut rows = VecDeque::with_capacity(row_count);
        for row in 0..row_count {
            let mut values = Vec::with_capacity(column_count);
            for (column, vector) in vectors.iter().enumerate() {
                values.push(decode_cell(vector, row, column)?);
            }
            rows.push_back(values);
        }
        Ok(rows)
    }
}

impl<S: ChunkSource> Iterator for RowReader<S> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(row) = self.pending.pop_front() {
                self.rows_produced += 1;
                return Some(Ok(row));
            }
            if self.done {
                return None;
            }

            match try_or_ret_some_err!(self.source.fetch_chunk()) {
                Some(chunk) => {
                    log::trace!(
                        "fetched chunk: {} rows, {} columns",
                        chunk.row_count(),
                        chunk.column_count()
                    );
                    let rows = match Self::decode_chunk(&chunk) {
                        Ok(rows) => rows,
                        Err(err) => {
                            // A layout/schema error is not recoverable
                            // mid-stream; poison the reader.
                            self.done = true;
                            return Some(Err(err));
                        }
                    };
                    drop(chunk);
                    self.pending = rows;
                }
                None => {
                    log::debug!("result exhausted after {} rows", self.rows_produced);
                    self.done = true;
                    return None;
                }
            }
        }
    }
}
