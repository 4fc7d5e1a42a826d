//! In-memory data chunks.

use std::cell::Cell;
use std::rc::Rc;

use mallard_common::{Result, error::Error};
use mallard_decode::source::{ColumnVector, DataChunk};

use crate::column::TestColumn;

/// An in-memory data chunk: a set of equally sized column vectors plus a row
/// count.
///
/// Dropping the chunk models the engine's chunk release. A chunk can carry a
/// release flag (see [`TestChunk::with_release_flag`]) that its destructor
/// sets, which [`crate::TestSource`] uses to verify that the reader releases
/// every chunk before fetching the next one.
#[derive(Debug)]
pub struct TestChunk {
    columns: Vec<TestColumn>,
    row_count: usize,
    release_flag: Option<Rc<Cell<bool>>>,
}

impl TestChunk {
    /// Creates a chunk over the given columns with the given row count.
    ///
    /// # Panics
    ///
    /// Panics if a column's data buffer is too small for `row_count` slots of
    /// its type; tests should not build chunks the engine could not produce.
    pub fn new(columns: Vec<TestColumn>, row_count: usize) -> TestChunk {
        for column in &columns {
            if let Some(width) = column.logical_type().id.fixed_width() {
                assert!(
                    column.data().len() >= row_count * width,
                    "column buffer too small for {row_count} rows"
                );
            }
        }
        TestChunk {
            columns,
            row_count,
            release_flag: None,
        }
    }

    /// Attaches a flag the chunk's destructor will set.
    pub fn with_release_flag(mut self, flag: Rc<Cell<bool>>) -> TestChunk {
        self.release_flag = Some(flag);
        self
    }
}

impl DataChunk for TestChunk {
    type Vector<'a> = &'a TestColumn;

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn vector(&self, index: usize) -> Result<Self::Vector<'_>> {
        self.columns
            .get(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, self.columns.len()))
    }
}

impl Drop for TestChunk {
    fn drop(&mut self) {
        if let Some(flag) = &self.release_flag {
            flag.set(true);
        }
    }
}
