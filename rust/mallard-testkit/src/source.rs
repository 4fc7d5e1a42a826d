//! In-memory chunk sources.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use mallard_common::{Result, error::Error};
use mallard_decode::source::ChunkSource;

use crate::chunk::TestChunk;

/// A chunk source fed from a queue of pre-built chunks.
///
/// Each fetched chunk is tagged with a release flag, and the next fetch
/// fails if the previous chunk has not been dropped yet. This turns the
/// "release before the next fetch" protocol requirement into a hard test
/// assertion.
#[derive(Default)]
pub struct TestSource {
    chunks: VecDeque<TestChunk>,
    outstanding: Option<Rc<Cell<bool>>>,
    fetch_count: usize,
}

impl TestSource {
    /// Creates a source that will serve the given chunks in order.
    pub fn new(chunks: impl IntoIterator<Item = TestChunk>) -> TestSource {
        TestSource {
            chunks: chunks.into_iter().collect(),
            outstanding: None,
            fetch_count: 0,
        }
    }

    /// Number of fetch calls made so far, including the end-of-stream fetch.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }
}

impl ChunkSource for TestSource {
    type Chunk = TestChunk;

    fn fetch_chunk(&mut self) -> Result<Option<TestChunk>> {
        self.fetch_count += 1;
        if let Some(flag) = &self.outstanding {
            if !flag.get() {
                return Err(Error::invalid_arg(
                    "fetch_chunk",
                    "previous chunk was not released before the next fetch",
                ));
            }
        }
        match self.chunks.pop_front() {
            Some(chunk) => {
                let flag = Rc::new(Cell::new(false));
                self.outstanding = Some(flag.clone());
                Ok(Some(chunk.with_release_flag(flag)))
            }
            None => Ok(None),
        }
    }
}
