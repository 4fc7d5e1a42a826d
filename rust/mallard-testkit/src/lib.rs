//! In-memory chunk sources for testing the decode path.
//!
//! The builders here encode values into the same physical layouts the native
//! engine produces: validity words, fixed-width slots, string-view records
//! with a side heap, packed temporal values. Out-of-line string pointers are
//! represented as offsets into the column's heap buffer, which the test
//! vector resolves in [`mallard_decode::source::ColumnVector::read_out_of_line`].
//!
//! Test support only; nothing here is part of the decoding engine proper.

mod chunk;
mod column;
mod source;

pub use chunk::TestChunk;
pub use column::TestColumn;
pub use source::TestSource;
