//! Validity bitmap interpretation for column vectors.

/// A view over a vector's validity bitmap.
///
/// The engine encodes validity as a sequence of 64-bit words where bit
/// `row % 64` of word `row / 64` is set iff the row is non-null. A vector
/// with no null rows carries no bitmap at all; the absent mask means every
/// row is valid.
///
/// Checking validity is the first operation on every cell: no decoder reads
/// value bytes for a row this mask reports as null.
#[derive(Debug, Clone, Copy)]
pub struct ValidityMask<'a> {
    words: Option<&'a [u64]>,
}

impl<'a> ValidityMask<'a> {
    /// Creates a mask view from the vector's optional validity words.
    pub fn new(words: Option<&'a [u64]>) -> ValidityMask<'a> {
        ValidityMask { words }
    }

    /// Creates a mask reporting every row as valid.
    pub fn all_valid() -> ValidityMask<'static> {
        ValidityMask { words: None }
    }

    /// Returns `true` if the row at `index` is non-null.
    ///
    /// # Panics
    ///
    /// Panics if a mask is present and is shorter than `index / 64 + 1`
    /// words. The mask is sized by the chunk's reported row count, so this
    /// indicates a producer bug rather than a data condition.
    #[inline]
    pub fn is_valid(&self, index: usize) -> bool {
        match self.words {
            None => true,
            Some(words) => words[index / 64] & (1u64 << (index % 64)) != 0,
        }
    }

    /// Returns `true` if the row at `index` is null.
    #[inline]
    pub fn is_null(&self, index: usize) -> bool {
        !self.is_valid(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_mask_is_all_valid() {
        let mask = ValidityMask::new(None);
        for index in [0, 1, 63, 64, 4095] {
            assert!(mask.is_valid(index));
            assert!(!mask.is_null(index));
        }
    }

    #[test]
    fn test_single_word_bits() {
        let words = [0b1011u64];
        let mask = ValidityMask::new(Some(&words));
        assert!(mask.is_valid(0));
        assert!(mask.is_valid(1));
        assert!(mask.is_null(2));
        assert!(mask.is_valid(3));
        assert!(mask.is_null(4));
    }

    #[test]
    fn test_word_boundary() {
        // Row 63 lives in word 0, row 64 in word 1.
        let words = [1u64 << 63, 0b1];
        let mask = ValidityMask::new(Some(&words));
        assert!(mask.is_null(0));
        assert!(mask.is_valid(63));
        assert!(mask.is_valid(64));
        assert!(mask.is_null(65));
    }

    #[test]
    #[should_panic]
    fn test_short_mask_panics() {
        let words = [u64::MAX];
        let mask = ValidityMask::new(Some(&words));
        mask.is_valid(64);
    }
}
