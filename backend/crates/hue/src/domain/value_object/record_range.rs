//! Record Range
//!
//! 取得するレコードの範囲（両端を含む、0 始まり）。

use crate::error::{HueError, HueResult};

/// Inclusive, zero-based range of records in submission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRange {
    begin: i64,
    end: i64,
    count: i64,
}

impl RecordRange {
    /// Fails on `begin < 0`, `end < begin`, or a count that does not fit in `i64`
    pub fn new(begin: i64, end: i64) -> HueResult<Self> {
        if begin < 0 || end < begin {
            return Err(HueError::InvalidRange { begin, end });
        }

        let count = end
            .checked_sub(begin)
            .and_then(|d| d.checked_add(1))
            .ok_or(HueError::InvalidRange { begin, end })?;

        Ok(Self { begin, end, count })
    }

    pub fn begin(&self) -> i64 {
        self.begin
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of records covered, always at least 1
    pub fn count(&self) -> i64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(RecordRange::new(0, 0).unwrap().count(), 1);
        assert_eq!(RecordRange::new(3, 7).unwrap().count(), 5);
        for (begin, end) in [(0, 0), (0, 9), (10, 10), (5, 100)] {
            let range = RecordRange::new(begin, end).unwrap();
            assert_eq!(range.count(), end - begin + 1);
            assert!(range.count() >= 1);
        }
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            RecordRange::new(5, 2),
            Err(HueError::InvalidRange { begin: 5, end: 2 })
        ));
        assert!(RecordRange::new(-1, 3).is_err());
        assert!(RecordRange::new(-3, -1).is_err());
    }

    #[test]
    fn test_count_overflow_rejected() {
        assert!(matches!(
            RecordRange::new(0, i64::MAX),
            Err(HueError::InvalidRange {
                begin: 0,
                end: i64::MAX
            })
        ));

        let widest = RecordRange::new(1, i64::MAX).unwrap();
        assert_eq!(widest.count(), i64::MAX);
    }
}
