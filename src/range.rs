use crate::ids::Id;

/// An offset+limit window over a list query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    pub offset: u64,
    pub size: u64,
}

impl Range {
    pub const fn new(offset: u64, size: u64) -> Self {
        Range { offset, size }
    }

    /// First page of `size` rows.
    pub const fn first(size: u64) -> Self {
        Range { offset: 0, size }
    }
}

/// One page of a list query. `more_results` is cheap to compute because the
/// composer over-fetches `range.size + 1` rows and trims the extra one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeResults<T> {
    pub results: Vec<T>,
    pub range: Range,
    pub more_results: bool,
}

impl<T> RangeResults<T> {
    /// Builds a page from an over-fetch of up to `range.size + 1` rows,
    /// trimming the sentinel row and setting `more_results` accordingly.
    pub fn from_overfetch(mut rows: Vec<T>, range: Range) -> Self {
        let more_results = rows.len() as u64 > range.size;
        if more_results {
            rows.truncate(range.size as usize);
        }
        RangeResults { results: rows, range, more_results }
    }
}

/// A closed `[first, last]` id interval produced by `find_next_id_range`,
/// used to split a large keyset scan into independent read transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdRange<T> {
    pub first: Id<T>,
    pub last: Id<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overfetch_sets_more_results() {
        let range = Range::new(0, 2);
        let page = RangeResults::from_overfetch(vec![1, 2, 3], range);
        assert_eq!(page.results, vec![1, 2]);
        assert!(page.more_results);

        let page = RangeResults::from_overfetch(vec![1, 2], range);
        assert_eq!(page.results, vec![1, 2]);
        assert!(!page.more_results);
    }
}
