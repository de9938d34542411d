//! Row cursor shared by the species table and the filter popups
//!
//! The cursor stores only a position; the rows themselves belong to whoever
//! renders them (the loader's current page, or a selector's option list).
//! Every move takes the current length so the position never points past
//! the end, even after the rows were replaced.

/// Bounds-checked position in an externally owned list
///
/// # Examples
///
/// ```
/// use redlist_explorer_core::selection::ListCursor;
///
/// let rows = ["Testus avis", "Testus mammalis", "Testus piscis"];
/// let mut cursor = ListCursor::at_start(rows.len());
///
/// cursor.down(rows.len());
/// assert_eq!(cursor.get(&rows), Some(&"Testus mammalis"));
///
/// // Rows shrank underneath the cursor
/// let rows = ["Testus avis"];
/// assert_eq!(cursor.get(&rows), None);
/// cursor.up(rows.len());
/// assert_eq!(cursor.index(), Some(0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    index: Option<usize>,
}

impl ListCursor {
    /// Cursor on the first row, or on nothing when there are no rows
    pub fn at_start(len: usize) -> Self {
        Self {
            index: (len > 0).then_some(0),
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Row under the cursor
    pub fn get<'a, T>(&self, rows: &'a [T]) -> Option<&'a T> {
        rows.get(self.index?)
    }

    /// Move one row down, stopping at the last row
    pub fn down(&mut self, len: usize) {
        if len == 0 {
            self.index = None;
            return;
        }
        self.index = Some(self.index.map_or(0, |i| (i + 1).min(len - 1)));
    }

    /// Move one row up, stopping at the first row
    pub fn up(&mut self, len: usize) {
        if len == 0 {
            self.index = None;
            return;
        }
        self.index = Some(self.index.map_or(0, |i| i.saturating_sub(1).min(len - 1)));
    }

    pub fn first(&mut self, len: usize) {
        *self = Self::at_start(len);
    }

    pub fn last(&mut self, len: usize) {
        self.index = len.checked_sub(1);
    }

    /// Put the cursor on the first row matching `predicate`
    ///
    /// Leaves the cursor where it was and returns false when nothing matches.
    pub fn seek<T>(&mut self, rows: &[T], predicate: impl Fn(&T) -> bool) -> bool {
        match rows.iter().position(predicate) {
            Some(index) => {
                self.index = Some(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_start() {
        assert_eq!(ListCursor::at_start(3).index(), Some(0));
        assert_eq!(ListCursor::at_start(0).index(), None);
        assert_eq!(ListCursor::default().index(), None);
    }

    #[test]
    fn test_moves_stop_at_edges() {
        let mut cursor = ListCursor::at_start(3);
        cursor.up(3);
        assert_eq!(cursor.index(), Some(0));

        for _ in 0..5 {
            cursor.down(3);
        }
        assert_eq!(cursor.index(), Some(2));

        cursor.first(3);
        assert_eq!(cursor.index(), Some(0));
        cursor.last(3);
        assert_eq!(cursor.index(), Some(2));
    }

    #[test]
    fn test_moves_on_empty_rows() {
        let mut cursor = ListCursor::at_start(4);
        cursor.down(0);
        assert_eq!(cursor.index(), None);
        cursor.last(0);
        assert_eq!(cursor.index(), None);
        assert_eq!(cursor.get::<u8>(&[]), None);
    }

    #[test]
    fn test_down_from_nothing_selects_first() {
        let mut cursor = ListCursor::default();
        cursor.down(2);
        assert_eq!(cursor.index(), Some(0));
    }

    #[test]
    fn test_moves_after_rows_shrink() {
        let mut cursor = ListCursor::at_start(10);
        cursor.last(10);
        cursor.down(4);
        assert_eq!(cursor.index(), Some(3));
        cursor.up(0);
        assert_eq!(cursor.index(), None);
    }

    #[test]
    fn test_seek() {
        let codes = ["all", "EN", "LC"];
        let mut cursor = ListCursor::at_start(codes.len());

        assert!(cursor.seek(&codes, |c| *c == "LC"));
        assert_eq!(cursor.get(&codes), Some(&"LC"));

        assert!(!cursor.seek(&codes, |c| *c == "CR"));
        assert_eq!(cursor.get(&codes), Some(&"LC"));
    }
}
