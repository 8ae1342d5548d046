/// "N of M" view of the current spot in a working list, for progress
/// headers and dot indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowsePosition {
    /// Zero-based index into the working list; 0 when the list is empty.
    pub index: usize,
    pub total: usize,
}

impl BrowsePosition {
    /// One-based number for display, or 0 for an empty list.
    #[must_use]
    pub fn display_number(&self) -> usize {
        if self.total == 0 { 0 } else { self.index + 1 }
    }

    /// Completed fraction in `0.0..=1.0`, for progress bars.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.display_number() as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_number_is_one_based() {
        let position = BrowsePosition { index: 2, total: 10 };
        assert_eq!(position.display_number(), 3);
    }

    #[test]
    fn empty_list_shows_zero() {
        let position = BrowsePosition { index: 0, total: 0 };
        assert_eq!(position.display_number(), 0);
        assert_eq!(position.fraction(), 0.0);
    }

    #[test]
    fn fraction_reaches_one_at_the_end() {
        let position = BrowsePosition { index: 9, total: 10 };
        assert!((position.fraction() - 1.0).abs() < f64::EPSILON);
    }
}
