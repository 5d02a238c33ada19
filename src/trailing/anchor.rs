//! Nearest-date lookup used to pick the "3 years ago" anchor.

use chrono::NaiveDate;

/// Sorted view over a date column that answers "which position holds the
/// date closest to X".
///
/// Answers are identical to a linear scan over the column that keeps the
/// first position with the smallest absolute distance. Two consequences:
/// duplicate dates resolve to their earliest position, and a target exactly
/// between two dates resolves to whichever of the two appears first in the
/// column, not to the earlier date.
pub struct DateIndex {
    /// `(date, position)` sorted by date, then position.
    entries: Vec<(NaiveDate, usize)>,
}

impl DateIndex {
    pub fn new<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut entries: Vec<(NaiveDate, usize)> = dates
            .into_iter()
            .enumerate()
            .map(|(pos, date)| (date, pos))
            .collect();
        entries.sort_unstable();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the date nearest to `target`, or `None` for an empty column.
    pub fn nearest(&self, target: NaiveDate) -> Option<usize> {
        let split = self.entries.partition_point(|(date, _)| *date < target);

        // First entry at or after the target is already the lowest position
        // for its date.
        let after = self.entries.get(split).copied();
        let before = split.checked_sub(1).map(|last| self.first_of_date(last));

        match (before, after) {
            (None, None) => None,
            (Some((_, pos)), None) | (None, Some((_, pos))) => Some(pos),
            (Some((before_date, before_pos)), Some((after_date, after_pos))) => {
                let below = (target - before_date).num_days();
                let above = (after_date - target).num_days();
                if below < above {
                    Some(before_pos)
                } else if above < below {
                    Some(after_pos)
                } else {
                    Some(before_pos.min(after_pos))
                }
            }
        }
    }

    /// Lowest-position entry sharing the date of `entries[idx]`.
    fn first_of_date(&self, idx: usize) -> (NaiveDate, usize) {
        let date = self.entries[idx].0;
        let start = self.entries[..idx].partition_point(|(d, _)| *d < date);
        self.entries[start]
    }
}
