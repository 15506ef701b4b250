use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::domain::{Frequency, RecurringTemplate};

/// Lazy sequence of the dates on which a template came due before a reference date.
///
/// Starting from the template cursor, each item is one period after the
/// previous one. The sequence ends at the first date that is on or after the
/// reference date, or after the template end date. A template that ended
/// before the reference date yields nothing.
#[derive(Debug, Clone)]
pub struct Occurrences {
    frequency: Frequency,
    cursor: NaiveDate,
    as_of: NaiveDate,
    end_date: Option<NaiveDate>,
    finished: bool,
}

/// Returns the occurrences of `template` due strictly before `as_of`.
///
/// The function is pure: the template is not modified and calling it again
/// with the same arguments yields the same dates.
pub fn occurrences(template: &RecurringTemplate, as_of: NaiveDate) -> Occurrences {
    Occurrences {
        frequency: template.frequency,
        cursor: template.cursor(),
        as_of,
        end_date: template.end_date,
        finished: template.has_ended(as_of),
    }
}

impl Occurrences {
    /// The most recently emitted date, or the template cursor before the first item.
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.finished {
            return None;
        }
        let candidate = match self.frequency.advance(self.cursor) {
            Some(candidate) => candidate,
            None => {
                self.finished = true;
                return None;
            }
        };
        let past_end = self.end_date.map_or(false, |end| candidate > end);
        if candidate >= self.as_of || past_end {
            self.finished = true;
            return None;
        }
        self.cursor = candidate;
        Some(candidate)
    }
}

impl FusedIterator for Occurrences {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExpenseCategory, PaymentMethod};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn template(frequency: Frequency, start: NaiveDate) -> RecurringTemplate {
        RecurringTemplate::new(
            99.0,
            ExpenseCategory::Utilities,
            PaymentMethod::CreditCard,
            "Hosting",
            frequency,
            start,
        )
    }

    #[test]
    fn start_date_itself_is_not_an_occurrence() {
        let rule = template(Frequency::Monthly, date(2024, 1, 1));
        let dates: Vec<_> = occurrences(&rule, date(2024, 1, 20)).collect();
        assert!(dates.is_empty());
    }

    #[test]
    fn reference_date_is_exclusive() {
        let rule = template(Frequency::Monthly, date(2024, 1, 1));
        let on_boundary: Vec<_> = occurrences(&rule, date(2024, 2, 1)).collect();
        assert!(on_boundary.is_empty());
        let day_after: Vec<_> = occurrences(&rule, date(2024, 2, 2)).collect();
        assert_eq!(day_after, vec![date(2024, 2, 1)]);
    }

    #[test]
    fn iterator_is_restartable() {
        let rule = template(Frequency::Quarterly, date(2023, 1, 15));
        let as_of = date(2024, 1, 1);
        let first: Vec<_> = occurrences(&rule, as_of).collect();
        let second: Vec<_> = occurrences(&rule, as_of).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![date(2023, 4, 15), date(2023, 7, 15), date(2023, 10, 15)]);
    }

    #[test]
    fn cursor_tracks_last_emitted_date() {
        let rule = template(Frequency::Monthly, date(2024, 1, 10));
        let mut iter = occurrences(&rule, date(2024, 4, 1));
        assert_eq!(iter.cursor(), date(2024, 1, 10));
        iter.by_ref().for_each(drop);
        assert_eq!(iter.cursor(), date(2024, 3, 10));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn sequence_stops_at_the_end_of_the_calendar() {
        let rule = template(Frequency::Yearly, date(262_000, 6, 1));
        let dates: Vec<_> = occurrences(&rule, NaiveDate::MAX).collect();
        assert!(!dates.is_empty());
        assert!(dates.iter().all(|d| *d < NaiveDate::MAX));
    }
}
