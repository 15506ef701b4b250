use std::fmt;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cadence at which a recurring expense comes due.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Frequency {
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// Number of calendar months in one period.
    pub fn months(self) -> u32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::Yearly => 12,
        }
    }

    /// Moves `from` forward by exactly one period.
    ///
    /// Day-of-month overflow is clamped to the last day of the target month:
    /// `2024-01-31` plus one month is `2024-02-29`, and `2024-02-29` plus one
    /// year is `2025-02-28`. The clamped day is what later steps start from, so
    /// a monthly series anchored on the 31st continues `2024-02-29`,
    /// `2024-03-29`, ... Returns `None` once the result would leave chrono's
    /// supported date range.
    pub fn advance(self, from: NaiveDate) -> Option<NaiveDate> {
        from.checked_add_months(Months::new(self.months()))
    }

    /// Returns `true` when `later` sits exactly one period after `earlier`.
    pub fn is_one_period_after(self, earlier: NaiveDate, later: NaiveDate) -> bool {
        self.advance(earlier) == Some(later)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}
