//! Next-month spending projection by least squares over the last three months.

use chrono::NaiveDate;

use crate::domain::Expense;

use super::{month_key, total_for_key};

const HISTORY_MONTHS: i32 = 3;
const STABLE_BAND_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    /// Projected total for the month after the reference month, never negative.
    pub amount: f64,
    /// Direction of the projection relative to the reference month.
    pub trend: Trend,
    /// Goodness of fit (R squared) as a percentage.
    pub confidence: f64,
}

/// Sum of the expenses dated in the calendar month containing `month_of`.
pub fn monthly_total(expenses: &[Expense], month_of: NaiveDate) -> f64 {
    total_for_key(expenses, month_key(month_of))
}

/// Projects next month's spending from the reference month and the two before it.
pub fn forecast_next_month(expenses: &[Expense], reference: NaiveDate) -> Forecast {
    let current = month_key(reference);
    // Oldest first, so x = 0, 1, 2 and the projection lands on x = 3. Indexing
    // newest first would extrapolate backwards; keep this order.
    let totals: Vec<f64> = (0..HISTORY_MONTHS)
        .rev()
        .map(|back| total_for_key(expenses, current - back))
        .collect();

    let n = totals.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = totals.iter().sum::<f64>() / n;
    let (numerator, denominator) = totals.iter().enumerate().fold(
        (0.0, 0.0),
        |(num, den), (x, y)| {
            let dx = x as f64 - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        },
    );
    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;
    let prediction = intercept + slope * n;

    let ss_tot: f64 = totals.iter().map(|y| (y - y_mean).powi(2)).sum();
    let ss_res: f64 = totals
        .iter()
        .enumerate()
        .map(|(x, y)| (y - (intercept + slope * x as f64)).powi(2))
        .sum();
    let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };

    let latest = totals[totals.len() - 1];
    Forecast {
        amount: prediction.max(0.0),
        trend: trend(prediction, latest),
        confidence: r_squared.clamp(0.0, 1.0) * 100.0,
    }
}

fn trend(projected: f64, base: f64) -> Trend {
    if base == 0.0 {
        return if projected > 0.0 {
            Trend::Increasing
        } else {
            Trend::Stable
        };
    }
    let change = (projected - base) / base * 100.0;
    if change.abs() < STABLE_BAND_PERCENT {
        Trend::Stable
    } else if change > 0.0 {
        Trend::Increasing
    } else {
        Trend::Decreasing
    }
}
