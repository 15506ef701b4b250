//! Month-over-month figures shown on the dashboard.

use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate};

use crate::domain::{Expense, ExpenseCategory};

use super::{month_key, total_for_key};

/// Number of months in the dashboard spending series.
pub const DASHBOARD_TREND_MONTHS: u32 = 6;

/// Spending in one category during the reference month and the month before.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTrend {
    pub category: ExpenseCategory,
    pub current_month: f64,
    pub previous_month: f64,
    /// Change against the previous month in percent, 0 when that month is empty.
    pub percentage_change: f64,
}

/// Total spending during one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTotal {
    /// First day of the month.
    pub month: NaiveDate,
    pub amount: f64,
}

/// Total and per-category breakdown of one calendar month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyReport {
    pub total: f64,
    /// Categories without expenses in the month are absent.
    pub categories: HashMap<ExpenseCategory, f64>,
}

/// Percentage change of the reference month's total against the month
/// before it. Returns 0 when nothing was spent in the previous month.
pub fn monthly_change(expenses: &[Expense], reference: NaiveDate) -> f64 {
    let current = month_key(reference);
    percentage_change(
        total_for_key(expenses, current),
        total_for_key(expenses, current - 1),
    )
}

/// Current and previous month totals for every category, in
/// [`ExpenseCategory::ALL`] order.
pub fn category_trends(expenses: &[Expense], reference: NaiveDate) -> Vec<CategoryTrend> {
    let current = month_key(reference);
    ExpenseCategory::ALL
        .iter()
        .map(|&category| {
            let total = |key: i32| -> f64 {
                expenses
                    .iter()
                    .filter(|e| e.category == category && month_key(e.date) == key)
                    .map(|e| e.amount)
                    .sum()
            };
            let current_month = total(current);
            let previous_month = total(current - 1);
            CategoryTrend {
                category,
                current_month,
                previous_month,
                percentage_change: percentage_change(current_month, previous_month),
            }
        })
        .collect()
}

/// Monthly totals for the `months` calendar months ending with the one
/// containing `reference`, oldest first.
pub fn monthly_trend(
    expenses: &[Expense],
    reference: NaiveDate,
    months: u32,
) -> Vec<MonthTotal> {
    let first_of_month = reference.with_day(1).unwrap_or(reference);
    (0..months)
        .rev()
        .filter_map(|back| first_of_month.checked_sub_months(Months::new(back)))
        .map(|month| MonthTotal {
            month,
            amount: total_for_key(expenses, month_key(month)),
        })
        .collect()
}

/// Breaks down the spending of the calendar month containing `month_of` by category.
pub fn monthly_report(expenses: &[Expense], month_of: NaiveDate) -> MonthlyReport {
    let key = month_key(month_of);
    expenses
        .iter()
        .filter(|e| month_key(e.date) == key)
        .fold(MonthlyReport::default(), |mut report, expense| {
            report.total += expense.amount;
            *report.categories.entry(expense.category).or_insert(0.0) += expense.amount;
            report
        })
}

fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}
