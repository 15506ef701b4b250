//! Read-only summaries computed from stored expenses and budgets.

pub mod budget_status;
pub mod forecast;
pub mod summary;

use chrono::{Datelike, NaiveDate};

use crate::domain::Expense;

pub use budget_status::{budget_warnings, calculate_budget_status, BudgetStatus, SpendingLevel};
pub use forecast::{forecast_next_month, monthly_total, Forecast, Trend};
pub use summary::{
    category_trends, monthly_change, monthly_report, monthly_trend, CategoryTrend, MonthTotal,
    MonthlyReport, DASHBOARD_TREND_MONTHS,
};

/// Months since year zero; equal for two dates in the same calendar month.
pub(crate) fn month_key(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Sum of the expenses whose date falls in the month identified by `key`.
pub(crate) fn total_for_key(expenses: &[Expense], key: i32) -> f64 {
    expenses
        .iter()
        .filter(|e| month_key(e.date) == key)
        .map(|e| e.amount)
        .sum()
}
