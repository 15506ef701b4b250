//! Expense records, recurring templates, budgets and their shared enumerations.

pub mod budget;
pub mod category;
pub mod common;
pub mod expense;
pub mod frequency;
pub mod template;

pub use budget::{Budget, BudgetPeriod};
pub use category::{ExpenseCategory, PaymentMethod};
pub use common::{position_of, Displayable, Identifiable};
pub use expense::Expense;
pub use frequency::Frequency;
pub use template::RecurringTemplate;
