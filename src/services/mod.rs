//! Load-mutate-save helpers the UI layer uses for manual edits.

pub mod budget_service;
pub mod expense_service;
pub mod template_service;

pub use budget_service::BudgetService;
pub use expense_service::ExpenseService;
pub use template_service::TemplateService;
