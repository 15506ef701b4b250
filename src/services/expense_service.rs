use uuid::Uuid;

use crate::{
    domain::{position_of, Expense},
    errors::ServiceError,
    storage::RecordStore,
};

/// CRUD operations over stored expenses. Quota and size limits are enforced
/// by the expense store on every save.
pub struct ExpenseService;

impl ExpenseService {
    pub fn list(store: &impl RecordStore<Record = Expense>) -> Result<Vec<Expense>, ServiceError> {
        Ok(store.load_all()?)
    }

    pub fn add(
        store: &impl RecordStore<Record = Expense>,
        expense: Expense,
    ) -> Result<Uuid, ServiceError> {
        expense.validate()?;
        let mut expenses = store.load_all()?;
        let id = expense.id;
        expenses.push(expense);
        store.save_all(&expenses)?;
        Ok(id)
    }

    pub fn update(
        store: &impl RecordStore<Record = Expense>,
        expense: Expense,
    ) -> Result<(), ServiceError> {
        expense.validate()?;
        let mut expenses = store.load_all()?;
        let idx =
            position_of(&expenses, expense.id).ok_or(ServiceError::ExpenseNotFound(expense.id))?;
        expenses[idx] = expense;
        store.save_all(&expenses)?;
        Ok(())
    }

    pub fn remove(
        store: &impl RecordStore<Record = Expense>,
        id: Uuid,
    ) -> Result<Expense, ServiceError> {
        let mut expenses = store.load_all()?;
        let idx = position_of(&expenses, id).ok_or(ServiceError::ExpenseNotFound(id))?;
        let removed = expenses.remove(idx);
        store.save_all(&expenses)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        domain::{ExpenseCategory, PaymentMethod},
        errors::StoreError,
        storage::{ExpenseStore, MemoryStore, StoreLimits},
    };

    fn taxi() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            23.4,
            ExpenseCategory::Travel,
            PaymentMethod::Cash,
            "Taxi to airport",
        )
    }

    #[test]
    fn add_update_remove_cycle() {
        let backend = MemoryStore::new();
        let store = ExpenseStore::new(&backend);
        let id = ExpenseService::add(&store, taxi()).unwrap();

        let mut edited = ExpenseService::list(&store).unwrap().remove(0);
        edited.notes = Some("client visit".into());
        edited.tax_deductible = Some(true);
        ExpenseService::update(&store, edited).unwrap();
        let stored = ExpenseService::list(&store).unwrap();
        assert_eq!(stored[0].notes.as_deref(), Some("client visit"));

        ExpenseService::remove(&store, id).unwrap();
        assert!(ExpenseService::list(&store).unwrap().is_empty());
    }

    #[test]
    fn add_surfaces_quota_errors() {
        let backend = MemoryStore::new();
        let limits = StoreLimits {
            max_entries: 1,
            ..StoreLimits::default()
        };
        let store = ExpenseStore::with_limits(&backend, limits);
        ExpenseService::add(&store, taxi()).unwrap();
        let err = ExpenseService::add(&store, taxi()).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Store(StoreError::QuotaExceeded { count: 2, limit: 1 })
        ));
        assert_eq!(ExpenseService::list(&store).unwrap().len(), 1);
    }

    #[test]
    fn remove_unknown_expense_fails() {
        let backend = MemoryStore::new();
        let store = ExpenseStore::new(&backend);
        assert!(matches!(
            ExpenseService::remove(&store, Uuid::new_v4()),
            Err(ServiceError::ExpenseNotFound(_))
        ));
    }
}
