use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{position_of, Budget},
    errors::ServiceError,
    storage::RecordStore,
};

/// CRUD operations over stored budgets.
pub struct BudgetService;

impl BudgetService {
    pub fn list(store: &impl RecordStore<Record = Budget>) -> Result<Vec<Budget>, ServiceError> {
        Ok(store.load_all()?)
    }

    pub fn add(
        store: &impl RecordStore<Record = Budget>,
        budget: Budget,
    ) -> Result<Uuid, ServiceError> {
        budget.validate()?;
        let mut budgets = store.load_all()?;
        let id = budget.id;
        budgets.push(budget);
        store.save_all(&budgets)?;
        info!(budget = %id, "added budget");
        Ok(id)
    }

    pub fn update(
        store: &impl RecordStore<Record = Budget>,
        budget: Budget,
    ) -> Result<(), ServiceError> {
        budget.validate()?;
        let mut budgets = store.load_all()?;
        let idx =
            position_of(&budgets, budget.id).ok_or(ServiceError::BudgetNotFound(budget.id))?;
        budgets[idx] = budget;
        store.save_all(&budgets)?;
        Ok(())
    }

    pub fn remove(
        store: &impl RecordStore<Record = Budget>,
        id: Uuid,
    ) -> Result<Budget, ServiceError> {
        let mut budgets = store.load_all()?;
        let idx = position_of(&budgets, id).ok_or(ServiceError::BudgetNotFound(id))?;
        let removed = budgets.remove(idx);
        store.save_all(&budgets)?;
        info!(budget = %id, "removed budget");
        Ok(removed)
    }
}
