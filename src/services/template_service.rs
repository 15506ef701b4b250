use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{position_of, RecurringTemplate},
    errors::ServiceError,
    storage::RecordStore,
};

/// CRUD operations over the stored recurring templates.
pub struct TemplateService;

impl TemplateService {
    pub fn list(
        store: &impl RecordStore<Record = RecurringTemplate>,
    ) -> Result<Vec<RecurringTemplate>, ServiceError> {
        Ok(store.load_all()?)
    }

    /// Validates and appends a template, returning its identifier.
    pub fn add(
        store: &impl RecordStore<Record = RecurringTemplate>,
        template: RecurringTemplate,
    ) -> Result<Uuid, ServiceError> {
        template.validate()?;
        let mut templates = store.load_all()?;
        let id = template.id;
        templates.push(template);
        store.save_all(&templates)?;
        info!(template = %id, "added recurring expense");
        Ok(id)
    }

    /// Replaces the user-editable fields of a stored template.
    ///
    /// The processing cursor belongs to the materialization engine, so the
    /// stored `last_processed` is kept whatever the edited copy carries.
    pub fn update(
        store: &impl RecordStore<Record = RecurringTemplate>,
        mut template: RecurringTemplate,
    ) -> Result<(), ServiceError> {
        let mut templates = store.load_all()?;
        let idx = position_of(&templates, template.id)
            .ok_or(ServiceError::TemplateNotFound(template.id))?;
        template.last_processed = templates[idx].last_processed;
        template.validate()?;
        templates[idx] = template;
        store.save_all(&templates)?;
        Ok(())
    }

    /// Deletes a template. Expenses already materialized from it are kept.
    pub fn remove(
        store: &impl RecordStore<Record = RecurringTemplate>,
        id: Uuid,
    ) -> Result<RecurringTemplate, ServiceError> {
        let mut templates = store.load_all()?;
        let idx = position_of(&templates, id).ok_or(ServiceError::TemplateNotFound(id))?;
        let removed = templates.remove(idx);
        store.save_all(&templates)?;
        info!(template = %id, "removed recurring expense");
        Ok(removed)
    }
}
