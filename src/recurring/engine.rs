//! Turns due occurrences of recurring templates into persisted expenses.

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::{
    domain::{Displayable, Expense, RecurringTemplate},
    errors::StoreError,
    ids::IdGenerator,
    storage::{ExpenseStore, KeyValueStore, RecordStore, Result, StoreLimits, TemplateStore},
    time::Clock,
};

use super::occurrences::occurrences;

/// Counters describing one materialization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeSummary {
    pub scanned: usize,
    pub advanced: usize,
    pub ended: usize,
    pub invalid: usize,
    pub created: usize,
}

/// Builds the expenses due before `as_of` and moves each template cursor to
/// its last materialized occurrence.
///
/// Templates failing validation or already ended are left exactly as they
/// were. Expenses come out grouped by template in slice order, and in date
/// order within a template.
pub fn plan_due(
    templates: &mut [RecurringTemplate],
    as_of: NaiveDate,
    ids: &impl IdGenerator,
) -> (Vec<Expense>, MaterializeSummary) {
    let mut created = Vec::new();
    let mut summary = MaterializeSummary {
        scanned: templates.len(),
        ..MaterializeSummary::default()
    };

    for template in templates.iter_mut() {
        if let Err(err) = template.validate() {
            warn!(
                template = %template.id,
                label = %template.display_label(),
                error = %err,
                "skipping invalid recurring expense"
            );
            summary.invalid += 1;
            continue;
        }
        if template.has_ended(as_of) {
            summary.ended += 1;
            continue;
        }

        let mut last = None;
        for date in occurrences(template, as_of) {
            created.push(Expense::from_template(template, ids.next_id(), date));
            last = Some(date);
        }

        if let Some(date) = last {
            debug!(
                template = %template.id,
                from = %template.cursor(),
                to = %date,
                "advancing recurring expense cursor"
            );
            template.last_processed = Some(date);
            summary.advanced += 1;
        }
    }

    summary.created = created.len();
    (created, summary)
}

/// Materializes due recurring expenses against a key-value backend.
///
/// Templates and expenses share `backend`; the clock supplies "today" for
/// [`Materializer::materialize_due_now`] and `ids` hands out expense ids.
pub struct Materializer<S, C, I> {
    backend: S,
    limits: StoreLimits,
    clock: C,
    ids: I,
}

impl<S, C, I> Materializer<S, C, I>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    pub fn new(backend: S, clock: C, ids: I) -> Self {
        Self {
            backend,
            limits: StoreLimits::default(),
            clock,
            ids,
        }
    }

    pub fn with_limits(mut self, limits: StoreLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Materializes everything due before the clock's current date.
    pub fn materialize_due_now(&self) -> Result<Vec<Expense>> {
        self.materialize_due(self.clock.today())
    }

    /// Materializes every occurrence due strictly before `as_of` and returns
    /// the newly created expenses.
    ///
    /// When nothing is due the stores are not written at all. Otherwise the
    /// templates are written once, then the expenses once. The two writes
    /// behave as one unit: limit violations are detected before either write,
    /// a failed template write skips the expense write, and a failed expense
    /// write restores the templates as they were loaded.
    pub fn materialize_due(&self, as_of: NaiveDate) -> Result<Vec<Expense>> {
        let template_store = TemplateStore::new(&self.backend);
        let expense_store = ExpenseStore::with_limits(&self.backend, self.limits);

        let loaded = template_store.load_all()?;
        let mut templates = loaded.clone();
        let (created, summary) = plan_due(&mut templates, as_of, &self.ids);

        if created.is_empty() {
            debug!(%as_of, scanned = summary.scanned, "no recurring expenses due");
            return Ok(created);
        }

        let mut expenses = expense_store.load_all()?;
        expenses.extend(created.iter().cloned());
        let encoded = expense_store.encode(&expenses)?;

        template_store.save_all(&templates)?;
        if let Err(cause) = expense_store.write_encoded(&encoded) {
            warn!(error = %cause, "expense write failed; restoring recurring templates");
            if let Err(rollback) = template_store.save_all(&loaded) {
                error!(
                    error = %rollback,
                    "could not restore recurring templates after failed expense write"
                );
                return Err(StoreError::RollbackFailed {
                    cause: Box::new(cause),
                    rollback: Box::new(rollback),
                });
            }
            return Err(cause);
        }

        info!(
            %as_of,
            scanned = summary.scanned,
            advanced = summary.advanced,
            ended = summary.ended,
            invalid = summary.invalid,
            created = summary.created,
            stored = encoded.count(),
            "materialized recurring expenses"
        );
        Ok(created)
    }
}
