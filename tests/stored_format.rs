mod common;

use common::date;
use expense_core::{
    domain::{Budget, BudgetPeriod, ExpenseCategory, Frequency, PaymentMethod, RecurringTemplate},
    ids::SequentialIds,
    recurring::Materializer,
    storage::{
        BudgetStore, ExpenseStore, KeyValueStore, MemoryStore, RecordStore, TemplateStore,
        BUDGETS_KEY, EXPENSES_KEY, TEMPLATES_KEY,
    },
    time::FixedClock,
};
use uuid::Uuid;

/// Pretty-prints a stored payload with keys in sorted order.
fn pretty(raw: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(raw).expect("stored value is json");
    serde_json::to_string_pretty(&value).expect("re-encode")
}

#[test]
fn materialized_records_keep_the_stored_field_names() {
    let backend = MemoryStore::new();
    let mut subscription = RecurringTemplate::new(
        49.99,
        ExpenseCategory::OfficeSupplies,
        PaymentMethod::CreditCard,
        "Design software",
        Frequency::Quarterly,
        date(2024, 1, 15),
    );
    subscription.id = Uuid::from_u128(0xA);
    TemplateStore::new(&backend).save_all(&[subscription]).unwrap();

    let materializer = Materializer::new(
        &backend,
        FixedClock::on(date(2024, 5, 1)),
        SequentialIds::starting_at(1),
    );
    materializer.materialize_due_now().unwrap();

    let templates = pretty(&backend.get(TEMPLATES_KEY).unwrap().unwrap());
    insta::assert_snapshot!(templates, @r###"
    [
      {
        "amount": 49.99,
        "category": "Office Supplies",
        "description": "Design software",
        "frequency": "Quarterly",
        "id": "00000000-0000-0000-0000-00000000000a",
        "lastProcessed": "2024-04-15",
        "payment_method": "Credit Card",
        "startDate": "2024-01-15"
      }
    ]
    "###);

    let expenses = pretty(&backend.get(EXPENSES_KEY).unwrap().unwrap());
    insta::assert_snapshot!(expenses, @r###"
    [
      {
        "amount": 49.99,
        "category": "Office Supplies",
        "date": "2024-04-15",
        "description": "Design software",
        "id": "00000000-0000-0000-0000-000000000001",
        "is_recurring": true,
        "payment_method": "Credit Card",
        "recurring_id": "00000000-0000-0000-0000-00000000000a"
      }
    ]
    "###);
}

#[test]
fn records_written_by_earlier_versions_still_load() {
    let backend = MemoryStore::new();
    backend
        .set(
            TEMPLATES_KEY,
            r#"[{"id":"6f1c8d1e-9a8c-4a57-8f3e-1b0a2c3d4e5f","amount":120,"category":"Travel",
                "description":"Rail pass","payment_method":"Debit Card","frequency":"Monthly",
                "startDate":"2023-12-31","endDate":"2024-12-31"}]"#,
        )
        .unwrap();
    backend
        .set(
            EXPENSES_KEY,
            r#"[{"id":"0b9d4f5e-2c3a-4d6b-9e8f-7a6b5c4d3e2f","date":"2024-02-02","amount":8.5,
                "category":"Meals","description":"Coffee","payment_method":"Cash",
                "tax_deductible":true,"notes":"client meeting","tags":["client","q1"]}]"#,
        )
        .unwrap();

    let templates = TemplateStore::new(&backend).load_all().unwrap();
    assert_eq!(templates[0].end_date, Some(date(2024, 12, 31)));
    assert_eq!(templates[0].last_processed, None);
    assert_eq!(templates[0].amount, 120.0);

    let expenses = ExpenseStore::new(&backend).load_all().unwrap();
    assert!(!expenses[0].is_recurring);
    assert_eq!(expenses[0].recurring_id, None);
    assert_eq!(expenses[0].tax_deductible, Some(true));
    assert_eq!(expenses[0].tags, vec!["client".to_string(), "q1".to_string()]);
}

#[test]
fn budgets_use_the_camel_case_threshold() {
    let backend = MemoryStore::new();
    let mut budget = Budget::new(ExpenseCategory::Meals, 300.0, BudgetPeriod::Monthly);
    budget.id = Uuid::from_u128(0xB);
    BudgetStore::new(&backend).save_all(&[budget]).unwrap();

    let stored = pretty(&backend.get(BUDGETS_KEY).unwrap().unwrap());
    insta::assert_snapshot!(stored, @r###"
    [
      {
        "amount": 300.0,
        "category": "Meals",
        "id": "00000000-0000-0000-0000-00000000000b",
        "notifications": true,
        "period": "Monthly",
        "warningThreshold": 80.0
      }
    ]
    "###);
}
