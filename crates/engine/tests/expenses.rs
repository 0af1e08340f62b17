use engine::{Category, Engine, EngineError, ExpenseDraft, ExpenseFilter};

fn draft(category: &str, amount: f64, date: &str) -> ExpenseDraft {
    ExpenseDraft {
        category: Some(category.to_string()),
        amount: Some(amount),
        date: Some(date.to_string()),
    }
}

async fn seeded_engine() -> Engine {
    let engine = Engine::new();
    for submission in [
        draft("Food", 10.0, "2024-01-10"),
        draft("Food", 5.0, "2024-02-01"),
        draft("Travel", 20.0, "2024-01-20"),
    ] {
        engine.add_expense(submission).await.unwrap();
    }
    engine
}

#[tokio::test]
async fn unfiltered_list_returns_submissions_in_order() {
    let engine = seeded_engine().await;

    let expenses = engine.expenses(&ExpenseFilter::default()).await;
    assert_eq!(expenses.len(), 3);
    assert_eq!(expenses[0].category, Category::Food);
    assert_eq!(expenses[0].amount, 10.0);
    assert_eq!(expenses[1].amount, 5.0);
    assert_eq!(expenses[2].category, Category::Travel);
}

#[tokio::test]
async fn rejected_submissions_leave_the_store_untouched() {
    let engine = Engine::new();

    assert_eq!(
        engine.add_expense(draft("Food", 0.0, "2024-01-01")).await,
        Err(EngineError::InvalidAmount)
    );
    assert_eq!(
        engine.add_expense(draft("Food", -5.0, "2024-01-01")).await,
        Err(EngineError::InvalidAmount)
    );
    assert_eq!(
        engine
            .add_expense(draft("Unknown", 10.0, "2024-01-01"))
            .await,
        Err(EngineError::InvalidCategory)
    );
    assert_eq!(
        engine
            .add_expense(ExpenseDraft {
                category: Some("Food".to_string()),
                amount: Some(10.0),
                date: None,
            })
            .await,
        Err(EngineError::MissingFields)
    );

    assert!(engine.snapshot().await.is_empty());
}

#[tokio::test]
async fn summary_totals_per_category() {
    let engine = seeded_engine().await;

    let summary = engine.summary().await;
    assert_eq!(summary.total_amount, 35.0);
    assert_eq!(summary.by_category.get(&Category::Food), Some(&15.0));
    assert_eq!(summary.by_category.get(&Category::Travel), Some(&20.0));
}

#[tokio::test]
async fn summary_of_empty_store_is_zero() {
    let engine = Engine::new();

    let summary = engine.summary().await;
    assert_eq!(summary.total_amount, 0.0);
    assert!(summary.by_category.is_empty());
}

#[tokio::test]
async fn category_filter_preserves_order() {
    let engine = seeded_engine().await;

    let filter = ExpenseFilter {
        category: Some(Category::Food),
        ..Default::default()
    };
    let expenses = engine.expenses(&filter).await;
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].date, "2024-01-10");
    assert_eq!(expenses[1].date, "2024-02-01");
}

#[tokio::test]
async fn date_range_filter_is_inclusive_and_both_sided() {
    let engine = seeded_engine().await;

    let filter = ExpenseFilter {
        start_date: Some("2024-01-01".to_string()),
        end_date: Some("2024-01-31".to_string()),
        ..Default::default()
    };
    let expenses = engine.expenses(&filter).await;
    assert_eq!(expenses.len(), 2);
    assert!(expenses.iter().all(|e| e.date.starts_with("2024-01")));

    // One bound alone does not filter.
    let filter = ExpenseFilter {
        start_date: Some("2024-01-01".to_string()),
        ..Default::default()
    };
    assert_eq!(engine.expenses(&filter).await.len(), 3);
}
