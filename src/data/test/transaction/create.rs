use super::*;

/// Tests appending a transaction row.
///
/// Expected: Ok with the requested amount, type and description recorded
#[tokio::test]
async fn records_requested_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);
    let transaction = repo
        .create(&AddBalanceParam {
            description: Some("Bought a sword".to_string()),
            ..param(-80, "shop")
        })
        .await?;

    assert_eq!(transaction.server_id, 1);
    assert_eq!(transaction.user_id, 2);
    assert_eq!(transaction.amount, -80);
    assert_eq!(transaction.kind, "shop");
    assert_eq!(transaction.description.as_deref(), Some("Bought a sword"));

    Ok(())
}
