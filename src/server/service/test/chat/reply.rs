use super::*;

/// Tests a configured model answering with catalog context.
///
/// Expected: Ok with the model's reply, the matching product suggested and named in the prompt
#[tokio::test]
async fn passes_matching_products_to_model() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db)
        .name("Linen Shirt")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .name("Denim Jacket")
        .category("outerwear")
        .build()
        .await?;

    let model = ScriptedChatModel::replying("Try the linen shirt in white.");
    let reply = ChatService::new(db, Some(&model), "INR")
        .chat(ask("Any linen for summer?"))
        .await?;

    assert_eq!(reply.reply, "Try the linen shirt in white.");
    assert_eq!(reply.products.len(), 1);
    assert_eq!(reply.products[0].name, "Linen Shirt");
    assert!(model.prompts()[0].contains("Linen Shirt"));

    Ok(())
}

/// Tests chatting without a model and with a failing one.
///
/// Expected: Ok with the fallback reply both times
#[tokio::test]
async fn falls_back_without_working_model() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unconfigured = ChatService::new(db, None, "INR")
        .chat(ask("Do you sell sarees?"))
        .await?;
    let model = ScriptedChatModel::failing();
    let failing = ChatService::new(db, Some(&model), "INR")
        .chat(ask("Do you sell sarees?"))
        .await?;

    assert_eq!(unconfigured.reply, FALLBACK_REPLY);
    assert_eq!(failing.reply, FALLBACK_REPLY);

    Ok(())
}
