use super::*;

/// Tests that product names come first, then brands, then categories, capped at eight.
///
/// Expected: six products, then both brands alphabetically; the category is cut off
#[tokio::test]
async fn products_then_brands_then_categories_up_to_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut named = HashSet::new();
    for i in 0..6 {
        let product = ProductFactory::new(db)
            .name(format!("Linen Shirt {}", i))
            .build()
            .await?;
        named.insert(product.id);
    }
    ProductFactory::new(db)
        .name("Kurta")
        .brand("Linenwala")
        .build()
        .await?;
    ProductFactory::new(db)
        .name("Kurta")
        .brand("Linen House")
        .build()
        .await?;
    ProductFactory::new(db)
        .name("Co-ord")
        .category("linen-sets")
        .build()
        .await?;

    let suggestions = SearchService::new(db).autocomplete("  LINEN ").await?;

    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    let kinds: Vec<SuggestionKind> = suggestions.iter().map(|s| s.kind).collect();
    assert_eq!(&kinds[..6], &[SuggestionKind::Product; 6]);
    assert_eq!(&kinds[6..], &[SuggestionKind::Brand; 2]);
    let products: HashSet<i32> = suggestions.iter().filter_map(|s| s.product_id).collect();
    assert_eq!(products, named);
    assert_eq!(suggestions[6].text, "Linen House");
    assert_eq!(suggestions[7].text, "Linenwala");

    Ok(())
}

/// Tests fill-up with categories and the exclusion of archived products.
///
/// Expected: the active product, then its category; the archived product and its brand are
/// not suggested
#[tokio::test]
async fn skips_archived_products_and_fills_with_categories() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = ProductFactory::new(db)
        .name("Denim Jacket")
        .category("denim")
        .build()
        .await?;
    ProductFactory::new(db)
        .name("Denim Shorts")
        .brand("Denimworks")
        .status(ProductStatus::Archived)
        .build()
        .await?;

    let suggestions = SearchService::new(db).autocomplete("denim").await?;

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].kind, SuggestionKind::Product);
    assert_eq!(suggestions[0].product_id, Some(active.id));
    assert_eq!(suggestions[1].kind, SuggestionKind::Category);
    assert_eq!(suggestions[1].text, "denim");

    Ok(())
}

/// Tests a query shorter than two characters.
///
/// Expected: no suggestions
#[tokio::test]
async fn short_query_suggests_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ProductFactory::new(db).name("Linen Shirt").build().await?;

    let suggestions = SearchService::new(db).autocomplete(" l ").await?;

    assert!(suggestions.is_empty());

    Ok(())
}
