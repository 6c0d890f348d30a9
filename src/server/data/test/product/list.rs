use super::*;
use test_utils::factory::product::ProductFactory;

/// Tests that archived products never appear in storefront listings.
///
/// Expected: Ok with only the active product
#[tokio::test]
async fn excludes_archived_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_product(db).await?;
    ProductFactory::new(db).status(ProductStatus::Archived).build().await?;

    let repo = ProductRepository::new(db);
    let (products, total) = repo.list(&ProductFilter::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].id, active.id);

    Ok(())
}

/// Tests combining category and price filters.
///
/// Expected: Ok with only products in the category and price range
#[tokio::test]
async fn filters_by_category_and_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cheap_dress = ProductFactory::new(db)
        .category("dresses")
        .price(1_999)
        .mrp(2_999)
        .build()
        .await?;
    ProductFactory::new(db)
        .category("dresses")
        .price(9_999)
        .mrp(9_999)
        .build()
        .await?;
    ProductFactory::new(db)
        .category("shoes")
        .price(1_999)
        .mrp(1_999)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let (products, total) = repo
        .list(&ProductFilter {
            category: Some("dresses".to_string()),
            max_price: Some(5_000),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].id, cheap_dress.id);

    Ok(())
}

/// Tests searching across name, brand and category.
///
/// Expected: Ok with products matching the term in any of the three columns
#[tokio::test]
async fn searches_name_brand_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ProductFactory::new(db).name("Denim jacket").build().await?;
    ProductFactory::new(db).brand("DenimCo").build().await?;
    ProductFactory::new(db).category("denim").build().await?;
    ProductFactory::new(db).name("Silk scarf").build().await?;

    let repo = ProductRepository::new(db);
    let (_, total) = repo
        .list(&ProductFilter {
            search: Some("denim".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);

    Ok(())
}

/// Tests sorting by price ascending and paging.
///
/// Expected: Ok with the second cheapest product alone on page 1 of size 1
#[tokio::test]
async fn sorts_by_price_and_paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for price in [3_000, 1_000, 2_000] {
        ProductFactory::new(db).price(price).mrp(price).build().await?;
    }

    let repo = ProductRepository::new(db);
    let (products, total) = repo
        .list(&ProductFilter {
            sort: ProductSort::PriceAsc,
            page: 1,
            per_page: 1,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].price, 2_000);

    Ok(())
}

/// Tests sorting by average rating rather than total stars.
///
/// Expected: Ok with the 5.0 average ahead of the 4.0 average that has more stars
#[tokio::test]
async fn sorts_by_average_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let many_reviews = factory::create_product(db).await?;
    let perfect = factory::create_product(db).await?;
    let repo = ProductRepository::new(db);
    for _ in 0..3 {
        repo.add_rating(many_reviews.id, 4).await?;
    }
    repo.add_rating(perfect.id, 5).await?;

    let (products, _) = repo
        .list(&ProductFilter {
            sort: ProductSort::Rating,
            ..Default::default()
        })
        .await?;

    assert_eq!(products[0].id, perfect.id);
    assert_eq!(products[1].id, many_reviews.id);

    Ok(())
}
