//! Side-by-side product comparison.

use crate::{
    model::compare::{CompareDto, CompareProductDto},
    server::model::product::{discount_percent, Product},
};

/// Most products a comparison list holds.
pub const MAX_COMPARE_ITEMS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct ComparedProduct {
    pub product: Product,
    pub effective_price: i64,
}

impl ComparedProduct {
    pub fn into_dto(self) -> CompareProductDto {
        let product = self.product;
        CompareProductDto {
            rating: product.rating(),
            image: product.first_image(),
            discount_percent: discount_percent(product.mrp, self.effective_price),
            in_stock: product.stock > 0,
            id: product.id,
            name: product.name,
            brand: product.brand,
            category: product.category,
            price: product.price,
            effective_price: self.effective_price,
            mrp: product.mrp,
            review_count: product.review_count,
            sizes: product.sizes,
            colors: product.colors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    pub products: Vec<ComparedProduct>,
}

impl Comparison {
    pub fn into_dto(self) -> CompareDto {
        CompareDto {
            products: self
                .products
                .into_iter()
                .map(ComparedProduct::into_dto)
                .collect(),
            max_items: MAX_COMPARE_ITEMS,
        }
    }
}
