//! Shopping cart lines priced against the live catalog.

use crate::{
    model::cart::{AddCartItemDto, CartDto, CartItemDto},
    server::model::product::Product,
};

/// Most units of a single line a cart may hold.
pub const MAX_LINE_QUANTITY: i32 = 10;

/// Minimal priced line used by offer calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedLine {
    pub unit_price: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: i32,
    pub product: Product,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
    /// Price after any live flash sale.
    pub unit_price: i64,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }

    pub fn priced(&self) -> PricedLine {
        PricedLine {
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }

    pub fn into_dto(self) -> CartItemDto {
        let line_total = self.line_total();
        CartItemDto {
            id: self.id,
            product: self.product.summary(self.unit_price),
            quantity: self.quantity,
            size: self.size,
            color: self.color,
            unit_price: self.unit_price,
            line_total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn priced_lines(&self) -> Vec<PricedLine> {
        self.lines.iter().map(CartLine::priced).collect()
    }

    pub fn into_dto(self) -> CartDto {
        let subtotal = self.subtotal();
        let item_count = self.item_count();
        CartDto {
            items: self.lines.into_iter().map(CartLine::into_dto).collect(),
            subtotal,
            item_count,
        }
    }
}

/// Parameters for adding a product to the cart.
#[derive(Debug, Clone)]
pub struct AddCartItemParam {
    pub product_id: i32,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl From<AddCartItemDto> for AddCartItemParam {
    fn from(dto: AddCartItemDto) -> Self {
        Self {
            product_id: dto.product_id,
            quantity: dto.quantity,
            size: dto.size,
            color: dto.color,
        }
    }
}

/// Empty option strings are treated as absent so "" and null match the same line.
pub fn normalize_variant(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
