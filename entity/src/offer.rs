use sea_orm::entity::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum OfferType {
    #[sea_orm(string_value = "percentage")]
    Percentage,
    #[sea_orm(string_value = "fixed")]
    Fixed,
    #[sea_orm(string_value = "bogo")]
    Bogo,
    #[sea_orm(string_value = "free_shipping")]
    FreeShipping,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "offer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Uppercase redemption code; automatic offers may have none.
    #[sea_orm(unique)]
    pub code: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub offer_type: OfferType,
    /// Percent for `percentage`, minor units for `fixed`, unused otherwise.
    pub value: i64,
    pub min_order_value: i64,
    pub max_discount: Option<i64>,
    pub starts_at: DateTimeUtc,
    pub ends_at: DateTimeUtc,
    pub usage_limit: Option<i32>,
    pub used_count: i32,
    pub is_automatic: bool,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
