use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flash_sale_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flash_sale_id: i32,
    pub product_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flash_sale::Entity",
        from = "Column::FlashSaleId",
        to = "super::flash_sale::Column::Id",
        on_delete = "Cascade"
    )]
    FlashSale,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::flash_sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlashSale.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
