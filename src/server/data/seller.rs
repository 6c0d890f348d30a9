//! Seller profile repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::seller::{CreateSellerParam, SellerStatus, UpdateSellerProfileParam};

pub struct SellerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SellerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a seller profile in `pending` status.
    ///
    /// # Arguments
    /// - `param` - Owning user, store details and starting commission rate
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored profile
    /// - `Err(DbErr)` - Database error, including a second profile for the same user
    pub async fn create(&self, param: CreateSellerParam) -> Result<entity::seller::Model, DbErr> {
        let now = Utc::now();
        entity::seller::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            store_name: ActiveValue::Set(param.store_name),
            description: ActiveValue::Set(param.description),
            phone: ActiveValue::Set(param.phone),
            business_id: ActiveValue::Set(param.business_id),
            pickup_address: ActiveValue::Set(param.pickup_address),
            status: ActiveValue::Set(SellerStatus::Pending),
            status_note: ActiveValue::Set(None),
            commission_rate_bps: ActiveValue::Set(param.commission_rate_bps),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::seller::Model>, DbErr> {
        entity::prelude::Seller::find_by_id(id).one(self.db).await
    }

    /// Finds the seller profile owned by a user account.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user's profile
    /// - `Ok(None)` - The user never registered as a seller
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::seller::Model>, DbErr> {
        entity::prelude::Seller::find()
            .filter(entity::seller::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Lists sellers newest first, optionally filtered by status.
    pub async fn list(
        &self,
        status: Option<SellerStatus>,
    ) -> Result<Vec<entity::seller::Model>, DbErr> {
        let mut query = entity::prelude::Seller::find();
        if let Some(status) = status {
            query = query.filter(entity::seller::Column::Status.eq(status));
        }
        query
            .order_by_desc(entity::seller::Column::CreatedAt)
            .order_by_desc(entity::seller::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self, status: Option<SellerStatus>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Seller::find();
        if let Some(status) = status {
            query = query.filter(entity::seller::Column::Status.eq(status));
        }
        query.count(self.db).await
    }

    /// Applies the fields present in `param` to the profile.
    ///
    /// # Arguments
    /// - `seller` - Current profile row
    /// - `param` - Store name, description, phone and pickup address; `None` fields are left alone
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated profile
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        seller: entity::seller::Model,
        param: UpdateSellerProfileParam,
    ) -> Result<entity::seller::Model, DbErr> {
        let mut active = seller.into_active_model();
        if let Some(store_name) = param.store_name {
            active.store_name = ActiveValue::Set(store_name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(pickup_address) = param.pickup_address {
            active.pickup_address = ActiveValue::Set(Some(pickup_address));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Sets status and note, optionally replacing the commission rate at the same time.
    ///
    /// # Arguments
    /// - `seller` - Current profile row
    /// - `status` - New status; transition rules are checked by the caller
    /// - `note` - Admin note shown to the seller, cleared when `None`
    /// - `commission_rate_bps` - Replacement rate in basis points, kept when `None`
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated profile
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        seller: entity::seller::Model,
        status: SellerStatus,
        note: Option<String>,
        commission_rate_bps: Option<i32>,
    ) -> Result<entity::seller::Model, DbErr> {
        let mut active = seller.into_active_model();
        active.status = ActiveValue::Set(status);
        active.status_note = ActiveValue::Set(note);
        if let Some(bps) = commission_rate_bps {
            active.commission_rate_bps = ActiveValue::Set(bps);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    pub async fn set_commission_rate(
        &self,
        seller: entity::seller::Model,
        commission_rate_bps: i32,
    ) -> Result<entity::seller::Model, DbErr> {
        let mut active = seller.into_active_model();
        active.commission_rate_bps = ActiveValue::Set(commission_rate_bps);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }
}
