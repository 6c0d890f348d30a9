use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    config::Config,
    data::{
        commission::CommissionRepository, order::OrderRepository, product::ProductRepository,
        seller::SellerRepository, wallet::WalletRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        notification::{CreateNotificationParam, NotificationKind},
        product::Product,
        seller::{
            validate_commission_rate, CreateSellerParam, Seller, SellerDashboard,
            SellerRegisterParam, SellerSession, SellerStatus, UpdateSellerProfileParam,
            LOW_STOCK_THRESHOLD,
        },
        user::Role,
    },
    service::{auth::AuthService, notification::NotificationService},
};

pub struct SellerService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> SellerService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Creates a seller account with a pending store profile and signs it in.
    ///
    /// The store cannot list products until an admin approves it.
    pub async fn register(&self, param: SellerRegisterParam) -> Result<SellerSession, AppError> {
        let auth = AuthService::new(self.db, self.config);
        let repo = SellerRepository::new(self.db);

        let user = auth
            .create_user(
                param.name,
                param.email,
                &param.password,
                Role::Seller,
                param.phone.clone(),
            )
            .await?;
        let seller = repo
            .create(CreateSellerParam {
                user_id: user.id,
                store_name: param.store_name,
                description: param.description,
                phone: param.phone,
                business_id: param.business_id,
                pickup_address: param.pickup_address,
                commission_rate_bps: self.config.default_commission_bps,
            })
            .await?;
        let seller = Seller::from_entity(seller);

        tracing::info!("Seller {} registered store {}", seller.id, seller.store_name);

        Ok(SellerSession {
            token: auth.issue_token(&user)?,
            user,
            seller,
        })
    }

    /// Signs in through the seller portal.
    ///
    /// # Returns
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccessDenied)` - The account is not a seller
    pub async fn login(&self, email: &str, password: &str) -> Result<SellerSession, AppError> {
        let auth = AuthService::new(self.db, self.config);

        let user = auth.authenticate(email, password).await?;
        if user.role != Role::Seller {
            return Err(AuthError::AccessDenied(
                user.id,
                "Seller login attempted by a non-seller account".to_string(),
            )
            .into());
        }
        let seller = self.profile(user.id).await?;

        Ok(SellerSession {
            token: auth.issue_token(&user)?,
            user,
            seller,
        })
    }

    /// Gets the store profile of a seller-role user.
    pub async fn profile(&self, user_id: i32) -> Result<Seller, AppError> {
        let repo = SellerRepository::new(self.db);

        match repo.find_by_user_id(user_id).await? {
            Some(seller) => Ok(Seller::from_entity(seller)),
            None => Err(AppError::not_found("Seller profile not found")),
        }
    }

    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateSellerProfileParam,
    ) -> Result<Seller, AppError> {
        let repo = SellerRepository::new(self.db);

        let Some(existing) = repo.find_by_user_id(user_id).await? else {
            return Err(AppError::not_found("Seller profile not found"));
        };

        let seller = repo.update_profile(existing, param).await?;

        Ok(Seller::from_entity(seller))
    }

    /// Gathers catalog, order and earnings figures for the seller portal.
    pub async fn dashboard(&self, seller: &Seller) -> Result<SellerDashboard, AppError> {
        let product_repo = ProductRepository::new(self.db);
        let order_repo = OrderRepository::new(self.db);
        let commission_repo = CommissionRepository::new(self.db);
        let wallet_repo = WalletRepository::new(self.db);

        let low_stock = product_repo
            .low_stock_by_seller(seller.id, LOW_STOCK_THRESHOLD)
            .await?
            .into_iter()
            .map(Product::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        let wallet_balance = wallet_repo
            .find_by_user(seller.user_id)
            .await?
            .map(|wallet| wallet.balance)
            .unwrap_or(0);

        Ok(SellerDashboard {
            product_count: product_repo.count_by_seller(seller.id, false).await?,
            active_product_count: product_repo.count_by_seller(seller.id, true).await?,
            order_count: order_repo.count_for_seller(seller.id).await?,
            earnings: commission_repo.seller_earnings(seller.id).await?,
            wallet_balance,
            low_stock,
        })
    }

    pub async fn list(&self, status: Option<SellerStatus>) -> Result<Vec<Seller>, AppError> {
        let repo = SellerRepository::new(self.db);

        let sellers = repo.list(status).await?;

        Ok(sellers.into_iter().map(Seller::from_entity).collect())
    }

    /// Approves a store, optionally overriding its commission rate.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Already approved, or the rate is out of range
    pub async fn approve(
        &self,
        id: i32,
        commission_rate_bps: Option<i32>,
    ) -> Result<Seller, AppError> {
        let rate = commission_rate_bps
            .map(validate_commission_rate)
            .transpose()?;

        self.change_status(id, SellerStatus::Approved, None, rate, |current| {
            current != SellerStatus::Approved
        })
        .await
    }

    /// Rejects a pending application.
    pub async fn reject(&self, id: i32, reason: Option<String>) -> Result<Seller, AppError> {
        self.change_status(id, SellerStatus::Rejected, reason, None, |current| {
            current == SellerStatus::Pending
        })
        .await
    }

    /// Suspends an approved store; its products stay listed but it can no longer manage them.
    pub async fn suspend(&self, id: i32, reason: Option<String>) -> Result<Seller, AppError> {
        self.change_status(id, SellerStatus::Suspended, reason, None, |current| {
            current == SellerStatus::Approved
        })
        .await
    }

    pub async fn set_commission_rate(&self, id: i32, bps: i32) -> Result<Seller, AppError> {
        let repo = SellerRepository::new(self.db);

        let bps = validate_commission_rate(bps)?;
        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(AppError::not_found("Seller not found"));
        };

        let seller = Seller::from_entity(repo.set_commission_rate(existing, bps).await?);
        tracing::info!("Seller {} commission rate set to {} bps", seller.id, bps);

        Ok(seller)
    }

    async fn change_status(
        &self,
        id: i32,
        next: SellerStatus,
        note: Option<String>,
        commission_rate_bps: Option<i32>,
        allowed_from: impl Fn(SellerStatus) -> bool,
    ) -> Result<Seller, AppError> {
        let repo = SellerRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(AppError::not_found("Seller not found"));
        };
        let current = existing.status;
        if !allowed_from(current) {
            return Err(AppError::bad_request(format!(
                "Cannot change a {} seller to {}",
                current.to_value(),
                next.to_value()
            )));
        }

        let note = note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        let seller = repo
            .set_status(existing, next, note.clone(), commission_rate_bps)
            .await?;
        let seller = Seller::from_entity(seller);
        let status = next.to_value();
        tracing::info!("Seller {} is now {}", seller.id, status);

        let message = match &note {
            Some(note) => format!("Your store {} is now {}: {}", seller.store_name, status, note),
            None => format!("Your store {} is now {}", seller.store_name, status),
        };
        NotificationService::new(self.db)
            .notify(CreateNotificationParam::new(
                seller.user_id,
                NotificationKind::Seller,
                "Store status updated",
                message,
            ))
            .await?;

        Ok(seller)
    }
}
