use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::offer::OfferRepository,
    error::AppError,
    model::{
        cart::Cart,
        checkout::AppliedOffer,
        offer::{normalize_code, CreateOfferParam, Offer, UpdateOfferParam},
    },
};

pub struct OfferService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Offers shoppers can use right now.
    pub async fn list_running(&self) -> Result<Vec<Offer>, AppError> {
        let repo = OfferRepository::new(self.db);

        let offers = repo.list_running(Utc::now(), false).await?;

        Ok(offers.into_iter().map(Offer::from_entity).collect())
    }

    /// Checks a coupon code against a cart.
    ///
    /// # Returns
    /// - `Ok(AppliedOffer)` - The offer and what it takes off the cart
    /// - `Err(AppError::NotFound)` - Unknown or inactive code
    /// - `Err(AppError::BadRequest)` - Outside its window, used up, or below the minimum order
    pub async fn validate(&self, code: &str, cart: &Cart) -> Result<AppliedOffer, AppError> {
        let repo = OfferRepository::new(self.db);

        let code = normalize_code(Some(code))
            .ok_or_else(|| AppError::bad_request("Offer code is required"))?;
        let offer = match repo.find_by_code(&code).await? {
            Some(offer) => Offer::from_entity(offer),
            None => return Err(AppError::not_found("Offer not found")),
        };
        if !offer.is_active {
            return Err(AppError::not_found("Offer not found"));
        }

        let subtotal = cart.subtotal();
        offer.check_applicable(Utc::now(), subtotal)?;
        let benefit = offer.benefit(&cart.priced_lines(), subtotal);

        Ok(AppliedOffer { offer, benefit })
    }

    /// Picks the applicable automatic offer worth the most for this cart.
    pub async fn best_automatic(
        &self,
        cart: &Cart,
        shipping_fee: i64,
    ) -> Result<Option<AppliedOffer>, AppError> {
        let repo = OfferRepository::new(self.db);
        let now = Utc::now();
        let subtotal = cart.subtotal();
        let lines = cart.priced_lines();

        let mut best: Option<AppliedOffer> = None;
        for offer in repo.list_running(now, true).await? {
            let offer = Offer::from_entity(offer);
            if offer.check_applicable(now, subtotal).is_err() {
                continue;
            }
            let benefit = offer.benefit(&lines, subtotal);
            let candidate = AppliedOffer { offer, benefit };
            if candidate.value(shipping_fee) <= 0 {
                continue;
            }
            let better = best
                .as_ref()
                .is_none_or(|current| candidate.value(shipping_fee) > current.value(shipping_fee));
            if better {
                best = Some(candidate);
            }
        }

        Ok(best)
    }

    /// An explicit code wins; without one the best automatic offer applies.
    pub async fn resolve(
        &self,
        code: Option<&str>,
        cart: &Cart,
        shipping_fee: i64,
    ) -> Result<Option<AppliedOffer>, AppError> {
        match normalize_code(code) {
            Some(code) => Ok(Some(self.validate(&code, cart).await?)),
            None => self.best_automatic(cart, shipping_fee).await,
        }
    }

    /// Counts one use of the offer.
    pub async fn record_use(&self, offer_id: i32) -> Result<(), AppError> {
        let repo = OfferRepository::new(self.db);

        repo.increment_used(offer_id).await?;

        Ok(())
    }

    /// Creates an offer; codes are unique.
    pub async fn create(&self, param: CreateOfferParam) -> Result<Offer, AppError> {
        let repo = OfferRepository::new(self.db);

        if let Some(code) = &param.code {
            if repo.find_by_code(code).await?.is_some() {
                return Err(AppError::bad_request("An offer with this code already exists"));
            }
        }

        let offer = repo.create(param).await?;

        Ok(Offer::from_entity(offer))
    }

    pub async fn list_all(&self) -> Result<Vec<Offer>, AppError> {
        let repo = OfferRepository::new(self.db);

        let offers = repo.list_all().await?;

        Ok(offers.into_iter().map(Offer::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateOfferParam) -> Result<Offer, AppError> {
        let repo = OfferRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(AppError::not_found("Offer not found"));
        };
        param.validate_against(&Offer::from_entity(existing.clone()))?;

        let offer = repo.update(existing, param).await?;

        Ok(Offer::from_entity(offer))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = OfferRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(AppError::not_found("Offer not found"));
        }

        Ok(())
    }
}
