use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    integration::llm::ChatModel,
    model::{
        chat::{
            keywords, system_prompt, ChatParam, ChatReply, FALLBACK_REPLY, MAX_SUGGESTED_PRODUCTS,
        },
        product::Product,
    },
    service::flash_sale::FlashSaleService,
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
    model: Option<&'a dyn ChatModel>,
    currency: &'a str,
}

impl<'a> ChatService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        model: Option<&'a dyn ChatModel>,
        currency: &'a str,
    ) -> Self {
        Self {
            db,
            model,
            currency,
        }
    }

    /// Answers a shopper's message with products from the catalog as context.
    ///
    /// A missing or failing model still yields a reply: the fallback text with the products
    /// found for the message.
    pub async fn chat(&self, param: ChatParam) -> Result<ChatReply, AppError> {
        let repo = ProductRepository::new(self.db);

        let products = repo
            .find_by_keywords(&keywords(&param.message), MAX_SUGGESTED_PRODUCTS)
            .await?
            .into_iter()
            .map(Product::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        let prices = FlashSaleService::new(self.db)
            .price_book(products.iter().map(|p| p.id).collect())
            .await?;

        let reply = match self.model {
            Some(model) => {
                let system = system_prompt(&products, &prices, self.currency);
                match model.complete(&system, &param.turns()).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        tracing::warn!("Chat model call failed: {}", e);
                        FALLBACK_REPLY.to_string()
                    }
                }
            }
            None => {
                tracing::warn!("Chat model is not configured; sending fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        Ok(ChatReply {
            reply,
            products,
            prices,
        })
    }
}
