//! Shopping assistant conversation rules.

use crate::{
    model::chat::{ChatRequestDto, ChatResponseDto},
    server::{
        error::AppError,
        integration::llm::ChatTurn,
        model::{offer::PriceBook, product::Product},
    },
};

pub const MAX_MESSAGE_LEN: usize = 1_000;
/// Earlier turns kept when calling the model.
pub const MAX_HISTORY_TURNS: usize = 10;
pub const MAX_SUGGESTED_PRODUCTS: u64 = 5;
/// Words shorter than this are not used to look up products.
pub const MIN_KEYWORD_LEN: usize = 3;

pub const FALLBACK_REPLY: &str = "Sorry, our style assistant is unavailable right now. \
     You can still browse the catalog or reach our support team.";

#[derive(Debug, Clone)]
pub struct ChatParam {
    pub message: String,
    pub history: Vec<ChatTurn>,
}

impl ChatParam {
    /// Validates the message and keeps the last turns of the history.
    pub fn from_dto(dto: ChatRequestDto) -> Result<Self, AppError> {
        let message = dto.message.trim().to_string();
        if message.is_empty() {
            return Err(AppError::bad_request("Message is required"));
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(AppError::bad_request(format!(
                "Message cannot be longer than {} characters",
                MAX_MESSAGE_LEN
            )));
        }

        let history: Vec<ChatTurn> = dto
            .history
            .into_iter()
            .filter(|turn| matches!(turn.role.as_str(), "user" | "assistant"))
            .filter(|turn| !turn.content.trim().is_empty())
            .map(|turn| ChatTurn {
                role: turn.role,
                content: turn.content,
            })
            .collect();
        let skip = history.len().saturating_sub(MAX_HISTORY_TURNS);

        Ok(Self {
            message,
            history: history.into_iter().skip(skip).collect(),
        })
    }

    /// History followed by the new message, as sent to the model.
    pub fn turns(&self) -> Vec<ChatTurn> {
        let mut turns = self.history.clone();
        turns.push(ChatTurn {
            role: "user".to_string(),
            content: self.message.clone(),
        });
        turns
    }
}

/// Lowercased alphabetic words of the message long enough to search for.
pub fn keywords(message: &str) -> Vec<String> {
    let mut words: Vec<String> = message
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .map(str::to_lowercase)
        .collect();
    words.sort();
    words.dedup();
    words
}

/// System prompt listing the products found for the message.
pub fn system_prompt(products: &[Product], prices: &PriceBook, currency: &str) -> String {
    let mut prompt = String::from(
        "You are the Threadline style assistant. Help shoppers find clothing and accessories, \
         suggest outfits and answer questions about sizing, delivery and returns. \
         Keep answers short and only recommend products from the store context.\n\n\
         Store context:\n",
    );
    if products.is_empty() {
        prompt.push_str("No matching products were found.\n");
    }
    for product in products {
        prompt.push_str(&format!(
            "- #{} {} by {} ({}), {} {} minor units, sizes: {}\n",
            product.id,
            product.name,
            product.brand,
            product.category,
            currency,
            prices.effective_price(product),
            if product.sizes.is_empty() {
                "one size".to_string()
            } else {
                product.sizes.join(", ")
            },
        ));
    }
    prompt
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub reply: String,
    pub products: Vec<Product>,
    pub prices: PriceBook,
}

impl ChatReply {
    pub fn into_dto(self) -> ChatResponseDto {
        let prices = self.prices;
        ChatResponseDto {
            reply: self.reply,
            products: self
                .products
                .iter()
                .map(|p| p.summary(prices.effective_price(p)))
                .collect(),
        }
    }
}
