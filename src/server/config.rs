use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PAYMENT_API_URL: &str = "https://api.razorpay.com/v1";
const DEFAULT_LLM_MODEL: &str = "claude-3-5-haiku-latest";

/// Credentials for the hosted payment gateway.
#[derive(Clone, Debug)]
pub struct PaymentConfig {
    pub key_id: String,
    pub key_secret: String,
    pub api_url: String,
}

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
}

/// Application settings loaded from the environment.
///
/// Money values are minor currency units. Optional integrations are `None` when their
/// credentials are not set; the server then falls back to logging or canned replies.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub app_url: String,
    pub port: u16,

    pub currency: String,
    pub shipping_fee: i64,
    pub free_shipping_threshold: i64,
    pub default_commission_bps: i32,
    pub return_window_days: i64,
    pub abandoned_cart_idle_minutes: i64,
    pub abandoned_cart_max_reminders: i32,

    pub payment: Option<PaymentConfig>,
    pub smtp: Option<SmtpConfig>,
    pub mail_from: String,
    pub llm: Option<LlmConfig>,

    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let payment = match (optional("PAYMENT_KEY_ID"), optional("PAYMENT_KEY_SECRET")) {
            (Some(key_id), Some(key_secret)) => Some(PaymentConfig {
                key_id,
                key_secret,
                api_url: optional("PAYMENT_API_URL")
                    .unwrap_or_else(|| DEFAULT_PAYMENT_API_URL.to_string()),
            }),
            _ => None,
        };

        let smtp = match optional("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: parse_or("SMTP_PORT", 587)?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }),
            None => None,
        };

        let llm = optional("LLM_API_KEY").map(|api_key| LlmConfig {
            api_key,
            model: optional("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
        });

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_ttl_hours: parse_or("JWT_TTL_HOURS", 72)?,
            app_url: base_url("APP_URL")?,
            port: parse_or("PORT", 8080)?,
            currency: optional("CURRENCY").unwrap_or_else(|| "INR".to_string()),
            shipping_fee: parse_or("SHIPPING_FEE", 4_900)?,
            free_shipping_threshold: parse_or("FREE_SHIPPING_THRESHOLD", 99_900)?,
            default_commission_bps: parse_or("DEFAULT_COMMISSION_BPS", 1_000)?,
            return_window_days: parse_or("RETURN_WINDOW_DAYS", 7)?,
            abandoned_cart_idle_minutes: parse_or("ABANDONED_CART_IDLE_MINUTES", 60)?,
            abandoned_cart_max_reminders: parse_or("ABANDONED_CART_MAX_REMINDERS", 2)?,
            payment,
            smtp,
            mail_from: optional("MAIL_FROM")
                .unwrap_or_else(|| "Threadline <no-reply@threadline.local>".to_string()),
            llm,
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }

    /// Settings for tests: in-memory database, no integrations, default business rules.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_hours: 1,
            app_url: "http://localhost:3000".to_string(),
            port: 0,
            currency: "INR".to_string(),
            shipping_fee: 4_900,
            free_shipping_threshold: 99_900,
            default_commission_bps: 1_000,
            return_window_days: 7,
            abandoned_cart_idle_minutes: 60,
            abandoned_cart_max_reminders: 2,
            payment: None,
            smtp: None,
            mail_from: "Threadline <no-reply@threadline.local>".to_string(),
            llm: None,
            admin_email: None,
            admin_password: None,
        }
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Absolute http(s) URL without a trailing slash, so paths can be appended with `format!`.
fn base_url(name: &str) -> Result<String, ConfigError> {
    let value = required(name)?;
    let invalid = || ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
    };
    let parsed = url::Url::parse(&value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }

    Ok(value.trim_end_matches('/').to_string())
}

fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
