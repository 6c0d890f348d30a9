use thiserror::Error;

/// Internal issues indicating unexpected state or a failing dependency.
///
/// Always a 500 with a generic message returned to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A JSON column could not be decoded into its domain shape.
    #[error("Malformed JSON stored in {column}: {source}")]
    InvalidStoredJson {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Token signing failed.
    #[error("Token signing failed: {0}")]
    TokenEncode(#[from] jsonwebtoken::errors::Error),

    /// Sending an email failed.
    #[error("Mail delivery failed: {0}")]
    Mail(String),

    /// The language model call failed or returned an unusable body.
    #[error("Chat model error: {0}")]
    ChatModel(String),
}
