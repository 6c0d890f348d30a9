use rand::Rng;

const PREFIX: &str = "TL";
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LENGTH: usize = 10;

/// Generates a customer-facing order number: `TL` followed by 10 uppercase alphanumerics.
pub fn generate() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();

    format!("{}{}", PREFIX, suffix)
}
