pub mod order_number;
pub mod pagination;
pub mod password;
pub mod token;
