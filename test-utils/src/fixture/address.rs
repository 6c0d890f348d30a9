//! Shipping address fixture.

use serde_json::{json, Value};

/// Default recipient name on the fixture address.
pub const DEFAULT_NAME: &str = "Asha Rao";

/// Default pincode on the fixture address.
pub const DEFAULT_PINCODE: &str = "560001";

/// Returns a complete shipping address as stored on orders.
pub fn json() -> Value {
    json!({
        "name": DEFAULT_NAME,
        "phone": "9876543210",
        "line1": "12 MG Road",
        "line2": null,
        "city": "Bengaluru",
        "state": "Karnataka",
        "pincode": DEFAULT_PINCODE,
    })
}
