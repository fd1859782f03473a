//! Product record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry available for purchase.
///
/// Built once at startup and never mutated afterwards. The field names are
/// the wire names; `price` serializes as a plain JSON number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_serializes_as_number() {
        let p = Product {
            id: "1".into(),
            name: "Brass Diya".into(),
            description: "Handcrafted traditional brass diya.".into(),
            price: Decimal::new(1599, 2),
            image: "https://example.com/diya.jpg".into(),
            category: "Diya".into(),
        };
        let json = serde_json::to_value(&p).unwrap();
        assert!(json["price"].is_number());
        assert_eq!(json["price"], serde_json::json!(15.99));
    }

    #[test]
    fn test_round_trip() {
        let json = serde_json::json!({
            "id": "2",
            "name": "Incense Sticks",
            "description": "Sandalwood incense.",
            "price": 5.49,
            "image": "https://example.com/incense.jpg",
            "category": "Incense"
        });
        let p: Product = serde_json::from_value(json).unwrap();
        assert_eq!(p.price, Decimal::new(549, 2));
    }
}
