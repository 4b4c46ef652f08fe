//! Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single cart line item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price in major currency units (e.g. `12.99`)
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Quantity, never below 1
    pub quantity: u32,

    /// Image reference
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartItem {
    /// Creates a new line item with the given quantity
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            image: None,
        }
    }

    /// Sets the image reference
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_wire_shape() -> TestResult {
        let item: CartItem = serde_json::from_str(
            r#"{"id":"p1","name":"Burger","price":12.5,"quantity":2,"img":"/burger.png"}"#,
        )?;

        assert_eq!(item.id, "p1");
        assert_eq!(item.price, Decimal::new(125, 1));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.image.as_deref(), Some("/burger.png"));

        Ok(())
    }

    #[test]
    fn serializes_price_as_number() -> TestResult {
        let item = CartItem::new("p1", "Fries", Decimal::new(5, 0), 1);

        let value = serde_json::to_value(&item)?;

        assert_eq!(value["price"], serde_json::json!(5.0));
        assert!(value.get("img").is_none());

        Ok(())
    }
}
