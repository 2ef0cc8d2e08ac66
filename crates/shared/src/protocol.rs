use serde::{Deserialize, Serialize};

use crate::domain::ToppingId;

/// Body of `POST /api/order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<ToppingId>,
}

/// Accepted-order response. Only `message` is read; other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_camel_case_keys() {
        let payload = OrderPayload {
            full_name: "Alice Smith".into(),
            size: "L".into(),
            toppings: vec![ToppingId(1), ToppingId(5)],
        };
        let value = serde_json::to_value(&payload).expect("encode");
        assert_eq!(
            value,
            serde_json::json!({
                "fullName": "Alice Smith",
                "size": "L",
                "toppings": ["1", "5"],
            })
        );
    }

    #[test]
    fn response_ignores_extra_fields() {
        let response: OrderResponse = serde_json::from_str(
            r#"{"message":"Thank you for your order, Alice!","data":{"size":"L"}}"#,
        )
        .expect("decode");
        assert_eq!(response.message, "Thank you for your order, Alice!");
    }
}
