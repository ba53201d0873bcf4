//! Card contracts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Visa,
    Mastercard,
    Mir,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Inactive,
    Blocked,
    Expired,
    #[serde(other)]
    Unknown,
}

/// GET /cards/account/{id}, /cards/customer/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub account_id: i64,
    pub card_number: String,
    #[serde(default)]
    pub card_type: Option<CardType>,
    #[serde(default)]
    pub holder_first_name: Option<String>,
    #[serde(default)]
    pub holder_last_name: Option<String>,
    #[serde(default)]
    pub masked_cvv: Option<String>,
    #[serde(default)]
    pub status: Option<CardStatus>,
}

impl Card {
    /// Last four digits, for display next to the account
    pub fn last_four(&self) -> &str {
        let digits = self.card_number.trim();
        let start = digits.len().saturating_sub(4);
        digits.get(start..).unwrap_or(digits)
    }

    pub fn holder_name(&self) -> String {
        [self.holder_first_name.as_deref(), self.holder_last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// POST /cards
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub account_id: i64,
    pub card_type: CardType,
    pub holder_first_name: String,
    pub holder_last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Card {
        serde_json::from_value(json!({
            "id": 4,
            "accountId": 7,
            "cardNumber": "2200123412345678",
            "cardType": "MIR",
            "holderFirstName": "Anna",
            "holderLastName": "Petrova",
            "maskedCvv": "***",
            "status": "ACTIVE"
        }))
        .unwrap()
    }

    #[test]
    fn test_card_contract() {
        let card = sample();
        assert_eq!(card.card_type, Some(CardType::Mir));
        assert_eq!(card.status, Some(CardStatus::Active));
        assert_eq!(card.last_four(), "5678");
        assert_eq!(card.holder_name(), "Anna Petrova");
    }

    #[test]
    fn test_new_card_wire_shape() {
        let value = serde_json::to_value(NewCard {
            account_id: 7,
            card_type: CardType::Mastercard,
            holder_first_name: "Anna".to_string(),
            holder_last_name: "Petrova".to_string(),
        })
        .unwrap();
        assert_eq!(
            value,
            json!({
                "accountId": 7,
                "cardType": "MASTERCARD",
                "holderFirstName": "Anna",
                "holderLastName": "Petrova"
            })
        );
    }
}
