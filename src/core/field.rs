use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five inputs of the card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    CardNumber,
    Month,
    Year,
    Cvc,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::CardNumber,
        Field::Month,
        Field::Year,
        Field::Cvc,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::CardNumber => "cardNumber",
            Field::Month => "month",
            Field::Year => "year",
            Field::Cvc => "cvc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "CARDHOLDER NAME",
            Field::CardNumber => "CARD NUMBER",
            Field::Month | Field::Year => "EXP. DATE (MM/YY)",
            Field::Cvc => "CVC",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "e.g. Jane Appleseed",
            Field::CardNumber => "0000 0000 0000 0000",
            Field::Month => "MM",
            Field::Year => "YY",
            Field::Cvc => "e.g 123",
        }
    }

    /// Editor-side length cap in characters. The core never truncates.
    pub fn max_len(self) -> Option<usize> {
        match self {
            Field::Name => None,
            Field::CardNumber => Some(19),
            Field::Month | Field::Year => Some(2),
            Field::Cvc => Some(3),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "cardNumber" | "card_number" | "card-number" => Ok(Field::CardNumber),
            "month" => Ok(Field::Month),
            "year" => Ok(Field::Year),
            "cvc" => Ok(Field::Cvc),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
