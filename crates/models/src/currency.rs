use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// The closed set of currencies a saving goal may be denominated in.
/// Anything outside this set is rejected at the request boundary, before
/// business logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Brl,
    Eur,
    Jpy,
    Krw,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Brl => "BRL",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Krw => "KRW",
        }
    }

    pub fn is_brl(&self) -> bool {
        matches!(self, Currency::Brl)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::Usd),
            "BRL" => Ok(Currency::Brl),
            "EUR" => Ok(Currency::Eur),
            "JPY" => Ok(Currency::Jpy),
            "KRW" => Ok(Currency::Krw),
            other => Err(ModelError::Validation(format!("unknown currency code: {other}"))),
        }
    }
}
