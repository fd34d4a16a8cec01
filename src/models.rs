// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INCOME_CATEGORIES: [&str; 2] = ["Salário", "Vale Alimentação"];
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Mercado",
    "Água",
    "Luz",
    "Gás",
    "Plano Celular",
    "Transporte",
    "Lazer",
    "Outras",
];
pub const RESERVE_CATEGORIES: [&str; 4] =
    ["Reserva de Emergência", "Metas", "Investimentos", "Outros"];

/// The three kinds of money movement. The sign of a movement is derived
/// from its kind; amounts are always stored non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
    Reserve,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Income,
        TransactionKind::Expense,
        TransactionKind::Reserve,
    ];

    /// Wire/database name.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
            TransactionKind::Reserve => "RESERVE",
        }
    }

    /// Display label (pt-BR), as shown in listings.
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Entrada",
            TransactionKind::Expense => "Saída",
            TransactionKind::Reserve => "Reserva",
        }
    }

    /// The closed category vocabulary for this kind.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            TransactionKind::Income => &INCOME_CATEGORIES,
            TransactionKind::Expense => &EXPENSE_CATEGORIES,
            TransactionKind::Reserve => &RESERVE_CATEGORIES,
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INCOME" => Ok(TransactionKind::Income),
            "EXPENSE" => Ok(TransactionKind::Expense),
            "RESERVE" => Ok(TransactionKind::Reserve),
            _ => Err(ModelError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown transaction kind '{0}', expected INCOME, EXPENSE or RESERVE")]
    UnknownKind(String),
    #[error("category '{category}' is not valid for {kind} transactions")]
    UnknownCategory {
        kind: TransactionKind,
        category: String,
    },
    #[error("amount {0} is negative; the sign is derived from the transaction kind")]
    NegativeAmount(Decimal),
}

/// A single recorded money movement. Immutable from the aggregator's
/// point of view; created and edited only through the store commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl Transaction {
    /// Data-entry boundary check: non-negative amount and a category
    /// drawn from the kind's closed set. Runs on add and edit so that
    /// malformed records never reach aggregation.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.amount < Decimal::ZERO {
            return Err(ModelError::NegativeAmount(self.amount));
        }
        if !self.kind.categories().contains(&self.category.as_str()) {
            return Err(ModelError::UnknownCategory {
                kind: self.kind,
                category: self.category.clone(),
            });
        }
        Ok(())
    }
}
