// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use controlfin::models::{ModelError, Transaction, TransactionKind};
use rust_decimal::Decimal;

fn sample(kind: TransactionKind, category: &str, amount: &str) -> Transaction {
    Transaction {
        id: "t1".to_string(),
        kind,
        category: category.to_string(),
        amount: amount.parse().unwrap(),
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        description: None,
    }
}

#[test]
fn kind_parses_wire_names_case_insensitively() {
    assert_eq!(
        "INCOME".parse::<TransactionKind>().unwrap(),
        TransactionKind::Income
    );
    assert_eq!(
        "expense".parse::<TransactionKind>().unwrap(),
        TransactionKind::Expense
    );
    assert_eq!(
        "Reserve".parse::<TransactionKind>().unwrap(),
        TransactionKind::Reserve
    );
    for kind in TransactionKind::ALL {
        assert_eq!(kind.as_str().parse::<TransactionKind>().unwrap(), kind);
    }
}

#[test]
fn unknown_kind_is_rejected_at_parse() {
    let err = "TRANSFER".parse::<TransactionKind>().unwrap_err();
    assert!(matches!(err, ModelError::UnknownKind(s) if s == "TRANSFER"));
}

#[test]
fn category_sets_are_disjoint_per_kind() {
    for kind in TransactionKind::ALL {
        for other in TransactionKind::ALL {
            if kind == other {
                continue;
            }
            for cat in kind.categories() {
                assert!(
                    !other.categories().contains(cat),
                    "'{}' appears under both {} and {}",
                    cat,
                    kind,
                    other
                );
            }
        }
    }
}

#[test]
fn validate_accepts_category_from_own_kind() {
    assert!(sample(TransactionKind::Income, "Salário", "1000").validate().is_ok());
    assert!(sample(TransactionKind::Expense, "Mercado", "0").validate().is_ok());
    assert!(
        sample(TransactionKind::Reserve, "Reserva de Emergência", "10.50")
            .validate()
            .is_ok()
    );
}

#[test]
fn validate_rejects_category_from_another_kind() {
    let err = sample(TransactionKind::Income, "Mercado", "10")
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::UnknownCategory {
            kind: TransactionKind::Income,
            ..
        }
    ));
}

#[test]
fn validate_rejects_negative_amounts() {
    let err = sample(TransactionKind::Expense, "Mercado", "-5")
        .validate()
        .unwrap_err();
    assert!(matches!(err, ModelError::NegativeAmount(a) if a == Decimal::from(-5)));
}

#[test]
fn transaction_serializes_with_wire_field_names() {
    let tx = sample(TransactionKind::Reserve, "Metas", "12.30");
    let json = serde_json::to_value(&tx).unwrap();
    assert_eq!(json["type"], "RESERVE");
    assert_eq!(json["date"], "2024-03-01");
    assert_eq!(json["amount"], "12.30");
}
