// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionKind;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = scan(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Transaction", "Detail"], rows));
    }
    Ok(())
}

/// Scan raw rows for anything the loader would reject or skip: unknown
/// kind, category outside the kind's set, unparseable date, bad or
/// negative amount. Reports everything instead of stopping at the first.
pub fn scan(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut stmt =
        conn.prepare("SELECT id, kind, category, amount, date FROM transactions ORDER BY date")?;
    let mut cur = stmt.query([])?;
    let mut issues = Vec::new();
    while let Some(r) = cur.next()? {
        let id: String = r.get(0)?;
        let kind_s: String = r.get(1)?;
        let category: String = r.get(2)?;
        let amount_s: String = r.get(3)?;
        let date_s: String = r.get(4)?;

        match kind_s.parse::<TransactionKind>() {
            Ok(kind) => {
                if !kind.categories().contains(&category.as_str()) {
                    issues.push(vec![
                        "unknown_category".into(),
                        id.clone(),
                        format!("'{}' is not a {} category", category, kind_s),
                    ]);
                }
            }
            Err(_) => {
                issues.push(vec!["unknown_kind".into(), id.clone(), kind_s.clone()]);
            }
        }
        if chrono::NaiveDate::parse_from_str(&date_s, "%Y-%m-%d").is_err() {
            issues.push(vec!["bad_date".into(), id.clone(), date_s.clone()]);
        }
        match amount_s.parse::<Decimal>() {
            Ok(a) if a < Decimal::ZERO => {
                issues.push(vec!["negative_amount".into(), id.clone(), amount_s.clone()]);
            }
            Ok(_) => {}
            Err(_) => {
                issues.push(vec!["bad_amount".into(), id.clone(), amount_s.clone()]);
            }
        }
    }
    Ok(issues)
}
