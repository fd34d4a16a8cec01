// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionKind};
use crate::utils::{fmt_brl, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TransactionKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty());

    let tx = Transaction {
        id: Uuid::new_v4().to_string(),
        kind,
        category,
        amount,
        date,
        description,
    };
    tx.validate()?;

    conn.execute(
        "INSERT INTO transactions(id, kind, category, amount, date, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            tx.id,
            tx.kind.as_str(),
            tx.category,
            tx.amount.to_string(),
            tx.date.to_string(),
            tx.description
        ],
    )?;
    println!(
        "Recorded {} of {} on {} ({})",
        tx.kind.label(),
        fmt_brl(&tx.amount),
        tx.date,
        tx.category
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Category", "Amount", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut tx = load_one(conn, id)?;

    if let Some(k) = sub.get_one::<String>("kind") {
        tx.kind = k.parse()?;
    }
    if let Some(c) = sub.get_one::<String>("category") {
        tx.category = c.to_string();
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        tx.amount = parse_decimal(a)?;
    }
    if let Some(d) = sub.get_one::<String>("date") {
        tx.date = parse_date(d)?;
    }
    if let Some(d) = sub.get_one::<String>("description") {
        tx.description = Some(d.to_string()).filter(|s| !s.is_empty());
    }
    tx.validate()?;

    conn.execute(
        "UPDATE transactions SET kind=?2, category=?3, amount=?4, date=?5, description=?6
         WHERE id=?1",
        params![
            tx.id,
            tx.kind.as_str(),
            tx.category,
            tx.amount.to_string(),
            tx.date.to_string(),
            tx.description
        ],
    )?;
    println!("Updated transaction {}", tx.id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Transaction '{}' not found", id);
    }
    println!("Removed transaction {}", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT id, date, kind, category, amount, description FROM transactions WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(date,1,7)=?");
        params_vec.push(month.into());
    }
    if let Some(kind) = sub.get_one::<String>("kind") {
        let kind: TransactionKind = kind.parse()?;
        sql.push_str(" AND kind=?");
        params_vec.push(kind.as_str().into());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND category=?");
        params_vec.push(cat.into());
    }
    sql.push_str(" ORDER BY date DESC, created_at DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let description: Option<String> = r.get(5)?;
        data.push(TransactionRow {
            id: r.get(0)?,
            date: r.get(1)?,
            kind: r.get(2)?,
            category: r.get(3)?,
            amount: r.get(4)?,
            description: description.unwrap_or_default(),
        });
    }
    Ok(data)
}

/// Load the whole collection for aggregation. A row whose stored date no
/// longer parses is skipped with a warning; a row with an unknown kind
/// or unparseable amount is a data-integrity error (run `doctor` to see
/// all offending rows at once).
pub fn load_all(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, category, amount, date, description
         FROM transactions ORDER BY date DESC, created_at DESC",
    )?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let kind_s: String = r.get(1)?;
        let category: String = r.get(2)?;
        let amount_s: String = r.get(3)?;
        let date_s: String = r.get(4)?;
        let description: Option<String> = r.get(5)?;

        let kind = kind_s
            .parse::<TransactionKind>()
            .with_context(|| format!("Transaction {}", id))?;
        let date = match NaiveDate::parse_from_str(&date_s, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                eprintln!(
                    "Skipping transaction {} with unparseable date '{}'",
                    id, date_s
                );
                continue;
            }
        };
        let amount = amount_s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' on transaction {}", amount_s, id))?;

        out.push(Transaction {
            id,
            kind,
            category,
            amount,
            date,
            description: description.filter(|d| !d.is_empty()),
        });
    }
    Ok(out)
}

fn load_one(conn: &Connection, id: &str) -> Result<Transaction> {
    let (kind_s, category, amount_s, date_s, description) = conn
        .query_row(
            "SELECT kind, category, amount, date, description FROM transactions WHERE id=?1",
            params![id],
            |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, String>(3)?,
                    r.get::<_, Option<String>>(4)?,
                ))
            },
        )
        .with_context(|| format!("Transaction '{}' not found", id))?;
    Ok(Transaction {
        id: id.to_string(),
        kind: kind_s.parse::<TransactionKind>()?,
        category,
        amount: parse_decimal(&amount_s)?,
        date: parse_date(&date_s)?,
        description: description.filter(|d| !d.is_empty()),
    })
}
