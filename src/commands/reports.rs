// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::load_all;
use crate::models::Transaction;
use crate::report::{self, Totals, MONTHS};
use crate::utils::{fmt_brl, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let txs = load_all(conn)?;
    match m.subcommand() {
        Some(("summary", sub)) => summary(&txs, sub)?,
        Some(("cashflow", sub)) => cashflow(&txs, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(&txs, sub)?,
        Some(("balance", sub)) => balance(&txs, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct Summary {
    month: &'static str,
    year: i32,
    period: Totals,
    lifetime: Totals,
    available: Decimal,
}

fn summary(txs: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = parse_month(sub.get_one::<String>("month").unwrap())?;

    let period = report::period_totals(txs, month, year);
    let lifetime = report::lifetime_totals(txs);
    let out = Summary {
        month: MONTHS[(month - 1) as usize],
        year,
        period,
        lifetime,
        available: lifetime.balance(),
    };

    if !maybe_print_json(json_flag, jsonl_flag, &out)? {
        let rows = vec![
            vec![
                "Entradas".into(),
                fmt_brl(&period.income),
                fmt_brl(&lifetime.income),
            ],
            vec![
                "Saídas".into(),
                fmt_brl(&period.expense),
                fmt_brl(&lifetime.expense),
            ],
            vec![
                "Reservas".into(),
                fmt_brl(&period.reserve),
                fmt_brl(&lifetime.reserve),
            ],
            vec![
                "Saldo".into(),
                fmt_brl(&period.balance()),
                fmt_brl(&out.available),
            ],
        ];
        let title = format!("{} {}", out.month, out.year);
        println!("{}", pretty_table(&["", &title, "Total"], rows));
    }
    Ok(())
}

fn cashflow(txs: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = *sub.get_one::<i32>("year").unwrap();

    let series = report::monthly_series(txs, year);
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let rows = series
            .iter()
            .map(|e| {
                vec![
                    e.month.to_string(),
                    fmt_brl(&e.totals.income),
                    fmt_brl(&e.totals.expense),
                    fmt_brl(&e.totals.reserve),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Mês", "Entradas", "Saídas", "Reservas"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct CategorySpend {
    category: String,
    spent: Decimal,
}

fn spend_by_category(txs: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = parse_month(sub.get_one::<String>("month").unwrap())?;

    let mut items: Vec<CategorySpend> = report::category_breakdown(txs, month, year)
        .into_iter()
        .map(|(category, spent)| CategorySpend { category, spent })
        .collect();
    items.sort_by(|a, b| b.spent.cmp(&a.spent));

    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        if items.is_empty() {
            println!("Nenhuma despesa registrada neste mês.");
            return Ok(());
        }
        let rows = items
            .iter()
            .map(|c| vec![c.category.clone(), fmt_brl(&c.spent)])
            .collect();
        println!("{}", pretty_table(&["Categoria", "Gasto"], rows));
    }
    Ok(())
}

fn balance(txs: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = parse_month(sub.get_one::<String>("month").unwrap())?;

    let series = report::daily_balance(txs, month, year);
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let rows = series
            .iter()
            .map(|d| vec![d.day.to_string(), fmt_brl(&d.balance)])
            .collect();
        println!("{}", pretty_table(&["Dia", "Saldo"], rows));
    }
    Ok(())
}
