// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over a transaction collection. Every function here
//! takes the full collection plus a period selector and derives a view
//! model; nothing reads the database or mutates its input, so callers
//! can recompute on every refresh.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionKind};

/// Calendar month names (pt-BR), January first.
pub const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Per-kind sums. Used both period-scoped and lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub reserve: Decimal,
}

impl Totals {
    /// Available balance: income minus expense minus reserve.
    pub fn balance(&self) -> Decimal {
        self.income - self.expense - self.reserve
    }

    fn absorb(&mut self, tx: &Transaction) {
        match tx.kind {
            TransactionKind::Income => self.income += tx.amount,
            TransactionKind::Expense => self.expense += tx.amount,
            TransactionKind::Reserve => self.reserve += tx.amount,
        }
    }
}

/// One row of the annual cashflow series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyEntry {
    pub month: &'static str,
    #[serde(flatten)]
    pub totals: Totals,
}

/// Running balance at the end of one day of the selected month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBalance {
    pub day: u32,
    pub balance: Decimal,
}

fn in_period(tx: &Transaction, month: u32, year: i32) -> bool {
    tx.date.month() == month && tx.date.year() == year
}

/// Per-kind sums over the given calendar month. Kinds with no matching
/// transactions sum to zero.
pub fn period_totals(txs: &[Transaction], month: u32, year: i32) -> Totals {
    let mut totals = Totals::default();
    for tx in txs.iter().filter(|tx| in_period(tx, month, year)) {
        totals.absorb(tx);
    }
    totals
}

/// Per-kind sums over the whole collection, no date filter.
pub fn lifetime_totals(txs: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for tx in txs {
        totals.absorb(tx);
    }
    totals
}

/// Per-month sums for one year. Always 12 entries, January through
/// December, regardless of input order or which months are empty.
pub fn monthly_series(txs: &[Transaction], year: i32) -> Vec<MonthlyEntry> {
    let mut months = [Totals::default(); 12];
    for tx in txs.iter().filter(|tx| tx.date.year() == year) {
        months[tx.date.month0() as usize].absorb(tx);
    }
    MONTHS
        .into_iter()
        .zip(months)
        .map(|(month, totals)| MonthlyEntry { month, totals })
        .collect()
}

/// Expense amounts summed per category for the given month. Categories
/// with no expenses in the period are omitted, since this feeds a
/// proportional chart.
pub fn category_breakdown(
    txs: &[Transaction],
    month: u32,
    year: i32,
) -> BTreeMap<String, Decimal> {
    let mut agg = BTreeMap::new();
    for tx in txs
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense && in_period(tx, month, year))
    {
        *agg.entry(tx.category.clone()).or_insert(Decimal::ZERO) += tx.amount;
    }
    agg
}

/// Running balance for each day 1..=N of the given month, where N is the
/// leap-aware day count. Day d carries income - expense - reserve over
/// all period transactions dated on or before d. The period filter runs
/// before any day-of-month comparison.
pub fn daily_balance(txs: &[Transaction], month: u32, year: i32) -> Vec<DayBalance> {
    let days = days_in_month(year, month);
    let mut deltas = vec![Decimal::ZERO; days as usize + 1];
    for tx in txs.iter().filter(|tx| in_period(tx, month, year)) {
        let signed = match tx.kind {
            TransactionKind::Income => tx.amount,
            TransactionKind::Expense | TransactionKind::Reserve => -tx.amount,
        };
        deltas[tx.date.day() as usize] += signed;
    }
    let mut series = Vec::with_capacity(days as usize);
    let mut running = Decimal::ZERO;
    for day in 1..=days {
        running += deltas[day as usize];
        series.push(DayBalance {
            day,
            balance: running,
        });
    }
    series
}

/// Number of days in the given month, accounting for leap Februaries.
/// An out-of-range month yields 0 (and hence an empty daily series);
/// the CLI validates months before getting here.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
