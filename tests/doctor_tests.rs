// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use controlfin::commands::doctor;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE transactions(
            id TEXT PRIMARY KEY,
            kind TEXT NOT NULL,
            category TEXT NOT NULL,
            amount TEXT NOT NULL,
            date TEXT NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .unwrap();
    conn
}

fn insert(conn: &Connection, id: &str, kind: &str, category: &str, amount: &str, date: &str) {
    conn.execute(
        "INSERT INTO transactions(id,kind,category,amount,date) VALUES (?1,?2,?3,?4,?5)",
        rusqlite::params![id, kind, category, amount, date],
    )
    .unwrap();
}

#[test]
fn clean_store_reports_nothing() {
    let conn = setup();
    insert(&conn, "a", "INCOME", "Salário", "1000", "2024-03-01");
    insert(&conn, "b", "RESERVE", "Metas", "50", "2024-03-02");
    assert!(doctor::scan(&conn).unwrap().is_empty());
}

#[test]
fn each_malformed_row_class_is_flagged() {
    let conn = setup();
    insert(&conn, "k", "TRANSFER", "Mercado", "10", "2024-03-01");
    insert(&conn, "c", "EXPENSE", "Salário", "10", "2024-03-01");
    insert(&conn, "d", "EXPENSE", "Luz", "10", "03/01/2024");
    insert(&conn, "m", "EXPENSE", "Gás", "ten", "2024-03-01");
    insert(&conn, "n", "EXPENSE", "Lazer", "-3", "2024-03-01");

    let issues = doctor::scan(&conn).unwrap();
    let has = |issue: &str, id: &str| {
        issues
            .iter()
            .any(|row| row[0] == issue && row[1] == id)
    };
    assert!(has("unknown_kind", "k"));
    assert!(has("unknown_category", "c"));
    assert!(has("bad_date", "d"));
    assert!(has("bad_amount", "m"));
    assert!(has("negative_amount", "n"));
    assert_eq!(issues.len(), 5);
}

#[test]
fn one_row_can_carry_several_issues() {
    let conn = setup();
    insert(&conn, "x", "TRANSFER", "Mercado", "nope", "never");
    let issues = doctor::scan(&conn).unwrap();
    assert_eq!(issues.len(), 3);
    assert!(issues.iter().all(|row| row[1] == "x"));
}
