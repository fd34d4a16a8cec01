// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use controlfin::db;

#[test]
fn open_at_initializes_schema_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("controlfin.sqlite");

    let conn = db::open_at(&path).unwrap();
    conn.execute(
        "INSERT INTO transactions(id,kind,category,amount,date)
         VALUES ('t1','INCOME','Salário','1000','2024-03-01')",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = db::open_at(&path).unwrap();
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 1);
}

#[test]
fn schema_rejects_unknown_kind_at_insert() {
    let dir = tempfile::tempdir().unwrap();
    let conn = db::open_at(&dir.path().join("t.sqlite")).unwrap();
    let res = conn.execute(
        "INSERT INTO transactions(id,kind,category,amount,date)
         VALUES ('t1','TRANSFER','Mercado','10','2024-03-01')",
        [],
    );
    assert!(res.is_err());
}
