// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionKind;
use crate::utils::pretty_table;
use anyhow::Result;

// The vocabulary is closed, so there is nothing to add or remove;
// listing it is all this command does.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let kinds: Vec<TransactionKind> = match sub.get_one::<String>("kind") {
            Some(k) => vec![k.parse()?],
            None => TransactionKind::ALL.to_vec(),
        };
        let mut rows = Vec::new();
        for kind in kinds {
            for cat in kind.categories() {
                rows.push(vec![kind.label().to_string(), cat.to_string()]);
            }
        }
        println!("{}", pretty_table(&["Tipo", "Categoria"], rows));
    }
    Ok(())
}
