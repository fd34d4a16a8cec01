// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .required(true)
        .help("Period as YYYY-MM")
}

pub fn build_cli() -> Command {
    Command::new("controlfin")
        .version(crate_version!())
        .about("Track income, expenses and reserves; view monthly reports")
        .subcommand(Command::new("init").about("Create the database if it does not exist"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("INCOME, EXPENSE or RESERVE"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("A category from the kind's vocabulary (see 'category list')"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Non-negative amount in BRL"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("desc")
                                .help("Free-text description"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .help("Filter to INCOME, EXPENSE or RESERVE"),
                        )
                        .arg(Arg::new("category").long("category").help("Filter to one category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("At most N rows"),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of a transaction")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("kind").long("kind"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("description").long("desc")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("The fixed category vocabulary")
                .subcommand(
                    Command::new("list").about("List categories").arg(
                        Arg::new("kind")
                            .long("kind")
                            .help("Restrict to INCOME, EXPENSE or RESERVE"),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views over recorded transactions")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Period totals, lifetime totals and available balance")
                        .arg(month_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Per-month totals for a year, January through December")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .required(true)
                                .value_parser(value_parser!(i32))
                                .help("Calendar year, e.g. 2024"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-category")
                        .about("Expenses grouped by category for a month")
                        .arg(month_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("balance")
                        .about("Day-by-day running balance for a month")
                        .arg(month_arg()),
                )),
        )
        .subcommand(
            Command::new("insight")
                .about("Short AI-generated reading of your finances (best effort)"),
        )
        .subcommand(Command::new("doctor").about("Scan stored rows for integrity issues"))
}
