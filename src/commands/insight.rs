// Copyright (c) 2025 ControlFin.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::load_all;
use crate::models::Transaction;
use crate::utils::http_client;
use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Deserialize;

const MODEL: &str = "gemini-2.0-flash";

const EMPTY_MSG: &str =
    "Adicione algumas transações para que eu possa analisar sua saúde financeira!";
const FALLBACK_MSG: &str =
    "Mantenha o controle das suas contas para garantir um futuro tranquilo!";

pub fn handle(conn: &Connection) -> Result<()> {
    let txs = load_all(conn)?;
    println!("{}", financial_insight(&txs));
    Ok(())
}

/// Best effort: any failure (missing key, network, empty answer)
/// degrades to a static message. No retries.
pub fn financial_insight(txs: &[Transaction]) -> String {
    if txs.is_empty() {
        return EMPTY_MSG.to_string();
    }
    request_insight(txs).unwrap_or_else(|_| FALLBACK_MSG.to_string())
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}

fn request_insight(txs: &[Transaction]) -> Result<String> {
    let key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;
    let prompt = format!(
        "Como um assistente financeiro especialista, analise os seguintes dados de \
         transações do usuário:\n{}\n\nCom base nesses dados, forneça um breve insight \
         (máximo 3 frases) em Português do Brasil sobre como o usuário pode economizar \
         ou o que se destaca nos gastos dele. Seja motivador e prático.",
        serde_json::to_string(txs)?
    );

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent?key={key}"
    );
    let client = http_client()?;
    let resp = client
        .post(url)
        .json(&serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        }))
        .send()?
        .error_for_status()?;
    let body: GenerateResponse = resp.json()?;

    body.candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .context("Empty model response")
}
