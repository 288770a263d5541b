use crate::models::{Transaction, TransactionType};
use chrono::{DateTime, Utc};

use TransactionType::{Income, Outcome};

// (id, description, price, category, type, created_at)
const DEMO_ROWS: [(u64, &str, f64, &str, TransactionType, &str); 13] = [
    (1, "Salário", 4500.0, "Trabalho", Income, "2024-10-15T08:00:00.000Z"),
    (2, "Freelance desenvolvimento", 1200.0, "Trabalho", Income, "2024-10-12T14:30:00.000Z"),
    (3, "Rendimento investimentos", 180.0, "Investimentos", Income, "2024-10-10T09:15:00.000Z"),
    (4, "Venda de produto usado", 350.0, "Vendas", Income, "2024-10-08T16:45:00.000Z"),
    (5, "Cashback cartão", 45.0, "Benefícios", Income, "2024-10-05T11:20:00.000Z"),
    (6, "Supermercado", 280.0, "Alimentação", Outcome, "2024-10-18T18:30:00.000Z"),
    (7, "Conta de luz", 120.0, "Casa", Outcome, "2024-10-17T10:15:00.000Z"),
    (8, "Gasolina", 85.0, "Transporte", Outcome, "2024-10-16T14:00:00.000Z"),
    (9, "Netflix", 25.0, "Lazer", Outcome, "2024-10-14T20:00:00.000Z"),
    (10, "Farmácia", 60.0, "Saúde", Outcome, "2024-10-13T09:30:00.000Z"),
    (11, "Almoço restaurante", 35.0, "Alimentação", Outcome, "2024-10-11T12:30:00.000Z"),
    (12, "Internet", 90.0, "Casa", Outcome, "2024-10-09T08:00:00.000Z"),
    (13, "Uber", 18.0, "Transporte", Outcome, "2024-10-07T19:45:00.000Z"),
];

pub fn demo_transactions() -> Vec<Transaction> {
    DEMO_ROWS
        .iter()
        .map(
            |&(id, description, price, category, type_, created_at)| Transaction {
                id,
                description: description.to_string(),
                type_,
                price,
                category: category.to_string(),
                created_at: parse_fixed_timestamp(created_at),
            },
        )
        .collect()
}

fn parse_fixed_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}
