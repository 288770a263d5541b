use crate::models::{Transaction, TransactionType};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = transactions
            .iter()
            .fold(Summary::default(), |mut acc, tx| {
                match tx.type_ {
                    TransactionType::Income => acc.income += tx.price,
                    TransactionType::Outcome => acc.outcome += tx.price,
                }
                acc
            });
        summary.total = summary.income - summary.outcome;
        summary
    }
}
