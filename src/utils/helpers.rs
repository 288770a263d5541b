use crate::models::Transaction;

pub fn sort_by_created_at_desc(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Keeps entries whose description or category contains `query`, ignoring
/// case, newest first. An empty query keeps everything.
pub fn search_transactions(
    mut transactions: Vec<Transaction>,
    query: Option<&str>,
) -> Vec<Transaction> {
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        transactions.retain(|tx| tx.matches(query));
    }
    sort_by_created_at_desc(&mut transactions);
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::demo_data::demo_transactions;

    #[test]
    fn search_is_case_insensitive_on_description_and_category() {
        let by_description = search_transactions(demo_transactions(), Some("NETFLIX"));
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, 9);

        let by_category = search_transactions(demo_transactions(), Some("alimentação"));
        let ids: Vec<u64> = by_category.iter().map(|tx| tx.id).collect();
        assert_eq!(ids, vec![6, 11]);
    }

    #[test]
    fn search_without_query_keeps_everything_sorted() {
        let all = search_transactions(demo_transactions(), None);
        assert_eq!(all.len(), 13);
        assert!(all
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
        assert_eq!(all[0].id, 6);
        assert_eq!(all[12].id, 5);

        assert_eq!(search_transactions(demo_transactions(), Some("")).len(), 13);
    }

    #[test]
    fn search_with_no_hits_is_empty() {
        assert!(search_transactions(demo_transactions(), Some("viagem")).is_empty());
    }
}
