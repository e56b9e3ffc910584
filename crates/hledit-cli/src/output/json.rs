//! JSON output formatting for transactions.

use hledit_core::Transaction;

/// Convert a transaction to JSON for output, with its index.
pub fn transaction_json(index: usize, txn: &Transaction) -> serde_json::Value {
    let postings: Vec<serde_json::Value> = txn
        .postings
        .iter()
        .enumerate()
        .map(|(p, posting)| {
            serde_json::json!({
                "index": p,
                "account": posting.account,
                "amount": posting.amount,
                "line": posting.source_line,
            })
        })
        .collect();
    serde_json::json!({
        "index": index,
        "header": txn.header,
        "line": txn.start_line,
        "postings": postings,
    })
}

/// Convert indexed transactions to a JSON array for output.
pub fn transactions_json<'a>(
    transactions: impl IntoIterator<Item = (usize, &'a Transaction)>,
) -> Vec<serde_json::Value> {
    transactions
        .into_iter()
        .map(|(index, txn)| transaction_json(index, txn))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hledit_core::parse;

    #[test]
    fn test_transaction_json() {
        let txns = parse("2024-01-01 a\n  x  $1.00\n  y  $-1.00\n");
        let value = transaction_json(0, &txns[0]);
        assert_eq!(value["header"], "2024-01-01 a");
        assert_eq!(value["postings"][1]["index"], 1);
        assert_eq!(value["postings"][1]["account"], "y");
        assert_eq!(value["postings"][1]["line"], 2);
    }

    #[test]
    fn test_transactions_json_keeps_indices() {
        let txns = parse("2024-01-01 a\n\n2024-01-02 b\n");
        let values = transactions_json(txns.iter().enumerate().skip(1));
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["index"], 1);
    }
}
