//! Text and table output formatting for transactions.

use hledit_core::Transaction;

use crate::ui::format::{pad_right, posting_ref, truncate};
use crate::ui::theme::{self, styles, AccountRole};
use crate::ui::{kv, Column, UiContext};

/// Columns of the posting table.
pub const POSTING_COLUMNS: [Column; 4] = [
    Column::new("REF"),
    Column::new(""),
    Column::new("ACCOUNT"),
    Column::new("AMOUNT"),
];

const HEADER_WIDTH: usize = 60;

/// One row per posting, preceded by one row per transaction header.
///
/// Header rows carry the transaction index in the REF column; posting rows
/// carry `<transaction>.<posting>` and a role marker.
pub fn posting_rows(
    ctx: &UiContext,
    transactions: &[(usize, &Transaction)],
    highlighted: Option<&str>,
    fixed: Option<&str>,
) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for (t, txn) in transactions {
        rows.push(vec![
            t.to_string(),
            String::new(),
            truncate(&txn.header, HEADER_WIDTH),
            String::new(),
        ]);
        for (p, posting) in txn.postings.iter().enumerate() {
            let role = AccountRole::of(&posting.account, highlighted, fixed);
            rows.push(vec![
                posting_ref(*t, p),
                role.marker().to_string(),
                theme::account(&posting.account, role, ctx.color),
                posting.amount.clone(),
            ]);
        }
    }
    rows
}

/// Print a single transaction with its postings.
pub fn print_transaction(
    ctx: &UiContext,
    index: usize,
    txn: &Transaction,
    highlighted: Option<&str>,
    fixed: Option<&str>,
    quiet: bool,
) {
    if !quiet {
        println!("{}", kv(ctx, "Transaction", &index.to_string()));
        println!("{}", kv(ctx, "Line", &(txn.start_line + 1).to_string()));
        println!();
    }
    println!("{}", theme::styled(&txn.header, styles::bold(), ctx.color));

    let width = txn
        .postings
        .iter()
        .map(|p| p.account.chars().count())
        .max()
        .unwrap_or(0);
    for (p, posting) in txn.postings.iter().enumerate() {
        let role = AccountRole::of(&posting.account, highlighted, fixed);
        println!(
            "  {} {} {}  {}",
            posting_ref(index, p),
            role.marker(),
            theme::account(&pad_right(&posting.account, width), role, ctx.color),
            posting.amount
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hledit_core::parse;

    #[test]
    fn test_posting_rows_marks_roles() {
        let ctx = UiContext::plain();
        let txns = parse("2024-01-01 a\n  expenses:uncat  $1.00\n  assets:cash  $-1.00\n");
        let indexed: Vec<(usize, &Transaction)> = txns.iter().enumerate().collect();

        let rows = posting_rows(&ctx, &indexed, Some("expenses:uncat"), Some("assets:cash"));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][2], "2024-01-01 a");
        assert_eq!(rows[1], vec!["0.0", "*", "expenses:uncat", "$1.00"]);
        assert_eq!(rows[2][1], "=");
    }
}
