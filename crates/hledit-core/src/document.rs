//! Owned raw text plus the model parsed from it.

use tracing::debug;

use crate::error::Result;
use crate::model::{Posting, Transaction};
use crate::parser::parse;
use crate::sync::{self, RewriteOptions};

/// A ledger document.
///
/// The raw text is the source of truth. The transactions are always the
/// parse of the current text: every mutation goes through the text and is
/// followed by a full reparse, so line indices handed out by
/// [`Document::transactions`] are valid until the next mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    transactions: Vec<Transaction>,
}

impl Document {
    /// Parse `text` into a new document.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let transactions = parse(&text);
        Self { text, transactions }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Look up a posting by transaction and posting index.
    pub fn posting(&self, transaction_index: usize, posting_index: usize) -> Result<&Posting> {
        sync::locate(&self.transactions, transaction_index, posting_index)
    }

    /// Replace the whole raw text and reparse.
    pub fn replace_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.transactions = parse(&self.text);
        debug!(
            transactions = self.transactions.len(),
            "replaced ledger text"
        );
    }

    /// Set the account of one posting.
    ///
    /// On error the document is left unchanged.
    pub fn apply_account_edit(
        &mut self,
        transaction_index: usize,
        posting_index: usize,
        new_account: &str,
        options: &RewriteOptions,
    ) -> Result<()> {
        let (text, transactions) = sync::apply_account_edit(
            &self.text,
            &self.transactions,
            transaction_index,
            posting_index,
            new_account,
            options,
        )?;
        self.text = text;
        self.transactions = transactions;
        Ok(())
    }

    /// Every posting with its transaction and posting index, in order.
    pub fn postings(&self) -> impl Iterator<Item = (usize, usize, &Posting)> + '_ {
        self.transactions.iter().enumerate().flat_map(|(t, txn)| {
            txn.postings
                .iter()
                .enumerate()
                .map(move |(p, posting)| (t, p, posting))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const TEXT: &str = "2024-01-05 groceries\n    expenses:uncat     $45.00\n    assets:cash    $-45.00\n\n2024-01-06 bus\n    expenses:uncat  $2.10\n    assets:cash  $-2.10\n";

    #[test]
    fn test_parse_and_accessors() {
        let doc = Document::parse(TEXT);
        assert_eq!(doc.text(), TEXT);
        assert_eq!(doc.transactions().len(), 2);
        assert_eq!(doc.posting(1, 0).unwrap().amount, "$2.10");
    }

    #[test]
    fn test_apply_edit_updates_text_and_model() {
        let mut doc = Document::parse(TEXT);
        doc.apply_account_edit(1, 0, "expenses:transport:bus", &RewriteOptions::default())
            .unwrap();

        assert!(doc.text().contains("expenses:transport:bus"));
        assert_eq!(doc.transactions(), parse(doc.text()).as_slice());
        assert_eq!(doc.posting(1, 0).unwrap().account, "expenses:transport:bus");
        assert_eq!(doc.posting(0, 0).unwrap().account, "expenses:uncat");
    }

    #[test]
    fn test_failed_edit_leaves_document_unchanged() {
        let mut doc = Document::parse(TEXT);
        let before = doc.clone();
        let err = doc
            .apply_account_edit(5, 0, "x", &RewriteOptions::default())
            .unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(doc, before);

        let err = doc
            .apply_account_edit(0, 0, "$x", &RewriteOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAccount { .. }));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_replace_text_reparses() {
        let mut doc = Document::parse(TEXT);
        doc.replace_text("2024-03-01 only header");
        assert_eq!(doc.transactions().len(), 1);
        assert!(doc.transactions()[0].postings.is_empty());
    }

    #[test]
    fn test_postings_iterator() {
        let doc = Document::parse(TEXT);
        let uncat: Vec<(usize, usize)> = doc
            .postings()
            .filter(|(_, _, p)| p.account == "expenses:uncat")
            .map(|(t, p, _)| (t, p))
            .collect();
        assert_eq!(uncat, vec![(0, 0), (1, 0)]);
    }
}
