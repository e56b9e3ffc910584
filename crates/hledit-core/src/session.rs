//! A document bound to a store.
//!
//! The session is the single owner of the ledger text, the account options
//! and the two account preferences. It loads them from a [`KeyValueStore`]
//! once and writes the ledger text back after every successful change.

use tracing::debug;

use crate::document::Document;
use crate::error::Result;
use crate::model::Transaction;
use crate::options::parse_account_options;
use crate::storage::{KeyValueStore, StoreKey};
use crate::sync::RewriteOptions;

/// Loaded editing state plus the store it came from.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
    document: Document,
    options_text: String,
    account_options: Vec<String>,
    fixed_account: Option<String>,
    highlighted_account: Option<String>,
    rewrite: RewriteOptions,
}

impl<S: KeyValueStore> Session<S> {
    /// Load everything the store has. Missing values start empty.
    pub fn load(store: S, rewrite: RewriteOptions) -> Result<Self> {
        let text = store.get(StoreKey::LedgerText)?.unwrap_or_default();
        let options_text = store.get(StoreKey::AccountOptions)?.unwrap_or_default();
        let fixed_account = non_blank(store.get(StoreKey::FixedAccount)?);
        let highlighted_account = non_blank(store.get(StoreKey::HighlightedAccount)?);

        let document = Document::parse(text);
        debug!(
            transactions = document.transactions().len(),
            "loaded session"
        );

        Ok(Self {
            store,
            document,
            account_options: parse_account_options(&options_text),
            options_text,
            fixed_account,
            highlighted_account,
            rewrite,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.document.transactions()
    }

    pub fn text(&self) -> &str {
        self.document.text()
    }

    pub fn rewrite_options(&self) -> &RewriteOptions {
        &self.rewrite
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Replace the raw ledger text and persist it.
    pub fn replace_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.document.replace_text(text);
        self.flush_text()
    }

    /// Set one posting's account and persist the rewritten text.
    ///
    /// Nothing is written if the edit is rejected.
    pub fn apply_account_edit(
        &mut self,
        transaction_index: usize,
        posting_index: usize,
        new_account: &str,
    ) -> Result<()> {
        self.document.apply_account_edit(
            transaction_index,
            posting_index,
            new_account,
            &self.rewrite,
        )?;
        self.flush_text()
    }

    fn flush_text(&mut self) -> Result<()> {
        self.store
            .set(StoreKey::LedgerText, self.document.text())?;
        debug!(bytes = self.document.text().len(), "flushed ledger text");
        Ok(())
    }

    pub fn account_options(&self) -> &[String] {
        &self.account_options
    }

    pub fn options_text(&self) -> &str {
        &self.options_text
    }

    /// Replace the account options text and persist it.
    pub fn replace_options(&mut self, text: impl Into<String>) -> Result<()> {
        self.options_text = text.into();
        self.account_options = parse_account_options(&self.options_text);
        self.store
            .set(StoreKey::AccountOptions, &self.options_text)
    }

    pub fn fixed_account(&self) -> Option<&str> {
        self.fixed_account.as_deref()
    }

    pub fn highlighted_account(&self) -> Option<&str> {
        self.highlighted_account.as_deref()
    }

    /// Set or clear the fixed account.
    pub fn set_fixed_account(&mut self, account: Option<&str>) -> Result<()> {
        self.fixed_account = self.store_preference(StoreKey::FixedAccount, account)?;
        Ok(())
    }

    /// Set or clear the highlighted account.
    pub fn set_highlighted_account(&mut self, account: Option<&str>) -> Result<()> {
        self.highlighted_account = self.store_preference(StoreKey::HighlightedAccount, account)?;
        Ok(())
    }

    fn store_preference(&mut self, key: StoreKey, account: Option<&str>) -> Result<Option<String>> {
        match account.map(str::trim).filter(|a| !a.is_empty()) {
            Some(value) => {
                self.store.set(key, value)?;
                Ok(Some(value.to_string()))
            }
            None => {
                self.store.remove(key)?;
                Ok(None)
            }
        }
    }

    /// Postings on `account`, skipping any whose account is the fixed one.
    ///
    /// Returns `(transaction_index, posting_index)` pairs in document order.
    pub fn postings_on(&self, account: &str) -> Vec<(usize, usize)> {
        self.document
            .postings()
            .filter(|(_, _, posting)| posting.account == account)
            .filter(|(_, _, posting)| Some(posting.account.as_str()) != self.fixed_account())
            .map(|(t, p, _)| (t, p))
            .collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::MemoryStore;

    const TEXT: &str = "2024-01-05 groceries\n    expenses:uncat     $45.00\n    assets:cash    $-45.00\n";

    fn session(text: &str) -> Session<MemoryStore> {
        let store = MemoryStore::new()
            .with_value(StoreKey::LedgerText, text)
            .with_value(StoreKey::AccountOptions, "expenses:food\n\nassets:cash\n");
        Session::load(store, RewriteOptions::default()).unwrap()
    }

    #[test]
    fn test_load_empty_store() {
        let session = Session::load(MemoryStore::new(), RewriteOptions::default()).unwrap();
        assert!(session.transactions().is_empty());
        assert!(session.account_options().is_empty());
        assert_eq!(session.fixed_account(), None);
    }

    #[test]
    fn test_load_parses_text_and_options() {
        let session = session(TEXT);
        assert_eq!(session.transactions().len(), 1);
        assert_eq!(session.account_options(), ["expenses:food", "assets:cash"]);
    }

    #[test]
    fn test_edit_persists_text() {
        let mut session = session(TEXT);
        session.apply_account_edit(0, 0, "expenses:food").unwrap();

        let stored = session.store().get(StoreKey::LedgerText).unwrap().unwrap();
        assert_eq!(stored, session.text());
        assert!(stored.contains("expenses:food"));
    }

    #[test]
    fn test_rejected_edit_does_not_persist() {
        let mut session = session(TEXT);
        let err = session.apply_account_edit(0, 9, "expenses:food").unwrap_err();
        assert!(matches!(err, Error::PostingOutOfRange { .. }));

        let stored = session.store().get(StoreKey::LedgerText).unwrap().unwrap();
        assert_eq!(stored, TEXT);
    }

    #[test]
    fn test_replace_text_persists_verbatim() {
        let mut session = session(TEXT);
        session.replace_text("2024-02-02 new\n  a  $1.00\n\n").unwrap();

        assert_eq!(session.transactions()[0].header, "2024-02-02 new");
        assert_eq!(
            session.store().get(StoreKey::LedgerText).unwrap().as_deref(),
            Some("2024-02-02 new\n  a  $1.00\n\n")
        );
    }

    #[test]
    fn test_replace_options() {
        let mut session = session(TEXT);
        session.replace_options("b\na\n").unwrap();
        assert_eq!(session.account_options(), ["b", "a"]);
        assert_eq!(session.options_text(), "b\na\n");
        assert_eq!(
            session.store().get(StoreKey::AccountOptions).unwrap().as_deref(),
            Some("b\na\n")
        );
    }

    #[test]
    fn test_preferences_set_and_clear() {
        let mut session = session(TEXT);
        session.set_fixed_account(Some(" assets:cash ")).unwrap();
        session.set_highlighted_account(Some("expenses:uncat")).unwrap();

        assert_eq!(session.fixed_account(), Some("assets:cash"));
        assert_eq!(
            session.store().get(StoreKey::FixedAccount).unwrap().as_deref(),
            Some("assets:cash")
        );

        session.set_fixed_account(None).unwrap();
        assert_eq!(session.fixed_account(), None);
        assert_eq!(session.store().get(StoreKey::FixedAccount).unwrap(), None);

        let reloaded = Session::load(session.into_store(), RewriteOptions::default()).unwrap();
        assert_eq!(reloaded.highlighted_account(), Some("expenses:uncat"));
    }

    #[test]
    fn test_postings_on_skips_fixed_account() {
        let mut session = session(TEXT);
        assert_eq!(session.postings_on("expenses:uncat"), vec![(0, 0)]);

        session.set_fixed_account(Some("assets:cash")).unwrap();
        assert!(session.postings_on("assets:cash").is_empty());
    }
}
