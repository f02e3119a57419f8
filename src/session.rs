//! Caller-side list state: the current snapshot, the search text and the page.
//!
//! The persistence layer pushes whole snapshots; each one replaces the
//! previous. Local add/edit/delete are applied optimistically on top until
//! the next snapshot arrives.

use thiserror::Error;

use crate::draft::{CredentialUpdate, DraftError};
use crate::record::CredentialRecord;
use crate::view::{ListView, PageSize, PageState, StrengthCounts, derive, filter_records, paginate};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Credential not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    InvalidUpdate(#[from] DraftError),
}

#[derive(Debug, Default)]
pub struct CredentialList {
    snapshot: Vec<CredentialRecord>,
    search: String,
    page: PageState,
}

impl CredentialList {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            snapshot: Vec::new(),
            search: String::new(),
            page: PageState::new(page_size),
        }
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.snapshot
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    /// Replaces the whole snapshot. The current page is kept if it still
    /// exists, otherwise clamped to the last page.
    pub fn replace_snapshot(&mut self, snapshot: Vec<CredentialRecord>) {
        #[cfg(feature = "tracing")]
        tracing::info!("Snapshot replaced: {} records", snapshot.len());

        self.snapshot = snapshot;
        self.clamp_page();
    }

    /// Changes the search text; a different text returns to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            #[cfg(feature = "tracing")]
            tracing::debug!("Search changed, resetting to first page");
            self.search = search;
            self.page.reset();
        }
    }

    /// Changes the page size; a different size returns to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page.set_page_size(page_size);
    }

    pub fn go_to_page(&mut self, page: usize) {
        let page_count = self.page_count();
        self.page.go_to(page, page_count);

        #[cfg(feature = "tracing")]
        tracing::debug!("Moved to page {} of {}", self.page.current_page(), page_count);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.current_page() + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.current_page().saturating_sub(1));
    }

    /// Prepends a record that was just written, ahead of the next snapshot.
    pub fn apply_added(&mut self, record: CredentialRecord) {
        self.snapshot.insert(0, record);
    }

    /// Merges an edit into the local copy of record `id` and keeps the page
    /// in range, since the edit may drop the record out of the search.
    pub fn apply_edited(&mut self, id: &str, update: CredentialUpdate) -> Result<(), ListError> {
        let record = self
            .snapshot
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        record.apply_update(update)?;
        self.clamp_page();
        Ok(())
    }

    /// Removes record `id` locally and keeps the page in range.
    pub fn apply_deleted(&mut self, id: &str) -> Result<CredentialRecord, ListError> {
        let index = self
            .snapshot
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = self.snapshot.remove(index);
        self.clamp_page();
        Ok(removed)
    }

    /// Re-derives every cached strength; returns how many were stale.
    pub fn refresh_strengths(&mut self) -> usize {
        self.snapshot
            .iter_mut()
            .map(|r| r.refresh_strength())
            .filter(|&changed| changed)
            .count()
    }

    pub fn counts(&self) -> StrengthCounts {
        StrengthCounts::from_records(&self.snapshot)
    }

    pub fn view(&self) -> ListView<'_> {
        derive(&self.snapshot, &self.search, &self.page)
    }

    fn page_count(&self) -> usize {
        let matched = filter_records(&self.snapshot, &self.search).len();
        paginate(matched, self.page.page_size().get(), 1).page_count()
    }

    fn clamp_page(&mut self) {
        let page_count = self.page_count();
        self.page.go_to(self.page.current_page(), page_count);
    }
}

fn not_found(id: &str) -> ListError {
    #[cfg(feature = "tracing")]
    tracing::warn!("Credential not found: {}", id);
    ListError::NotFound(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::PasswordStrength;
    use secrecy::SecretString;

    fn record(id: usize) -> CredentialRecord {
        CredentialRecord::new(
            id.to_string(),
            "u",
            format!("site{id}"),
            "https://example.com",
            if id % 2 == 0 { "even" } else { "odd" },
            SecretString::new("password".to_string().into()),
            None,
        )
    }

    fn list_with(n: usize) -> CredentialList {
        let mut list = CredentialList::new(PageSize::Five);
        list.replace_snapshot((0..n).map(record).collect());
        list
    }

    #[test]
    fn test_navigation_clamps() {
        let mut list = list_with(12);
        list.previous_page();
        assert_eq!(list.page().current_page(), 1);
        list.next_page();
        list.next_page();
        list.next_page();
        assert_eq!(list.page().current_page(), 3);
        list.go_to_page(99);
        assert_eq!(list.page().current_page(), 3);
    }

    #[test]
    fn test_search_resets_page() {
        let mut list = list_with(12);
        list.go_to_page(3);
        list.set_search("");
        assert_eq!(list.page().current_page(), 3);
        list.set_search("odd");
        assert_eq!(list.page().current_page(), 1);
        assert_eq!(list.view().matched, 6);
    }

    #[test]
    fn test_page_size_resets_page() {
        let mut list = list_with(12);
        list.go_to_page(2);
        list.set_page_size(PageSize::Ten);
        assert_eq!(list.page().current_page(), 1);
    }

    #[test]
    fn test_shrinking_snapshot_clamps_page() {
        let mut list = list_with(12);
        list.go_to_page(3);
        list.replace_snapshot((0..6).map(record).collect());
        assert_eq!(list.page().current_page(), 2);
        list.replace_snapshot(Vec::new());
        assert_eq!(list.page().current_page(), 1);
    }

    #[test]
    fn test_delete_last_item_on_page_moves_back() {
        let mut list = list_with(6);
        list.go_to_page(2);
        let removed = list.apply_deleted("5").unwrap();
        assert_eq!(removed.id, "5");
        assert_eq!(list.page().current_page(), 1);
        assert_eq!(list.records().len(), 5);
    }

    #[test]
    fn test_edit_out_of_search_moves_back() {
        let mut list = list_with(6);
        list.set_search("site");
        list.go_to_page(2);
        let update = CredentialUpdate {
            resource_name: Some("other".to_string()),
            ..Default::default()
        };
        list.apply_edited("0", update).unwrap();
        assert_eq!(list.view().matched, 5);
        assert_eq!(list.page().current_page(), 1);
        assert_eq!(list.view().pagination.current_page, 1);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut list = list_with(2);
        assert_eq!(list.apply_deleted("nope"), Err(ListError::NotFound("nope".to_string())));
    }

    #[test]
    fn test_added_record_goes_first() {
        let mut list = list_with(3);
        list.apply_added(record(42));
        assert_eq!(list.view().visible[0].id, "42");
    }

    #[test]
    fn test_edit_reclassifies() {
        let mut list = list_with(3);
        let update = CredentialUpdate {
            password: Some(SecretString::new("Aa1!aaaa".to_string().into())),
            ..Default::default()
        };
        list.apply_edited("1", update).unwrap();
        assert_eq!(list.records()[1].strength, Some(PasswordStrength::Strong));
        assert_eq!(list.counts().strong, 1);
    }

    #[test]
    fn test_edit_rejects_empty_field() {
        let mut list = list_with(1);
        let update = CredentialUpdate {
            login_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            list.apply_edited("0", update),
            Err(ListError::InvalidUpdate(DraftError::MissingField("loginUrl")))
        );
    }

    #[test]
    fn test_refresh_strengths_counts_stale() {
        let mut list = list_with(4);
        let mut stale = record(9);
        stale.strength = Some(PasswordStrength::Strong);
        list.apply_added(stale);
        assert_eq!(list.refresh_strengths(), 1);
        assert_eq!(list.counts().weak, 5);
    }
}
