//! Client-side cache of the content collection.
//!
//! Holds the list a sidebar renders plus the record currently open in an
//! editor, and keeps both in sync with the API. After a mutation the cache
//! is patched in place from the server's returned representation rather
//! than refetched; on any failed call the cache is left untouched and the
//! error propagates unchanged.
//!
//! The store does not validate drafts -- checking
//! [`validate_content`](quill_core::validation::validate_content) before a
//! mutating call is the UI's responsibility.

use quill_core::types::DbId;

use crate::api::ContentClient;
use crate::error::ApiError;
use crate::types::{Content, CreateContent, UpdateContent};

/// Cached content list plus at most one selected record.
pub struct ContentStore {
    api: ContentClient,
    contents: Vec<Content>,
    selected: Option<Content>,
}

impl ContentStore {
    /// Create an empty store backed by the given client.
    pub fn new(api: ContentClient) -> Self {
        Self {
            api,
            contents: Vec::new(),
            selected: None,
        }
    }

    /// Cached records, in server return order.
    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    /// The currently loaded record, if any.
    pub fn selected(&self) -> Option<&Content> {
        self.selected.as_ref()
    }

    /// Replace the cached list with a fresh fetch.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let contents = self.api.get_all().await?;
        self.contents = contents;
        Ok(())
    }

    /// Fetch a record by id and make it the selection.
    pub async fn select(&mut self, id: DbId) -> Result<&Content, ApiError> {
        let content = self.api.get_by_id(id).await?;
        Ok(self.selected.insert(content))
    }

    /// Drop the selection without touching the list.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Create a record and append the server's representation to the list.
    pub async fn create(&mut self, input: &CreateContent) -> Result<Content, ApiError> {
        let created = self.api.create(input).await?;
        self.contents.push(created.clone());
        Ok(created)
    }

    /// Update a record and patch the cached copies in place.
    pub async fn update(&mut self, id: DbId, input: &UpdateContent) -> Result<Content, ApiError> {
        let updated = self.api.update(id, input).await?;

        if let Some(entry) = self.contents.iter_mut().find(|c| c.id == updated.id) {
            *entry = updated.clone();
        }
        if self.selected.as_ref().is_some_and(|c| c.id == updated.id) {
            self.selected = Some(updated.clone());
        }

        Ok(updated)
    }

    /// Delete a record and remove it from the cache, clearing a matching
    /// selection.
    pub async fn delete(&mut self, id: DbId) -> Result<(), ApiError> {
        self.api.delete(id).await?;

        self.contents.retain(|c| c.id != id);
        if self.selected.as_ref().is_some_and(|c| c.id == id) {
            self.selected = None;
        }

        Ok(())
    }
}
