//! Bookmark Client core.
//!
//! Central struct owning the rendered view and the entry form, with the
//! bookmark service and the user prompt injected behind traits. Each
//! operation is one linear request -> branch-on-status -> render/notify
//! sequence; the view is only touched after the operation's own round trip
//! resolves.

use crate::managers::form_manager::{FormManager, FormManagerTrait};
use crate::managers::view_manager::{ViewManager, ViewManagerTrait};
use crate::services::api_client::BookmarkApiTrait;
use crate::services::prompt::PromptServiceTrait;

/// Result of a delete request as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; no request was issued.
    Declined,
    /// The server confirmed the deletion and the node was removed.
    Deleted,
    /// The request failed; the view is unchanged.
    Failed,
}

/// The bookmark client: view, form, and injected service implementations.
pub struct BookmarkClient<A, P> {
    api: A,
    prompt: P,
    view: ViewManager,
    form: FormManager,
}

impl<A, P> BookmarkClient<A, P>
where
    A: BookmarkApiTrait,
    P: PromptServiceTrait,
{
    pub fn new(api: A, prompt: P) -> Self {
        Self {
            api,
            prompt,
            view: ViewManager::new(),
            form: FormManager::new(),
        }
    }

    /// Load the full collection and render it (triggered on startup).
    ///
    /// On success the view is cleared and each returned record is rendered
    /// at the front, so the view ends up in the reverse of the server's
    /// order. On failure the user is notified and the view is left as it was.
    pub async fn load(&mut self) {
        match self.api.list_bookmarks().await {
            Ok(bookmarks) => {
                self.view.render_all(&bookmarks);
                tracing::debug!(count = bookmarks.len(), "collection rendered");
            }
            Err(e) => {
                tracing::warn!(error = %e, "initial load failed");
                self.prompt.notify("Failed to load bookmarks.");
            }
        }
    }

    /// Fill the entry form. Values are taken as-is, no validation.
    pub fn fill_form(&mut self, title: &str, url: &str, tags: &str) {
        self.form.set_fields(title, url, tags);
    }

    /// Submit the entry form (the form-submission handler).
    ///
    /// On success the created record is rendered at the front of the view and
    /// the form is cleared. On failure the user is notified and the form
    /// keeps its contents for retry.
    pub async fn submit(&mut self) {
        let draft = self.form.draft();
        match self.api.create_bookmark(&draft).await {
            Ok(bookmark) => {
                self.view.render_front(&bookmark);
                self.form.clear();
                tracing::debug!(id = bookmark.id, "bookmark created");
            }
            Err(e) => {
                tracing::warn!(error = %e, "create failed");
                self.prompt.notify("Failed to add bookmark.");
            }
        }
    }

    /// Delete the bookmark with the given id (the per-item delete control).
    ///
    /// Asks for confirmation before sending anything; a decline issues no
    /// request. On success exactly the matching node is removed (a no-op if
    /// a racing delete already removed it). On failure the view is unchanged.
    pub async fn delete(&mut self, id: i64) -> DeleteOutcome {
        if !self
            .prompt
            .confirm("Are you sure you want to delete this bookmark?")
        {
            return DeleteOutcome::Declined;
        }

        match self.api.delete_bookmark(id).await {
            Ok(()) => {
                self.view.remove(id);
                self.prompt.notify("Bookmark deleted successfully.");
                tracing::debug!(id, "bookmark deleted");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "delete failed");
                self.prompt.notify("Failed to delete the bookmark.");
                DeleteOutcome::Failed
            }
        }
    }

    pub fn view(&self) -> &ViewManager {
        &self.view
    }

    pub fn form(&self) -> &FormManager {
        &self.form
    }
}
