//! Edit Session
//!
//! Viewing/Editing state for inline text edits. At most one item is edited
//! at a time and a session is finished exactly once.

use crate::repository::StorageResult;

/// Current edit state of the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Viewing,
    Editing { item_id: String },
}

impl EditSession {
    pub fn is_editing(&self, id: &str) -> bool {
        matches!(self, EditSession::Editing { item_id } if item_id == id)
    }

    /// Enter edit mode for `id`. Returns `false` if it was already being edited.
    pub fn begin(&mut self, id: &str) -> bool {
        if self.is_editing(id) {
            return false;
        }
        *self = EditSession::Editing { item_id: id.to_string() };
        true
    }

    /// Leave edit mode for `id`. Returns `false` if `id` was not being edited,
    /// so a second commit of the same session is ignored.
    pub fn finish(&mut self, id: &str) -> bool {
        if !self.is_editing(id) {
            return false;
        }
        *self = EditSession::Viewing;
        true
    }

    /// Run `write` for the session of `id` and finish it only if the write
    /// succeeded, so a failed save keeps the draft on screen.
    ///
    /// Returns `None` when `id` is not being edited (the commit already ran).
    pub fn commit_with(
        &mut self,
        id: &str,
        write: impl FnOnce() -> StorageResult<bool>,
    ) -> Option<StorageResult<bool>> {
        if !self.is_editing(id) {
            return None;
        }
        let result = write();
        if result.is_ok() {
            self.finish(id);
        }
        Some(result)
    }
}

/// What a keydown inside the edit surface means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Commit,
    /// Let the surface handle the key (typing, Shift+Enter line break)
    Edit,
}

pub fn key_intent(key: &str, shift: bool, composing: bool) -> KeyIntent {
    if key == "Enter" && !shift && !composing {
        KeyIntent::Commit
    } else {
        KeyIntent::Edit
    }
}
