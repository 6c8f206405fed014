//! Notebook store: the ordered memo list and its selection.
//!
//! # Responsibility
//! - Own the memo list, the active-memo pointer and all mutations.
//! - Persist the whole snapshot after every mutation.
//! - Derive tab titles from opaque markup content.
//!
//! # Invariants
//! - `active_id` is `None` or references an existing memo.
//! - Memo ids are unique within the list.
//! - Content updates are full replacements, never partial patches.

use crate::model::memo::{Memo, MemoId};
use crate::repo::state_repo::{NotebookSnapshot, RepoError, StateRepository};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static MARKUP_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const TITLE_MAX_CHARS: usize = 10;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for notebook operations.
#[derive(Debug)]
pub enum StoreError {
    /// Caller referenced a memo id that does not exist. Recoverable; the
    /// caller should ignore or log it.
    InvalidReference(MemoId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReference(id) => write!(f, "memo not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidReference(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Ordered memo list plus selection, bound to a snapshot repository.
///
/// Every mutating operation persists the whole snapshot before returning.
pub struct Notebook<R: StateRepository> {
    memos: Vec<Memo>,
    active_id: Option<MemoId>,
    repo: R,
}

impl<R: StateRepository> Notebook<R> {
    /// Loads persisted state, or starts empty when no usable state exists.
    ///
    /// An absent slot or a malformed payload is treated as "no prior state"
    /// and logged, never surfaced. Transport failures propagate.
    pub fn load(repo: R) -> StoreResult<Self> {
        let snapshot = match repo.load_snapshot() {
            Ok(snapshot) => snapshot,
            Err(RepoError::MalformedPayload(message)) => {
                warn!("event=state_load module=store status=malformed detail={message}");
                None
            }
            Err(other) => return Err(other.into()),
        };

        let mut notebook = Self {
            memos: Vec::new(),
            active_id: None,
            repo,
        };
        if let Some(snapshot) = snapshot {
            notebook.adopt(snapshot);
        }
        Ok(notebook)
    }

    /// Creates an empty memo, appends it and makes it active.
    ///
    /// Returns the new memo's id after the snapshot has been persisted.
    pub fn add(&mut self) -> StoreResult<MemoId> {
        let memo = Memo::new();
        let id = memo.id;
        self.memos.push(memo);
        self.active_id = Some(id);
        self.persist()?;
        Ok(id)
    }

    /// Removes the memo with the given id.
    ///
    /// When the active memo is removed, the selection moves to the nearest
    /// remaining memo (the one that slid into the removed slot, else the new
    /// last memo), or clears when the list is empty. Unknown ids are a
    /// no-op.
    pub fn delete(&mut self, id: MemoId) -> StoreResult<()> {
        let Some(index) = self.memos.iter().position(|memo| memo.id == id) else {
            debug!("event=memo_delete module=store status=unknown_id id={id}");
            return Ok(());
        };
        self.memos.remove(index);

        if self.active_id == Some(id) {
            self.active_id = if self.memos.is_empty() {
                None
            } else {
                let nearest = index.min(self.memos.len() - 1);
                Some(self.memos[nearest].id)
            };
        }
        self.persist()
    }

    /// Selects the memo with the given id.
    ///
    /// # Errors
    /// - [`StoreError::InvalidReference`] when no memo has that id.
    pub fn set_active(&mut self, id: MemoId) -> StoreResult<()> {
        if !self.memos.iter().any(|memo| memo.id == id) {
            return Err(StoreError::InvalidReference(id));
        }
        self.active_id = Some(id);
        self.persist()
    }

    /// Replaces the full content of the memo with the given id.
    ///
    /// Unknown ids are a no-op.
    pub fn update_content(&mut self, id: MemoId, content: impl Into<String>) -> StoreResult<()> {
        let content = content.into();
        let Some(memo) = self.memos.iter_mut().find(|memo| memo.id == id) else {
            debug!("event=memo_update module=store status=unknown_id id={id}");
            return Ok(());
        };
        memo.content = content;
        self.persist()
    }

    /// Serializes the whole snapshot into the slot.
    pub fn persist(&mut self) -> StoreResult<()> {
        let snapshot = NotebookSnapshot {
            memos: self.memos.clone(),
            active_id: self.active_id,
        };
        self.repo.save_snapshot(&snapshot)?;
        Ok(())
    }

    /// Memos in insertion order.
    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    /// Currently selected memo id, if any.
    pub fn active_id(&self) -> Option<MemoId> {
        self.active_id
    }

    /// Currently selected memo, if any.
    pub fn active_memo(&self) -> Option<&Memo> {
        let active_id = self.active_id?;
        self.memos.iter().find(|memo| memo.id == active_id)
    }

    /// Adopts a persisted snapshot, repairing it where needed: duplicate ids
    /// are dropped (first occurrence wins) and a missing or dangling
    /// selection falls back to the first memo.
    fn adopt(&mut self, snapshot: NotebookSnapshot) {
        let mut seen = HashSet::new();
        for memo in snapshot.memos {
            if seen.insert(memo.id) {
                self.memos.push(memo);
            } else {
                warn!(
                    "event=state_load module=store status=duplicate_id id={}",
                    memo.id
                );
            }
        }

        self.active_id = snapshot
            .active_id
            .filter(|id| seen.contains(id))
            .or_else(|| self.memos.first().map(|memo| memo.id));
    }
}

/// Derives the tab title for a memo.
///
/// Strips markup tags, collapses whitespace and keeps the first 10
/// characters; an empty result falls back to `"Memo {index + 1}"`. Pure and
/// side-effect free.
pub fn title_for(memo: &Memo, index: usize) -> String {
    let without_tags = MARKUP_TAG_RE.replace_all(&memo.content, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_tags, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        format!("Memo {}", index + 1)
    } else {
        trimmed.chars().take(TITLE_MAX_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::title_for;
    use crate::model::memo::Memo;
    use uuid::Uuid;

    fn memo_with_content(content: &str) -> Memo {
        Memo::with_id(Uuid::new_v4(), content, 0)
    }

    #[test]
    fn title_truncates_tag_stripped_text_to_ten_chars() {
        let memo = memo_with_content("<b>Hello World</b>");
        assert_eq!(title_for(&memo, 0), "Hello Worl");
    }

    #[test]
    fn title_falls_back_to_positional_name_for_empty_content() {
        let memo = memo_with_content("");
        assert_eq!(title_for(&memo, 0), "Memo 1");
        assert_eq!(title_for(&memo, 4), "Memo 5");
    }

    #[test]
    fn title_falls_back_when_content_is_markup_only() {
        let memo = memo_with_content("<div><br></div>");
        assert_eq!(title_for(&memo, 1), "Memo 2");
    }

    #[test]
    fn title_collapses_whitespace_between_fragments() {
        let memo = memo_with_content("<div>a</div>\n<div>b</div>");
        assert_eq!(title_for(&memo, 0), "a b");
    }

    #[test]
    fn short_plain_text_is_kept_verbatim() {
        let memo = memo_with_content("  todo  ");
        assert_eq!(title_for(&memo, 0), "todo");
    }
}
