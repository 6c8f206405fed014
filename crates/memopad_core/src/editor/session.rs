//! Session binding between the notebook store and an editable surface.
//!
//! # Responsibility
//! - Enforce the core's obligations toward the surface: replace its content
//!   exactly once per activation, write its content back into the active
//!   memo on input changes, and never touch it otherwise.
//!
//! # Invariants
//! - Surface content is only replaced when a different memo becomes active
//!   (including the initial sync and post-delete reselection).
//! - Formatting commands are forwarded only while a memo is active.

use crate::editor::command::{Command, PaletteColor, SizeTier};
use crate::model::memo::MemoId;
use crate::repo::state_repo::StateRepository;
use crate::service::notebook::{Notebook, StoreResult};
use log::debug;

/// Host-provided editable surface.
///
/// Implementations own the actual rich-text engine; the core only reads the
/// full content, replaces it wholesale, and forwards formatting commands.
pub trait EditorSurface {
    /// Current full markup content of the surface.
    fn content(&self) -> String;
    /// Replaces the full surface content.
    fn replace_content(&mut self, content: &str);
    /// Applies one formatting command to the current selection.
    fn apply_command(&mut self, name: &str, value: Option<&str>);
}

/// Binds a [`Notebook`] to an [`EditorSurface`].
///
/// The host dispatches user intents (tab clicks, toolbar buttons, input
/// notifications) here; the session keeps store and surface in step.
pub struct NotebookSession<R: StateRepository, S: EditorSurface> {
    store: Notebook<R>,
    surface: S,
}

impl<R: StateRepository, S: EditorSurface> NotebookSession<R, S> {
    /// Creates a session and syncs the surface to the active memo, if any.
    ///
    /// An empty store leaves the surface untouched.
    pub fn new(store: Notebook<R>, surface: S) -> Self {
        let mut session = Self { store, surface };
        if let Some(memo) = session.store.active_memo() {
            let content = memo.content.clone();
            session.surface.replace_content(&content);
        }
        session
    }

    /// Activates the memo with the given id and shows its stored content.
    ///
    /// Re-activating the already-active memo leaves the surface untouched.
    pub fn activate(&mut self, id: MemoId) -> StoreResult<()> {
        if self.store.active_id() == Some(id) {
            return Ok(());
        }
        self.store.set_active(id)?;
        self.refresh_surface();
        Ok(())
    }

    /// Creates a new memo, activates it and clears the surface.
    pub fn add_memo(&mut self) -> StoreResult<MemoId> {
        let id = self.store.add()?;
        self.surface.replace_content("");
        Ok(id)
    }

    /// Deletes the memo with the given id.
    ///
    /// The surface is refreshed only when the selection moved as a result.
    pub fn delete_memo(&mut self, id: MemoId) -> StoreResult<()> {
        let selection_before = self.store.active_id();
        self.store.delete(id)?;
        if self.store.active_id() != selection_before {
            self.refresh_surface();
        }
        Ok(())
    }

    /// Writes the surface's current content back into the active memo.
    ///
    /// Invoked by the host on every input-change notification. A no-op when
    /// no memo is active.
    pub fn handle_input(&mut self) -> StoreResult<()> {
        let Some(active_id) = self.store.active_id() else {
            return Ok(());
        };
        let content = self.surface.content();
        self.store.update_content(active_id, content)
    }

    /// Forwards one formatting command to the surface.
    ///
    /// Commands are view-gated to an active memo; without one the command is
    /// dropped rather than escalated to an error.
    pub fn apply(&mut self, command: Command) {
        if self.store.active_id().is_none() {
            debug!(
                "event=command_drop module=editor status=no_active_memo name={}",
                command.name()
            );
            return;
        }
        self.surface.apply_command(command.name(), command.value());
    }

    /// Resets the selection to default formatting.
    ///
    /// Fixed composite sequence: strip formatting, reapply default
    /// foreground and size, clear the highlight.
    pub fn reset_format(&mut self) {
        for command in [
            Command::RemoveFormat,
            Command::ForeColor(PaletteColor::Black),
            Command::FontSize(SizeTier::default()),
            Command::ClearHighlight,
        ] {
            self.apply(command);
        }
    }

    /// The underlying store, for rendering tabs and titles.
    pub fn store(&self) -> &Notebook<R> {
        &self.store
    }

    /// The bound surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the bound surface, for hosts that drive it
    /// directly (focus handling, selection, test doubles).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn refresh_surface(&mut self) {
        let content = self
            .store
            .active_memo()
            .map(|memo| memo.content.clone())
            .unwrap_or_default();
        self.surface.replace_content(&content);
    }
}
