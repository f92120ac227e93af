//! Host environment abstraction.
//!
//! The engine never talks to an editor, a clipboard, or a user directly.
//! Whatever surrounds it (a CLI buffer, an editor integration, a test
//! double) implements [`Host`], and the command layer ([`Cmd`], [`apply`])
//! drives the stripping operations through that interface.

mod commands;

pub use commands::{Cmd, apply};

/// The editor-side collaborator the command layer runs against.
///
/// `selection` and `full_text` source the input buffer; the remaining
/// operations deliver output and surface notices to the user. Only clipboard
/// delivery can fail, since it crosses into the host platform.
pub trait Host {
    /// Currently selected text, empty when nothing is selected.
    fn selection(&self) -> String;

    /// The whole document.
    fn full_text(&self) -> String;

    /// Replace the current selection with `text`.
    fn replace_selection(&mut self, text: &str);

    /// Replace the whole document with `text`.
    fn set_full_text(&mut self, text: &str);

    /// Show a short informational message to the user.
    fn notify(&mut self, message: &str);

    /// Put `text` on the system clipboard.
    fn copy_to_clipboard(&mut self, text: &str) -> anyhow::Result<()>;
}
