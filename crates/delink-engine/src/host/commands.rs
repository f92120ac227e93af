use anyhow::Result;

use super::Host;
use crate::strip::strip_links;

/// The stripping operations a host can invoke.
///
/// The selection variants require a non-empty selection; invoking them with
/// nothing selected is rejected with a notice before the transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Strip the selection and put the result on the clipboard.
    StripSelectionToClipboard,
    /// Strip the whole document and put the result on the clipboard.
    StripDocumentToClipboard,
    /// Strip the selection and write it back over the selection.
    StripSelectionInPlace,
    /// Strip the whole document and write it back into the document.
    StripDocumentInPlace,
}

/// Runs `cmd` against `host`.
///
/// Errors only surface from clipboard delivery; every other path is
/// infallible.
pub fn apply<H: Host>(host: &mut H, cmd: Cmd) -> Result<()> {
    match cmd {
        Cmd::StripSelectionToClipboard => {
            let Some(text) = selection_or_notify(host) else {
                return Ok(());
            };
            host.copy_to_clipboard(&strip_links(&text))?;
            host.notify("Selection copied with internal links stripped");
        }
        Cmd::StripDocumentToClipboard => {
            let stripped = strip_links(&host.full_text());
            host.copy_to_clipboard(&stripped)?;
            host.notify("File copied with internal links stripped");
        }
        Cmd::StripSelectionInPlace => {
            let Some(text) = selection_or_notify(host) else {
                return Ok(());
            };
            host.replace_selection(&strip_links(&text));
        }
        Cmd::StripDocumentInPlace => {
            let stripped = strip_links(&host.full_text());
            host.set_full_text(&stripped);
        }
    }
    Ok(())
}

/// Enforces the non-empty-selection precondition for the selection commands.
fn selection_or_notify<H: Host>(host: &mut H) -> Option<String> {
    let text = host.selection();
    if text.is_empty() {
        host.notify("Cannot strip internal links from selection: selection empty");
        return None;
    }
    Some(text)
}
