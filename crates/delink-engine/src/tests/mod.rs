//! Shared test fixtures.

use crate::host::Host;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for file-based tests.
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Create a file with the given content inside a test directory.
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Scripted [`Host`] that records everything the command layer does to it.
#[derive(Debug, Default)]
pub struct FakeEditor {
    pub selection: String,
    pub text: String,
    pub replaced_selection: Option<String>,
    pub clipboard: Option<String>,
    pub notices: Vec<String>,
    pub fail_clipboard: bool,
}

impl FakeEditor {
    pub fn with_selection(selection: &str) -> Self {
        Self {
            selection: selection.to_string(),
            ..Self::default()
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }
}

impl Host for FakeEditor {
    fn selection(&self) -> String {
        self.selection.clone()
    }

    fn full_text(&self) -> String {
        self.text.clone()
    }

    fn replace_selection(&mut self, text: &str) {
        self.replaced_selection = Some(text.to_string());
    }

    fn set_full_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn copy_to_clipboard(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail_clipboard {
            anyhow::bail!("clipboard unavailable");
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}
