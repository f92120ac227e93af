pub mod host;
pub mod io;
pub mod strip;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use host::{Cmd, Host, apply};
pub use io::*;
pub use strip::strip_links;
