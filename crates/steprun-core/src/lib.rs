pub mod error;
mod path;
pub mod types;

pub use error::*;
pub use path::{CurrentDirProvider, FixedPathProvider, LaunchRootProvider, resolve_directory_change};
pub use types::*;
