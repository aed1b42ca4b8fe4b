//! File system helpers for writing generated descriptors.
//!
//! - [`ensure_dir`] creates the target directory on demand.
//! - [`atomic_write`] / [`safe_write`] write through a temp file and rename, so
//!   a build never picks up a half-written POM.
//! - [`calculate_checksum`] produces the `sha256:<hex>` digest reported for
//!   attached artifacts.
//!
//! ```rust,no_run
//! use pdeps_cli::utils::fs::{calculate_checksum, ensure_dir, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("target"))?;
//! safe_write(Path::new("target/app-compile-compile.pom"), "<project/>")?;
//! let checksum = calculate_checksum(Path::new("target/app-compile-compile.pom"))?;
//! println!("{checksum}");
//! # Ok(())
//! # }
//! ```

mod atomic;
mod checksum;
mod dirs;

pub use atomic::{atomic_write, safe_write};
pub use checksum::calculate_checksum;
pub use dirs::ensure_dir;
