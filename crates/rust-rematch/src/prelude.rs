//! Convenient re-exports for common rust-rematch usage.
//!
//! # Example
//!
//! ```
//! use rust_rematch::prelude::*;
//!
//! let pattern = Pattern::new(r"\b\w{2}\b")?;
//! assert_eq!(pattern.find_all("This is a sample text"), vec!["is"]);
//! # Ok::<(), RematchError>(())
//! ```

// Pattern types
pub use crate::matcher::{Anchor, MatchResult, Pattern, PatternBuilder, PatternFlags};

// Error handling
pub use crate::error::{RematchError, Result};

// Macros (re-exported from rust-rematch-macros)
pub use crate::pattern;
