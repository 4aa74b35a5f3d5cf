//! rust-rematch-macros: Procedural macros for rust-rematch
//!
//! - [`pattern!`] - Compile-time validated patterns
//!
//! # Example
//!
//! ```ignore
//! use rust_rematch::pattern;
//!
//! let words = pattern!(r"\b\w{2}\b");
//! let greeting = pattern!(r"hello", CASE_INSENSITIVE);
//! ```

// In proc-macro crates, passing parsed input by value is idiomatic
#![allow(clippy::needless_pass_by_value)]

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod pattern;

/// Create a `&'static Pattern` whose source is validated at compile time.
///
/// An invalid source is reported as a compile error pointing at the literal.
/// Flags are given by their `PatternFlags` constant names, joined with `|`.
///
/// # Syntax
///
/// ```ignore
/// pattern!(r"source")
/// pattern!(r"source", CASE_INSENSITIVE | MULTI_LINE)
/// ```
///
/// The pattern is compiled on first use and shared afterwards.
#[proc_macro]
pub fn pattern(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as pattern::PatternInput);
    pattern::expand(input).into()
}
