//! Runs a script and writes one human-readable line per result.

use std::io::Write;

use rust_rematch::{MatchResult, PatternCache, Result};

use crate::script::{Operation, Script};

/// Runs scripts, compiling patterns through a shared cache.
#[derive(Debug)]
pub struct Runner<'c> {
    cache: &'c PatternCache,
}

impl<'c> Runner<'c> {
    /// Create a runner over the given cache.
    #[must_use]
    pub const fn new(cache: &'c PatternCache) -> Self {
        Self { cache }
    }

    /// Run every step of the script in order.
    ///
    /// Stops at the first pattern that fails to compile.
    pub fn run<W: Write>(&self, script: &Script, out: &mut W) -> Result<()> {
        let input = script.input.as_str();

        for (index, step) in script.steps.iter().enumerate() {
            let pattern = self.cache.get_with_flags(&step.pattern, step.flags)?;
            tracing::info!(
                step = index + 1,
                pattern = %pattern,
                op = step.operation.name(),
                "applying pattern"
            );

            match &step.operation {
                Operation::Substitute { replacement } => {
                    writeln!(out, "{}", pattern.substitute_all(input, replacement))?;
                }
                Operation::Uppercase => {
                    let result = pattern.substitute_with(input, |m| m.as_str().to_uppercase());
                    writeln!(out, "{result}")?;
                }
                Operation::Lowercase => {
                    let result = pattern.substitute_with(input, |m| m.as_str().to_lowercase());
                    writeln!(out, "{result}")?;
                }
                Operation::FindAll => {
                    writeln!(out, "{:?}", pattern.find_all(input))?;
                }
                Operation::FindIter => {
                    for m in pattern.find_iter(input) {
                        write_match(out, &m)?;
                    }
                }
                Operation::MatchAt { anchor } => match pattern.match_at(input, *anchor) {
                    Some(m) => write_match(out, &m)?,
                    None => writeln!(out, "No match")?,
                },
                Operation::Split => {
                    writeln!(out, "{:?}", pattern.split(input))?;
                }
            }
        }

        Ok(())
    }
}

fn write_match<W: Write>(out: &mut W, m: &MatchResult<'_>) -> std::io::Result<()> {
    writeln!(
        out,
        "Match: {}, Start: {}, End: {}",
        m.as_str(),
        m.start(),
        m.end()
    )
}
