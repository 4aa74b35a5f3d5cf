//! Matching flags applied when compiling a pattern.

use serde::{Deserialize, Deserializer};

use crate::error::{RematchError, Result};

bitflags::bitflags! {
    /// Flags that change how a pattern is compiled.
    ///
    /// Each flag corresponds to an inline flag of the pattern syntax, so
    /// `CASE_INSENSITIVE` has the same effect as a leading `(?i)`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u8 {
        /// Letters match regardless of case (`i`).
        const CASE_INSENSITIVE = 0b0000_0001;
        /// `^` and `$` match at line boundaries (`m`).
        const MULTI_LINE = 0b0000_0010;
        /// `.` also matches `\n` (`s`).
        const DOT_MATCHES_NEW_LINE = 0b0000_0100;
        /// Whitespace is ignored and `#` starts a comment (`x`).
        const IGNORE_WHITESPACE = 0b0000_1000;
        /// Quantifiers are lazy by default (`U`).
        const SWAP_GREED = 0b0001_0000;
        /// Line anchors treat `\r\n` as a line terminator (`R`).
        const CRLF = 0b0010_0000;
    }
}

impl PatternFlags {
    /// Parse a single flag from its name or alias.
    ///
    /// Accepts the constant name (`CASE_INSENSITIVE`), the inline letter
    /// (`i`), and the conventional long names (`IGNORECASE`, `MULTILINE`,
    /// `DOTALL`, `VERBOSE`). Names are case-insensitive except the single
    /// letters, where `U` and `R` differ from `u` and `r`.
    pub fn parse_one(name: &str) -> Result<Self> {
        let name = name.trim();
        let flag = match name {
            "i" | "I" => Some(Self::CASE_INSENSITIVE),
            "m" | "M" => Some(Self::MULTI_LINE),
            "s" | "S" => Some(Self::DOT_MATCHES_NEW_LINE),
            "x" | "X" => Some(Self::IGNORE_WHITESPACE),
            "U" => Some(Self::SWAP_GREED),
            "R" => Some(Self::CRLF),
            _ => match name.to_ascii_uppercase().replace('-', "_").as_str() {
                "CASE_INSENSITIVE" | "IGNORECASE" | "IGNORE_CASE" => Some(Self::CASE_INSENSITIVE),
                "MULTI_LINE" | "MULTILINE" => Some(Self::MULTI_LINE),
                "DOT_MATCHES_NEW_LINE" | "DOTALL" => Some(Self::DOT_MATCHES_NEW_LINE),
                "IGNORE_WHITESPACE" | "VERBOSE" => Some(Self::IGNORE_WHITESPACE),
                "SWAP_GREED" | "UNGREEDY" => Some(Self::SWAP_GREED),
                "CRLF" => Some(Self::CRLF),
                _ => None,
            },
        };

        flag.ok_or_else(|| RematchError::config(format!("unknown pattern flag: {name}")))
    }

    /// Parse a `|`- or `,`-separated list of flags.
    ///
    /// An empty or all-whitespace string yields no flags.
    pub fn parse_list(list: &str) -> Result<Self> {
        list.split(['|', ','])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(Self::empty(), |acc, name| Ok(acc | Self::parse_one(name)?))
    }

    /// Combine flags given by name.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(Self::empty(), |acc, name| Ok(acc | Self::parse_one(name.as_ref())?))
    }

    /// Render the flags as an inline flag group such as `(?im)`.
    ///
    /// Returns an empty string when no flag is set.
    #[must_use]
    pub fn inline(self) -> String {
        const LETTERS: [(PatternFlags, char); 6] = [
            (PatternFlags::CASE_INSENSITIVE, 'i'),
            (PatternFlags::MULTI_LINE, 'm'),
            (PatternFlags::DOT_MATCHES_NEW_LINE, 's'),
            (PatternFlags::IGNORE_WHITESPACE, 'x'),
            (PatternFlags::SWAP_GREED, 'U'),
            (PatternFlags::CRLF, 'R'),
        ];

        let letters: String = LETTERS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, c)| *c)
            .collect();

        if letters.is_empty() {
            letters
        } else {
            format!("(?{letters})")
        }
    }
}

/// Accepts either a flag list string (`"i|m"`) or an array of names.
impl<'de> Deserialize<'de> for PatternFlags {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            List(String),
            Names(Vec<String>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::List(list) => Self::parse_list(&list),
            Repr::Names(names) => Self::from_names(names),
        }
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!(
            PatternFlags::parse_one("i").unwrap(),
            PatternFlags::CASE_INSENSITIVE
        );
        assert_eq!(
            PatternFlags::parse_one("ignorecase").unwrap(),
            PatternFlags::CASE_INSENSITIVE
        );
        assert_eq!(
            PatternFlags::parse_one("dot-matches-new-line").unwrap(),
            PatternFlags::DOT_MATCHES_NEW_LINE
        );
        assert_eq!(
            PatternFlags::parse_one("VERBOSE").unwrap(),
            PatternFlags::IGNORE_WHITESPACE
        );
        assert_eq!(PatternFlags::parse_one("U").unwrap(), PatternFlags::SWAP_GREED);
    }

    #[test]
    fn parse_unknown_flag() {
        let err = PatternFlags::parse_one("unicode").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("unicode"));
    }

    #[test]
    fn parse_list() {
        let flags = PatternFlags::parse_list("IGNORECASE | m, s").unwrap();
        assert_eq!(
            flags,
            PatternFlags::CASE_INSENSITIVE
                | PatternFlags::MULTI_LINE
                | PatternFlags::DOT_MATCHES_NEW_LINE
        );
        assert_eq!(PatternFlags::parse_list("  ").unwrap(), PatternFlags::empty());
    }

    #[test]
    fn from_names() {
        let flags = PatternFlags::from_names(["i", "MULTILINE"]).unwrap();
        assert_eq!(flags, PatternFlags::CASE_INSENSITIVE | PatternFlags::MULTI_LINE);
        assert!(PatternFlags::from_names(["i", "bogus"]).is_err());
    }

    #[test]
    fn deserialize_string_or_list() {
        #[derive(Deserialize)]
        struct Holder {
            flags: PatternFlags,
        }

        let h: Holder = toml::from_str(r#"flags = "i|x""#).unwrap();
        assert_eq!(
            h.flags,
            PatternFlags::CASE_INSENSITIVE | PatternFlags::IGNORE_WHITESPACE
        );

        let h: Holder = serde_json::from_str(r#"{"flags": ["MULTILINE"]}"#).unwrap();
        assert_eq!(h.flags, PatternFlags::MULTI_LINE);

        assert!(toml::from_str::<Holder>(r#"flags = "q""#).is_err());
    }

    #[test]
    fn inline_rendering() {
        assert_eq!(PatternFlags::empty().inline(), "");
        assert_eq!(
            (PatternFlags::CASE_INSENSITIVE | PatternFlags::SWAP_GREED).inline(),
            "(?iU)"
        );
    }
}
