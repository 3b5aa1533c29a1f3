use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::kernel::constants::{SYMBOL_AT, SYMBOL_COMMA, SYMBOL_STAR};

/// One unit of a load directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadCriterion {
    /// Every driver code at its highest version (`*`)
    All,
    /// Highest version among drivers whose code contains the fragment
    CodeOnly(String),
    /// The exact version of a driver whose code contains the fragment
    CodeAndVersion { code: String, version: String },
}

impl LoadCriterion {
    /// Interpret one trimmed, non-empty directive token.
    ///
    /// Only the first `@` separates code from version; anything after a
    /// second `@` is dropped rather than rejected.
    pub fn from_token(token: &str) -> Self {
        if token == SYMBOL_STAR {
            return LoadCriterion::All;
        }
        match token.split_once(SYMBOL_AT) {
            Some((code, rest)) => {
                let version = rest.split(SYMBOL_AT).next().unwrap_or_default();
                LoadCriterion::CodeAndVersion {
                    code: code.to_string(),
                    version: version.to_string(),
                }
            }
            None => LoadCriterion::CodeOnly(token.to_string()),
        }
    }

    /// Pinned criteria install unconditionally.
    pub fn is_pinned(&self) -> bool {
        matches!(self, LoadCriterion::CodeAndVersion { .. })
    }
}

impl fmt::Display for LoadCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadCriterion::All => f.write_str(SYMBOL_STAR),
            LoadCriterion::CodeOnly(code) => f.write_str(code),
            LoadCriterion::CodeAndVersion { code, version } => write!(f, "{}{}{}", code, SYMBOL_AT, version),
        }
    }
}

/// A parsed load directive: criteria in evaluation order.
///
/// `*` is never exclusive. When present anywhere it contributes a single
/// [`LoadCriterion::All`] at the front, and the explicit tokens that follow
/// are still evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadDirective {
    criteria: Vec<LoadCriterion>,
}

impl LoadDirective {
    /// Parse a raw comma-separated directive. Blank input yields an empty directive.
    pub fn parse(raw: &str) -> Self {
        let tokens: Vec<&str> = raw
            .trim()
            .split(SYMBOL_COMMA)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();

        let mut criteria = Vec::with_capacity(tokens.len());
        if tokens.contains(&SYMBOL_STAR) {
            criteria.push(LoadCriterion::All);
        }
        criteria.extend(
            tokens
                .iter()
                .filter(|token| **token != SYMBOL_STAR)
                .map(|token| LoadCriterion::from_token(token)),
        );
        Self { criteria }
    }

    /// Parse an optional directive; `None` behaves like an empty string.
    pub fn parse_optional(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn criteria(&self) -> &[LoadCriterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// True when the directive selects every driver code
    pub fn loads_all(&self) -> bool {
        self.criteria.first() == Some(&LoadCriterion::All)
    }
}

impl FromStr for LoadDirective {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LoadDirective::parse(s))
    }
}

impl fmt::Display for LoadDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.criteria.iter().map(ToString::to_string).collect();
        f.write_str(&tokens.join(","))
    }
}
