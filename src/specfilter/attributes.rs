//! `attr=value` terms.
//!
//! Turns user-supplied terms such as `language=german` into primitive
//! specifications, and joins several of them into one compound.

use crate::error::{Result, SpecError};
use crate::model::{Continent, Country, Language};
use crate::spec::{Combinator, CompoundSpec, ContinentSpec, LanguageSpec, SharedSpec, Specification};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A filterable country attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Continent,
    Language,
}

impl Attribute {
    pub const ALL: [Attribute; 2] = [Attribute::Continent, Attribute::Language];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Continent => "continent",
            Attribute::Language => "language",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.name() == wanted)
            .ok_or_else(|| SpecError::UnknownAttribute(s.trim().to_string()))
    }
}

/// A parsed term: one of the primitive country specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveSpec {
    Continent(ContinentSpec),
    Language(LanguageSpec),
}

impl Specification<Country> for PrimitiveSpec {
    fn is_satisfied(&self, country: &Country) -> bool {
        match self {
            PrimitiveSpec::Continent(spec) => spec.is_satisfied(country),
            PrimitiveSpec::Language(spec) => spec.is_satisfied(country),
        }
    }
}

impl fmt::Display for PrimitiveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveSpec::Continent(ContinentSpec(c)) => write!(f, "continent={}", c),
            PrimitiveSpec::Language(LanguageSpec(l)) => write!(f, "language={}", l),
        }
    }
}

/// Parses a single `attr=value` term.
pub fn parse_term(term: &str) -> Result<PrimitiveSpec> {
    let (attr, value) = term
        .split_once('=')
        .ok_or_else(|| SpecError::InvalidTerm(term.to_string()))?;
    let attribute: Attribute = attr.parse()?;
    let invalid = |_| SpecError::InvalidValue {
        attribute: attribute.to_string(),
        value: value.trim().to_string(),
    };

    let spec = match attribute {
        Attribute::Continent => {
            PrimitiveSpec::Continent(ContinentSpec(value.parse::<Continent>().map_err(invalid)?))
        }
        Attribute::Language => {
            PrimitiveSpec::Language(LanguageSpec(value.parse::<Language>().map_err(invalid)?))
        }
    };
    Ok(spec)
}

/// Parses every term and joins them with `combinator`.
///
/// The first malformed term aborts the build. No terms at all is an
/// [`SpecError::EmptyCompound`].
pub fn build_spec<I>(terms: I, combinator: Combinator) -> Result<CompoundSpec<Country>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let children = terms
        .into_iter()
        .map(|term| parse_term(term.as_ref()).map(|spec| Arc::new(spec) as SharedSpec<Country>))
        .collect::<Result<Vec<_>>>()?;
    CompoundSpec::new(combinator, children)
}
