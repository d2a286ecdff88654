//! Specifications: composable predicates over a domain entity.
//!
//! A [`Specification`] answers one question about one item: does it satisfy
//! the condition? Primitive specifications test a single attribute; compound
//! specifications join children with a [`Combinator`].
//!
//! New conditions are added by implementing the trait (or wrapping a closure
//! with [`from_fn`]); nothing in [`crate::filter`] changes when they are.
//!
//! ```
//! use specfilter::model::{Continent, Country, Language};
//! use specfilter::spec::{ContinentSpec, LanguageSpec, Specification};
//!
//! let english_or_african = LanguageSpec(Language::English)
//!     .combine_or(ContinentSpec(Continent::Africa));
//!
//! let egypt = Country::new("Egypt", Continent::Africa, Language::Arabic);
//! assert!(english_or_african.is_satisfied(&egypt));
//! ```

use crate::error::{Result, SpecError};
use crate::model::{Continent, Country, Language};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A shareable, type-erased specification.
pub type SharedSpec<T> = Arc<dyn Specification<T> + Send + Sync>;

/// A predicate over a single item.
///
/// Implementations must be pure: the answer depends only on `self` and `item`.
pub trait Specification<T>: fmt::Debug {
    fn is_satisfied(&self, item: &T) -> bool;

    /// Satisfied when both `self` and `other` are.
    fn combine_and<S>(self, other: S) -> CompoundSpec<T>
    where
        Self: Sized + Send + Sync + 'static,
        S: Specification<T> + Send + Sync + 'static,
    {
        CompoundSpec::pair(Combinator::All, Arc::new(self), Arc::new(other))
    }

    /// Satisfied when either `self` or `other` is.
    fn combine_or<S>(self, other: S) -> CompoundSpec<T>
    where
        Self: Sized + Send + Sync + 'static,
        S: Specification<T> + Send + Sync + 'static,
    {
        CompoundSpec::pair(Combinator::Any, Arc::new(self), Arc::new(other))
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// How a compound specification joins its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Conjunction: every child must be satisfied.
    #[default]
    All,
    /// Disjunction: at least one child must be satisfied.
    Any,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::All => write!(f, "all"),
            Combinator::Any => write!(f, "any"),
        }
    }
}

impl FromStr for Combinator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "and" => Ok(Combinator::All),
            "any" | "or" => Ok(Combinator::Any),
            _ => Err(format!("Unknown combinator: {}", s)),
        }
    }
}

/// Children joined by a [`Combinator`]. Never empty.
pub struct CompoundSpec<T> {
    combinator: Combinator,
    children: Vec<SharedSpec<T>>,
}

impl<T> CompoundSpec<T> {
    /// Builds a compound from one or more children.
    ///
    /// Returns [`SpecError::EmptyCompound`] if `children` is empty.
    pub fn new<I>(combinator: Combinator, children: I) -> Result<Self>
    where
        I: IntoIterator<Item = SharedSpec<T>>,
    {
        let children: Vec<_> = children.into_iter().collect();
        if children.is_empty() {
            return Err(SpecError::EmptyCompound);
        }
        tracing::debug!(%combinator, children = children.len(), "built compound specification");
        Ok(Self {
            combinator,
            children,
        })
    }

    fn pair(combinator: Combinator, left: SharedSpec<T>, right: SharedSpec<T>) -> Self {
        Self {
            combinator,
            children: vec![left, right],
        }
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn children(&self) -> &[SharedSpec<T>] {
        &self.children
    }
}

impl<T> Specification<T> for CompoundSpec<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        match self.combinator {
            Combinator::All => self.children.iter().all(|spec| spec.is_satisfied(item)),
            Combinator::Any => self.children.iter().any(|spec| spec.is_satisfied(item)),
        }
    }
}

impl<T> Clone for CompoundSpec<T> {
    fn clone(&self) -> Self {
        Self {
            combinator: self.combinator,
            children: self.children.clone(),
        }
    }
}

impl<T> fmt::Debug for CompoundSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundSpec")
            .field("combinator", &self.combinator)
            .field("children", &self.children)
            .finish()
    }
}

/// Satisfied when the country lies on the given continent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinentSpec(pub Continent);

impl Specification<Country> for ContinentSpec {
    fn is_satisfied(&self, country: &Country) -> bool {
        country.continent() == self.0
    }
}

/// Satisfied when the country speaks the given language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec(pub Language);

impl Specification<Country> for LanguageSpec {
    fn is_satisfied(&self, country: &Country) -> bool {
        country.language() == self.0
    }
}

/// A specification backed by a closure.
#[derive(Clone, Copy)]
pub struct FnSpec<F>(F);

/// Wraps a pure predicate closure as a [`Specification`].
pub fn from_fn<T, F>(predicate: F) -> FnSpec<F>
where
    F: Fn(&T) -> bool,
{
    FnSpec(predicate)
}

impl<T, F> Specification<T> for FnSpec<F>
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<F> fmt::Debug for FnSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSpec(..)")
    }
}
