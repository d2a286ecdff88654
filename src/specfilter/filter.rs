//! Filtering: applying a specification to a sequence of items.
//!
//! [`filter`] borrows its input and returns [`Matches`], a lazy iterator that
//! pulls items one at a time and yields those satisfying the specification,
//! in input order. Nothing is collected until the caller asks for it, and
//! dropping the iterator early is how a pass is cancelled. To filter again,
//! call [`filter`] again.

use crate::model::{Continent, Country, Language};
use crate::spec::Specification;
use std::iter::{Fuse, FusedIterator};

/// Lazily yields the items of `items` that satisfy `spec`.
pub fn filter<'a, T, I, S>(items: I, spec: &'a S) -> Matches<'a, I::IntoIter, S>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    tracing::debug!("starting filter pass");
    Matches {
        items: items.into_iter().fuse(),
        spec,
    }
}

/// Iterator returned by [`filter`].
pub struct Matches<'a, I, S: ?Sized> {
    items: Fuse<I>,
    spec: &'a S,
}

impl<'a, T, I, S> Iterator for Matches<'a, I, S>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.items.by_ref() {
            let satisfied = self.spec.is_satisfied(item);
            tracing::trace!(satisfied, "evaluated item");
            if satisfied {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.items.size_hint();
        (0, upper)
    }
}

impl<'a, T, I, S> FusedIterator for Matches<'a, I, S>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
}

/// Something that can select items from a slice.
pub trait Filter<T> {
    fn filter<'a, S>(&self, items: &'a [T], spec: &'a S) -> Matches<'a, std::slice::Iter<'a, T>, S>
    where
        S: Specification<T> + ?Sized;
}

/// Filter driven entirely by a [`Specification`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a, S>(&self, items: &'a [T], spec: &'a S) -> Matches<'a, std::slice::Iter<'a, T>, S>
    where
        S: Specification<T> + ?Sized,
    {
        filter(items, spec)
    }
}

/// One method per attribute. Every new criterion (or combination of
/// criteria) means editing this type; [`BetterFilter`] avoids that.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadFilter;

impl BadFilter {
    pub fn by_language<'a>(
        &self,
        countries: &'a [Country],
        language: Language,
    ) -> impl Iterator<Item = &'a Country> + 'a {
        countries.iter().filter(move |c| c.language() == language)
    }

    pub fn by_continent<'a>(
        &self,
        countries: &'a [Country],
        continent: Continent,
    ) -> impl Iterator<Item = &'a Country> + 'a {
        countries.iter().filter(move |c| c.continent() == continent)
    }
}
