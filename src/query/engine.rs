// src/query/engine.rs

use std::cmp::Ordering;

/// A set of filters plus an ordering over records of type `T`.
///
/// `matches` is the AND of every active predicate. `compare` defaults to
/// `Equal`, which leaves the collection in its original order.
pub trait Criteria<T> {
    fn matches(&self, record: &T) -> bool;

    fn compare(&self, _a: &T, _b: &T) -> Ordering {
        Ordering::Equal
    }
}

/// Filter then stable-sort `records`. The source slice is never touched;
/// the result borrows from it.
pub fn run<'a, T, C>(records: &'a [T], criteria: &C) -> Vec<&'a T>
where
    C: Criteria<T> + ?Sized,
{
    let mut out: Vec<&T> = records.iter().filter(|r| criteria.matches(r)).collect();
    // sort_by is stable: equal keys keep input order
    out.sort_by(|a, b| criteria.compare(a, b));
    out
}

/// Lowercased, trimmed free-text needle. Blank input yields `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery(String);

impl TextQuery {
    pub fn new(raw: &str) -> Option<Self> {
        let q = raw.trim().to_lowercase();
        (!q.is_empty()).then_some(Self(q))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    pub fn matches_any<'a, I>(&self, haystacks: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        haystacks.into_iter().any(|h| self.matches(h))
    }
}

/// `None` means "no text filter".
pub fn text_matches(query: &Option<TextQuery>, haystack: &str) -> bool {
    query.as_ref().map_or(true, |q| q.matches(haystack))
}
