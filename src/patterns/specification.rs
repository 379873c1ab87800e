//! Specification predicates and combinators

use crate::patterns::repository::Post;
use regex::Regex;

/// A named rule an item either satisfies or not
pub trait Specification<T> {
    fn is_satisfied_by(&self, item: &T) -> bool;

    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And(self, other)
    }

    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or(self, other)
    }

    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

/// Both rules hold
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

/// Either rule holds
#[derive(Debug, Clone)]
pub struct Or<A, B>(A, B);

/// The rule does not hold
#[derive(Debug, Clone)]
pub struct Not<A>(A);

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        self.0.is_satisfied_by(item) && self.1.is_satisfied_by(item)
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        self.0.is_satisfied_by(item) || self.1.is_satisfied_by(item)
    }
}

impl<T, A: Specification<T>> Specification<T> for Not<A> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        !self.0.is_satisfied_by(item)
    }
}

/// Post written by an exact author
#[derive(Debug, Clone)]
pub struct AuthorSpecification {
    pub author: String,
}

impl AuthorSpecification {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }
}

impl Specification<Post> for AuthorSpecification {
    fn is_satisfied_by(&self, post: &Post) -> bool {
        post.author == self.author
    }
}

/// Post whose title matches a regular expression
#[derive(Debug, Clone)]
pub struct TitleMatchesSpecification {
    pattern: Regex,
}

impl TitleMatchesSpecification {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Specification<Post> for TitleMatchesSpecification {
    fn is_satisfied_by(&self, post: &Post) -> bool {
        self.pattern.is_match(&post.title)
    }
}

/// Keep the items that satisfy `spec`, in their original order
pub fn filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    S: Specification<T> + ?Sized,
{
    items.iter().filter(|item| spec.is_satisfied_by(item)).collect()
}
