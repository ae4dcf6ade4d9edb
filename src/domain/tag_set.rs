//! Immutable set of tags owned by a person.

use super::tag::Tag;
use std::collections::BTreeSet;
use std::fmt;

/// A deduplicated, immutable collection of [`Tag`]s.
///
/// Iteration is in sorted tag order. Nothing about that order is meaningful
/// to the domain, but it keeps serialized output stable for a given set.
///
/// "Adding" or "removing" a tag produces a new set:
///
/// ```
/// use staffbook::domain::{Tag, TagSet};
///
/// let tags = TagSet::new([Tag::new("manager").unwrap()]);
/// let more = tags.with(Tag::new("remote").unwrap());
/// assert_eq!(tags.len(), 1);
/// assert_eq!(more.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self(tags.into_iter().collect())
    }

    /// An owned copy of the tags; changes to it do not affect this set.
    pub fn elements(&self) -> BTreeSet<Tag> {
        self.0.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.0.iter()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new set containing every tag in this one plus `tag`.
    pub fn with(&self, tag: Tag) -> Self {
        let mut tags = self.0.clone();
        tags.insert(tag);
        Self(tags)
    }

    /// A new set containing every tag in this one except `tag`.
    pub fn without(&self, tag: &Tag) -> Self {
        Self(self.0.iter().filter(|t| *t != tag).cloned().collect())
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::collections::btree_set::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tag)?;
        }
        write!(f, "]")
    }
}
