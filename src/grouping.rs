//! Grouping of ordered records into runs that share a key.
//!
//! Grouping is by adjacent runs, not a partition: two records with equal
//! keys separated by a record with a different key land in different bags.
//! Input order is preserved both across bags and within each bag.

use tracing::debug;

/// A record that exposes the key it is grouped by.
///
/// Key equality is `PartialEq`, so a derived implementation gives deep
/// structural comparison over nested fields.
pub trait Groupable {
    /// The grouping key
    type Key: PartialEq + Clone;

    /// Returns the key of this record.
    fn group_key(&self) -> &Self::Key;
}

/// A maximal run of adjacent records with equal keys.
///
/// A bag always holds at least one member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bag<K, R> {
    key: K,
    members: Vec<R>,
}

impl<K, R> Bag<K, R> {
    /// Starts a bag from its first member.
    #[must_use]
    pub fn new(key: K, first: R) -> Self {
        Self {
            key,
            members: vec![first],
        }
    }

    /// Returns the key shared by every member.
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the members in input order.
    #[must_use]
    pub fn members(&self) -> &[R] {
        &self.members
    }

    /// Returns the first member.
    #[must_use]
    pub fn first(&self) -> &R {
        // Constructed with one member and only ever appended to.
        &self.members[0]
    }

    /// Returns the number of members, never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Consumes the bag, returning its members.
    #[must_use]
    pub fn into_members(self) -> Vec<R> {
        self.members
    }

    /// Consumes the bag, returning its key and members.
    #[must_use]
    pub fn into_parts(self) -> (K, Vec<R>) {
        (self.key, self.members)
    }

    fn push(&mut self, record: R) {
        self.members.push(record);
    }
}

/// Streaming run grouper.
///
/// # Examples
///
/// ```
/// use lexicard::RunGrouper;
///
/// let mut grouper = RunGrouper::new(|n: &i32| n % 2);
/// for n in [1, 3, 2, 5] {
///     grouper.push(n);
/// }
/// let bags = grouper.finish();
/// assert_eq!(bags.len(), 3);
/// assert_eq!(bags[0].members(), &[1, 3]);
/// ```
#[derive(Debug)]
pub struct RunGrouper<K, R, F> {
    key_of: F,
    current: Option<Bag<K, R>>,
    closed: Vec<Bag<K, R>>,
}

impl<K, R, F> RunGrouper<K, R, F>
where
    K: PartialEq,
    F: FnMut(&R) -> K,
{
    /// Creates a grouper that keys records with `key_of`.
    #[must_use]
    pub const fn new(key_of: F) -> Self {
        Self {
            key_of,
            current: None,
            closed: Vec::new(),
        }
    }

    /// Adds the next record in input order.
    pub fn push(&mut self, record: R) {
        let key = (self.key_of)(&record);
        match &mut self.current {
            Some(bag) if bag.key == key => bag.push(record),
            current => {
                if let Some(bag) = current.replace(Bag::new(key, record)) {
                    self.closed.push(bag);
                }
            }
        }
    }

    /// Closes the open bag and returns every bag in input order.
    #[must_use]
    pub fn finish(mut self) -> Vec<Bag<K, R>> {
        if let Some(bag) = self.current.take() {
            self.closed.push(bag);
        }
        self.closed
    }
}

/// Groups `records` into runs by the key `key_of` computes.
pub fn group_by<K, R, I, F>(records: I, key_of: F) -> Vec<Bag<K, R>>
where
    K: PartialEq,
    I: IntoIterator<Item = R>,
    F: FnMut(&R) -> K,
{
    let mut grouper = RunGrouper::new(key_of);
    let mut count = 0usize;
    for record in records {
        grouper.push(record);
        count += 1;
    }
    let bags = grouper.finish();
    debug!(records = count, bags = bags.len(), "grouped records into runs");
    bags
}

/// Groups `records` into runs by their [`Groupable`] key.
///
/// # Examples
///
/// ```
/// use lexicard::{group, DictionaryEntry, TermKey};
///
/// let entries = vec![
///     DictionaryEntry::new(TermKey::new("読む"), "JMdict"),
///     DictionaryEntry::new(TermKey::new("読む"), "Daijirin"),
///     DictionaryEntry::new(TermKey::new("書く"), "JMdict"),
/// ];
///
/// let bags = group(entries);
/// assert_eq!(bags.len(), 2);
/// assert_eq!(bags[0].len(), 2);
/// assert_eq!(bags[1].key().expression, "書く");
/// ```
pub fn group<R, I>(records: I) -> Vec<Bag<R::Key, R>>
where
    R: Groupable,
    I: IntoIterator<Item = R>,
{
    group_by(records, |record: &R| record.group_key().clone())
}
