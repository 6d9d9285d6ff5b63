//! Applying confirmed create/update results to the in-memory collection.
//!
//! Nothing here is optimistic: callers only build a [`Mutation`] once the remote call
//! resolved successfully.

/// Records identified by a natural numeric key
pub trait Keyed {
    fn key(&self) -> i32;
}

/// Where a newly created record lands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreatePolicy {
    #[default]
    Append,
    /// Append, then re-sort the whole collection by natural key
    SortByKey,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    Created(T),
    Updated(T),
}

impl<T> Mutation<T> {
    pub fn record(&self) -> &T {
        match self {
            Mutation::Created(r) | Mutation::Updated(r) => r,
        }
    }
}

pub fn apply_created<T: Keyed>(items: &mut Vec<T>, record: T, policy: CreatePolicy) {
    items.push(record);
    if policy == CreatePolicy::SortByKey {
        // stable, so equal keys keep their arrival order
        items.sort_by_key(Keyed::key);
    }
}

/// Replaces the record sharing `record`'s key. Returns `false` and leaves the collection
/// untouched when no record matches.
pub fn apply_updated<T: Keyed>(items: &mut [T], record: T) -> bool {
    match items.iter_mut().find(|item| item.key() == record.key()) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

/// Returns whether the collection changed
pub fn apply_mutation<T: Keyed>(items: &mut Vec<T>, mutation: Mutation<T>, policy: CreatePolicy) -> bool {
    match mutation {
        Mutation::Created(record) => {
            apply_created(items, record, policy);
            true
        }
        Mutation::Updated(record) => apply_updated(items, record),
    }
}
