//! Key selection predicates

use crate::snd::ResourceKey;

/// Decides whether a chain entry is loaded.
///
/// Evaluated once per chain entry, before any of that entry's payload is
/// read. Any `Fn(ResourceKey) -> bool` closure is a filter.
pub trait KeyFilter {
    /// Whether `key` should be materialized
    fn accept(&self, key: ResourceKey) -> bool;
}

impl<F> KeyFilter for F
where
    F: Fn(ResourceKey) -> bool,
{
    fn accept(&self, key: ResourceKey) -> bool {
        self(key)
    }
}

/// Accepts keys whose group and index are both non-negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonNegativeKeys;

impl KeyFilter for NonNegativeKeys {
    fn accept(&self, key: ResourceKey) -> bool {
        key.is_non_negative()
    }
}

/// Accepts exactly one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactKey(pub ResourceKey);

impl KeyFilter for ExactKey {
    fn accept(&self, key: ResourceKey) -> bool {
        key == self.0
    }
}
