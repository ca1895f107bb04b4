//! Keyed query cache with invalidation.
//!
//! The explicit stand-in for the query-cache library the app is built
//! around: fetched results are cached per key (a date, a date range), a
//! write invalidates the affected key, and the next read refetches. There
//! is deliberately no optimistic mutation of cached values.
//!
//! Two rules the views rely on:
//!
//! - **Last-issued-wins.** Each fetch registers a [`RequestTicket`]; a
//!   completion carrying a superseded ticket is dropped, so a slow stale
//!   response can never overwrite the result of a newer request for the
//!   same key.
//! - **Stale data stays readable.** [`QueryCache::get`] keeps returning an
//!   invalidated value until the refetch lands, so the UI shows briefly
//!   stale data rather than flashing empty. [`QueryCache::fresh`] is the
//!   one to consult when deciding whether a refetch is needed.
//!
//! A global epoch counter increments on every invalidation; views poll it
//! to learn that something they rendered from is out of date.

use std::{collections::HashMap, hash::Hash};

/// Proof of a started fetch for one key. Consumed by
/// [`QueryCache::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
  serial: u64,
}

struct Entry<V> {
  value:  Option<V>,
  stale:  bool,
  /// Serial of the most recently issued fetch for this key.
  latest: u64,
}

impl<V> Default for Entry<V> {
  fn default() -> Self {
    Entry { value: None, stale: false, latest: 0 }
  }
}

pub struct QueryCache<K, V> {
  entries:     HashMap<K, Entry<V>>,
  next_serial: u64,
  epoch:       u64,
}

impl<K: Eq + Hash, V> Default for QueryCache<K, V> {
  fn default() -> Self { Self::new() }
}

impl<K: Eq + Hash, V> QueryCache<K, V> {
  pub fn new() -> Self {
    Self { entries: HashMap::new(), next_serial: 0, epoch: 0 }
  }

  /// Register a fetch for `key`. Any ticket issued earlier for the same
  /// key is superseded from this moment on.
  pub fn begin(&mut self, key: K) -> RequestTicket {
    self.next_serial += 1;
    let serial = self.next_serial;
    self.entries.entry(key).or_default().latest = serial;
    RequestTicket { serial }
  }

  /// Apply a fetch result. Returns `false` (and drops `value`) when the
  /// ticket has been superseded by a newer `begin` for the same key.
  pub fn complete(&mut self, key: &K, ticket: RequestTicket, value: V) -> bool {
    let Some(entry) = self.entries.get_mut(key) else {
      return false;
    };
    if entry.latest != ticket.serial {
      return false;
    }
    entry.value = Some(value);
    entry.stale = false;
    true
  }

  /// Discard the cached read for `key`: the value stays visible via
  /// [`get`](Self::get) but is no longer [`fresh`](Self::fresh).
  pub fn invalidate(&mut self, key: &K) {
    if let Some(entry) = self.entries.get_mut(key) {
      entry.stale = true;
    }
    self.epoch += 1;
  }

  /// The cached value, stale or not.
  pub fn get(&self, key: &K) -> Option<&V> {
    self.entries.get(key).and_then(|e| e.value.as_ref())
  }

  /// The cached value only if it has not been invalidated since it was
  /// stored. `None` means a refetch is due.
  pub fn fresh(&self, key: &K) -> Option<&V> {
    self
      .entries
      .get(key)
      .and_then(|e| if e.stale { None } else { e.value.as_ref() })
  }

  /// Monotonic counter bumped by every [`invalidate`](Self::invalidate).
  pub fn epoch(&self) -> u64 { self.epoch }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn completed_fetch_is_readable_and_fresh() {
    let mut cache: QueryCache<&str, u32> = QueryCache::new();
    let ticket = cache.begin("today");
    assert!(cache.complete(&"today", ticket, 42));
    assert_eq!(cache.get(&"today"), Some(&42));
    assert_eq!(cache.fresh(&"today"), Some(&42));
  }

  #[test]
  fn superseded_ticket_is_dropped() {
    let mut cache: QueryCache<&str, u32> = QueryCache::new();
    let first = cache.begin("today");
    let second = cache.begin("today");

    // The older in-flight fetch resolves late; its result must not apply.
    assert!(!cache.complete(&"today", first, 1));
    assert_eq!(cache.get(&"today"), None);

    assert!(cache.complete(&"today", second, 2));
    assert_eq!(cache.get(&"today"), Some(&2));

    // And the stale ticket still can't clobber the newer result.
    assert!(!cache.complete(&"today", first, 1));
    assert_eq!(cache.get(&"today"), Some(&2));
  }

  #[test]
  fn tickets_are_scoped_per_key() {
    let mut cache: QueryCache<&str, u32> = QueryCache::new();
    let monday = cache.begin("monday");
    let tuesday = cache.begin("tuesday");

    assert!(cache.complete(&"monday", monday, 10));
    assert!(cache.complete(&"tuesday", tuesday, 20));
    assert_eq!(cache.get(&"monday"), Some(&10));
    assert_eq!(cache.get(&"tuesday"), Some(&20));
  }

  #[test]
  fn invalidate_keeps_value_visible_but_not_fresh() {
    let mut cache: QueryCache<&str, u32> = QueryCache::new();
    let ticket = cache.begin("today");
    cache.complete(&"today", ticket, 42);

    cache.invalidate(&"today");
    assert_eq!(cache.get(&"today"), Some(&42));
    assert_eq!(cache.fresh(&"today"), None);

    // Refetch restores freshness.
    let ticket = cache.begin("today");
    cache.complete(&"today", ticket, 43);
    assert_eq!(cache.fresh(&"today"), Some(&43));
  }

  #[test]
  fn epoch_increments_on_every_invalidation() {
    let mut cache: QueryCache<&str, u32> = QueryCache::new();
    assert_eq!(cache.epoch(), 0);
    cache.invalidate(&"today");
    cache.invalidate(&"missing key counts too");
    assert_eq!(cache.epoch(), 2);
  }
}
