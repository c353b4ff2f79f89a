use std::net::IpAddr;

use crate::canonical;
use crate::error::Result;
use crate::iter::Iter;
use crate::prefix::Prefix;
use crate::trie::Trie;

/// Literal-friendly front end over [`Trie`].
///
/// ```rust
/// use iptrie::PrefixStore;
///
/// let mut store = PrefixStore::new();
/// store.insert("10.0.0.0/8", 1).unwrap();
/// store.insert("10.1.0.0/16", 2).unwrap();
///
/// let (prefix, value) = store.search_best_str("10.1.2.3").unwrap().unwrap();
/// assert_eq!((prefix.to_string().as_str(), *value), ("10.1.0.0/16", 2));
/// assert!(store.contains("10.200.0.1"));
/// assert!(!store.contains("192.0.2.1"));
/// ```
pub struct PrefixStore<T> {
    trie: Trie<T>,
}

impl<T> PrefixStore<T> {
    pub fn new() -> Self {
        Self { trie: Trie::new() }
    }

    /// Inserts under a CIDR literal such as `192.168.0.0/16`. The store is
    /// left untouched when the literal does not parse.
    pub fn insert(&mut self, cidr: &str, value: T) -> Result<Option<T>> {
        let prefix = cidr.parse::<Prefix>().map_err(|e| {
            log::debug!("rejected insert: {}", e);
            e
        })?;
        Ok(self.trie.insert(prefix, value))
    }

    pub fn insert_prefix(&mut self, prefix: impl Into<Prefix>, value: T) -> Option<T> {
        self.trie.insert(prefix.into(), value)
    }

    pub fn search_best(&self, addr: impl Into<IpAddr>) -> Option<(Prefix, &T)> {
        self.trie.search_best(addr)
    }

    pub fn search_fast(&self, addr: impl Into<IpAddr>) -> Option<(Prefix, &T)> {
        self.trie.search_fast(addr)
    }

    pub fn search_best_str(&self, addr: &str) -> Result<Option<(Prefix, &T)>> {
        Ok(self.trie.search_best(canonical::parse_address(addr)?))
    }

    pub fn search_fast_str(&self, addr: &str) -> Result<Option<(Prefix, &T)>> {
        Ok(self.trie.search_fast(canonical::parse_address(addr)?))
    }

    /// Whether any stored prefix covers `addr`. Malformed literals are
    /// never contained.
    pub fn contains(&self, addr: &str) -> bool {
        match canonical::parse_address(addr) {
            Ok(addr) => self.contains_address(addr),
            Err(..) => false,
        }
    }

    pub fn contains_address(&self, addr: impl Into<IpAddr>) -> bool {
        self.trie.search_fast(addr).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.trie.iter()
    }

    pub fn trie(&self) -> &Trie<T> {
        &self.trie
    }

    pub fn into_trie(self) -> Trie<T> {
        self.trie
    }
}

impl<T> Default for PrefixStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Trie<T>> for PrefixStore<T> {
    fn from(trie: Trie<T>) -> Self {
        Self { trie }
    }
}
