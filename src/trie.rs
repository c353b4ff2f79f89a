use std::io;
use std::iter::FromIterator;
use std::net::IpAddr;

use crate::canonical::{self, Family};
use crate::node::Node;
use crate::prefix::Prefix;

/// Binary trie with one root per address family.
///
/// No synchronization: writers need `&mut self`, so share it across threads
/// behind a lock.
pub struct Trie<T> {
    pub(crate) v4: Node<T>,
    pub(crate) v6: Node<T>,
    len: usize,
}

impl<T> Trie<T> {
    pub fn new() -> Self {
        Self {
            v4: Node::empty(),
            v6: Node::empty(),
            len: 0,
        }
    }

    fn root(&self, family: Family) -> &Node<T> {
        match family {
            Family::V4 => &self.v4,
            Family::V6 => &self.v6,
        }
    }

    fn root_mut(&mut self, family: Family) -> &mut Node<T> {
        match family {
            Family::V4 => &mut self.v4,
            Family::V6 => &mut self.v6,
        }
    }

    /// Stores `value` under `prefix`, returning the payload it replaces.
    pub fn insert(&mut self, prefix: Prefix, value: T) -> Option<T> {
        let (old, created) = self.root_mut(prefix.family()).insert(prefix, value);
        if old.is_some() {
            log::debug!("overwrote payload for {}", prefix);
        } else {
            self.len += 1;
            log::trace!("inserted {} ({} new nodes)", prefix, created);
        }
        old
    }

    /// Most specific stored prefix covering `addr`.
    pub fn search_best(&self, addr: impl Into<IpAddr>) -> Option<(Prefix, &T)> {
        let key = canonical::canonicalize(addr.into());
        self.root(key.family()).search_best(&key)
    }

    /// Shallowest stored prefix covering `addr`. Cheaper than
    /// [`search_best`](Self::search_best) but not the most specific match
    /// when stored prefixes nest.
    pub fn search_fast(&self, addr: impl Into<IpAddr>) -> Option<(Prefix, &T)> {
        let key = canonical::canonicalize(addr.into());
        self.root(key.family()).search_fast(&key)
    }

    pub fn get(&self, prefix: &Prefix) -> Option<&T> {
        self.root(prefix.family()).get(prefix)
    }

    pub fn get_mut(&mut self, prefix: &Prefix) -> Option<&mut T> {
        self.root_mut(prefix.family()).get_mut(prefix)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        [&self.v4, &self.v6]
            .iter()
            .all(|root| !root.has_children() && root.terminal.is_none())
    }

    pub fn debug(&self, out: &mut impl io::Write) -> io::Result<()> {
        write!(out, "{}: ", Family::V4)?;
        self.v4.debug("", out)?;
        write!(out, "{}: ", Family::V6)?;
        self.v6.debug("", out)
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(Prefix, T)> for Trie<T> {
    fn extend<I: IntoIterator<Item = (Prefix, T)>>(&mut self, iter: I) {
        for (prefix, value) in iter {
            self.insert(prefix, value);
        }
    }
}

impl<T> FromIterator<(Prefix, T)> for Trie<T> {
    fn from_iter<I: IntoIterator<Item = (Prefix, T)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
