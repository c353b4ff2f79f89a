use crate::canonical::Key;
use crate::node::Node;
use crate::prefix::Prefix;

impl<T> Node<T> {
    /// Longest match: descends as far as the key allows and keeps the
    /// deepest terminal seen. The starting node counts, so `/0` matches.
    pub fn search_best(&self, key: &Key) -> Option<(Prefix, &T)> {
        let mut best = self.terminal();
        let mut cur = self;
        for i in 0..key.family().width() {
            cur = match cur.child(key.bit(i)) {
                Some(child) => child,
                None => break,
            };
            if let Some(found) = cur.terminal() {
                best = Some(found);
            }
        }
        best
    }

    /// First match: stops at the shallowest terminal on the key's path.
    pub fn search_fast(&self, key: &Key) -> Option<(Prefix, &T)> {
        let mut cur = self;
        if let Some(found) = cur.terminal() {
            return Some(found);
        }
        for i in 0..key.family().width() {
            cur = cur.child(key.bit(i))?;
            if let Some(found) = cur.terminal() {
                return Some(found);
            }
        }
        None
    }

    /// Exact match on a stored prefix.
    pub fn get(&self, prefix: &Prefix) -> Option<&T> {
        let key = prefix.key();
        let mut cur = self;
        for i in 0..prefix.len() {
            cur = cur.child(key.bit(i))?;
        }
        cur.terminal.as_ref().map(|t| &t.value)
    }

    pub fn get_mut(&mut self, prefix: &Prefix) -> Option<&mut T> {
        let key = prefix.key();
        let mut cur = self;
        for i in 0..prefix.len() {
            cur = cur.children[key.bit(i)].as_deref_mut()?;
        }
        cur.terminal.as_mut().map(|t| &mut t.value)
    }
}
