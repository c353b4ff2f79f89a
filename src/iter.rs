use crate::node::Node;
use crate::prefix::Prefix;
use crate::trie::Trie;

/// Pre-order walk over stored prefixes: v4 before v6, bit 0 before bit 1,
/// so covering prefixes come before the prefixes nested in them.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Prefix, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            self.stack.extend(node.child(1));
            self.stack.extend(node.child(0));
            if let Some(found) = node.terminal() {
                return Some(found);
            }
        }
    }
}

impl<T> Trie<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![&self.v6, &self.v4],
        }
    }
}

impl<'a, T> IntoIterator for &'a Trie<T> {
    type Item = (Prefix, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
