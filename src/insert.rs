use crate::node::Node;
use crate::prefix::Prefix;

impl<T> Node<T> {
    // Walks `prefix.len()` bits below `self`, MSB first, creating missing
    // children on the way:
    // ```
    //         o      root
    //         | 0
    //         o
    //         | 0
    //         o
    //         | 0
    //         o
    //         | 0
    //         o
    //         | 1
    //         o
    //         | 0
    //         o
    //         | 1
    //         *      10.0.0.0/7
    // ```
    // Returns the payload previously stored for `prefix`, plus the number of
    // nodes created.
    pub fn insert(&mut self, prefix: Prefix, value: T) -> (Option<T>, usize) {
        let key = prefix.key();
        debug_assert!(prefix.len() <= key.family().width());

        let mut created = 0;
        let mut cur = self;
        for i in 0..prefix.len() {
            let slot = &mut cur.children[key.bit(i)];
            if slot.is_none() {
                created += 1;
            }
            cur = slot.get_or_insert_with(|| Box::new(Node::empty())).as_mut();
        }
        (cur.set_terminal(prefix, value), created)
    }
}
