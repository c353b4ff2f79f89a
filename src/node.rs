use std::io;

use crate::prefix::Prefix;

/// Prefix and payload attached to the node at the end of a prefix's bit path.
pub struct Terminal<T> {
    pub prefix: Prefix,
    pub value: T,
}

pub struct Node<T> {
    pub children: [Option<Box<Node<T>>>; 2],
    pub terminal: Option<Terminal<T>>,
}

impl<T> Node<T> {
    pub fn empty() -> Self {
        Self {
            children: [None, None],
            terminal: None,
        }
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    pub fn child(&self, bit: usize) -> Option<&Node<T>> {
        self.children[bit].as_deref()
    }

    pub fn terminal(&self) -> Option<(Prefix, &T)> {
        self.terminal.as_ref().map(|t| (t.prefix, &t.value))
    }

    pub fn set_terminal(&mut self, prefix: Prefix, value: T) -> Option<T> {
        self.terminal
            .replace(Terminal { prefix, value })
            .map(|old| old.value)
    }

    pub fn debug(&self, indent: &str, out: &mut impl io::Write) -> io::Result<()> {
        match self.terminal {
            Some(ref t) => writeln!(out, "* {}", t.prefix)?,
            None => writeln!(out, "o")?,
        }

        let children = (0..2)
            .filter_map(|bit| self.child(bit).map(|c| (bit, c)))
            .collect::<Vec<_>>();

        if let Some((last, init)) = children.split_last() {
            let child_indent = format!("{} \u{2502}", indent);
            for (bit, c) in init {
                write!(out, "{} \u{251C} {}: ", indent, bit)?;
                c.debug(&child_indent, out)?;
            }

            let (bit, c) = last;
            write!(out, "{} \u{2514} {}: ", indent, bit)?;
            let child_indent = format!("{}  ", indent);
            c.debug(&child_indent, out)?;
        }
        Ok(())
    }
}
