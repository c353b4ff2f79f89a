//! Longest-prefix-match lookups over IPv4 and IPv6 prefixes.
//!
//! A plain bit trie (no path compression) with one root per address family.
//! Each stored prefix marks the node at the end of its bit path; lookups walk
//! at most 32 or 128 bits.
//!
//! IPv4-mapped IPv6 input (`::ffff:a.b.c.d`) is always unwrapped to IPv4,
//! for inserts and lookups alike.
//!
//! ```rust
//! use iptrie::{Prefix, Trie};
//! use std::net::Ipv4Addr;
//!
//! let mut trie = Trie::new();
//! trie.insert("10.0.0.0/8".parse::<Prefix>()?, "corp");
//! trie.insert("10.1.0.0/16".parse::<Prefix>()?, "lab");
//!
//! let (prefix, name) = trie.search_best(Ipv4Addr::new(10, 1, 2, 3)).unwrap();
//! assert_eq!((prefix.to_string().as_str(), *name), ("10.1.0.0/16", "lab"));
//!
//! let (prefix, _) = trie.search_fast(Ipv4Addr::new(10, 1, 2, 3)).unwrap();
//! assert_eq!(prefix.to_string(), "10.0.0.0/8");
//! # Ok::<(), iptrie::Error>(())
//! ```

mod canonical;
mod error;
mod insert;
mod iter;
mod node;
mod prefix;
mod search;
mod store;
mod trie;


pub use canonical::{parse_address, unmap, Family};
pub use error::{Error, Result};
pub use iter::Iter;
pub use prefix::Prefix;
pub use store::PrefixStore;
pub use trie::Trie;
