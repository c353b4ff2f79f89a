use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};

/// Address family. Each family owns an independent trie root.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Address width in bits.
    pub fn width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// Fixed-width big-endian address bytes plus the family they belong to.
///
/// v4 keys use the first four bytes; the rest stay zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Key {
    family: Family,
    bytes: [u8; 16],
}

impl Key {
    pub fn family(&self) -> Family {
        self.family
    }

    /// Bit `i` of the address, most significant first.
    #[inline]
    pub fn bit(&self, i: u8) -> usize {
        debug_assert!(i < self.family.width());
        let byte = self.bytes[i as usize / 8];
        ((byte >> (7 - i % 8)) & 1) as usize
    }

    fn v4(addr: Ipv4Addr) -> Self {
        let mut bytes = [0; 16];
        bytes[..4].copy_from_slice(&addr.octets());
        Self {
            family: Family::V4,
            bytes,
        }
    }

    fn v6(addr: Ipv6Addr) -> Self {
        Self {
            family: Family::V6,
            bytes: addr.octets(),
        }
    }
}

/// Unwraps `::ffff:a.b.c.d` to `a.b.c.d`; every other address is returned
/// as is.
pub fn unmap(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => addr,
        },
        v4 => v4,
    }
}

/// Canonical key for `addr`. IPv4-mapped IPv6 addresses land in the v4 half.
pub fn canonicalize(addr: IpAddr) -> Key {
    match unmap(addr) {
        IpAddr::V4(v4) => Key::v4(v4),
        IpAddr::V6(v6) => Key::v6(v6),
    }
}

/// Parses a bare address literal such as `10.1.2.3` or `2001:db8::1`.
pub fn parse_address(literal: &str) -> Result<IpAddr> {
    literal
        .parse::<IpAddr>()
        .map_err(|source| Error::InvalidAddressLiteral {
            literal: literal.to_owned(),
            source,
        })
}
