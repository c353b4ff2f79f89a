use std::net;

use thiserror::Error;

use crate::canonical::Family;

/// Errors raised while turning literals or raw parts into prefixes and
/// addresses. Lookups never fail; a miss is `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed `<address>/<len>` literal, or a mask out of range for the
    /// literal's family.
    #[error("invalid CIDR literal {literal:?}: {source}")]
    InvalidCidrLiteral {
        literal: String,
        source: ipnet::AddrParseError,
    },

    /// Malformed bare address literal.
    #[error("invalid address literal {literal:?}: {source}")]
    InvalidAddressLiteral {
        literal: String,
        source: net::AddrParseError,
    },

    /// Structured prefix whose length exceeds its family's width.
    #[error("prefix length {len} out of range for {family}")]
    PrefixLength { family: Family, len: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
