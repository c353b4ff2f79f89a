use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use ipnet::{IpNet, Ipv4Net, Ipv6Net};

use crate::canonical::{self, Family, Key};
use crate::error::{Error, Result};

/// Length of the `::ffff:0:0/96` block that carries IPv4-mapped addresses.
const MAPPED_PREFIX_LEN: u8 = 96;

/// An address prefix in canonical form.
///
/// Host bits past the length are zeroed, and a v6 prefix lying inside
/// `::ffff:0:0/96` is stored as the equivalent v4 prefix, so every way of
/// writing the same network compares equal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Prefix {
    net: IpNet,
}

impl Prefix {
    pub fn new(addr: IpAddr, len: u8) -> Result<Self> {
        let family = match addr {
            IpAddr::V4(..) => Family::V4,
            IpAddr::V6(..) => Family::V6,
        };
        let net = IpNet::new(addr, len).map_err(|_| Error::PrefixLength { family, len })?;
        Ok(Self::from(net))
    }

    pub fn family(&self) -> Family {
        match self.net {
            IpNet::V4(..) => Family::V4,
            IpNet::V6(..) => Family::V6,
        }
    }

    /// Network address.
    pub fn addr(&self) -> IpAddr {
        self.net.addr()
    }

    pub fn len(&self) -> u8 {
        self.net.prefix_len()
    }

    pub fn net(&self) -> IpNet {
        self.net
    }

    /// Whether `addr` falls inside this prefix, after IPv4-mapped
    /// addresses are unwrapped.
    pub fn contains(&self, addr: impl Into<IpAddr>) -> bool {
        self.net.contains(&canonical::unmap(addr.into()))
    }

    pub(crate) fn key(&self) -> Key {
        canonical::canonicalize(self.net.addr())
    }
}

impl From<IpNet> for Prefix {
    fn from(net: IpNet) -> Self {
        let net = net.trunc();
        if let IpNet::V6(v6) = net {
            if v6.prefix_len() >= MAPPED_PREFIX_LEN {
                if let Some(v4) = v6.addr().to_ipv4_mapped() {
                    if let Ok(v4) = Ipv4Net::new(v4, v6.prefix_len() - MAPPED_PREFIX_LEN) {
                        return Self { net: IpNet::V4(v4) };
                    }
                }
            }
        }
        Self { net }
    }
}

impl From<Ipv4Net> for Prefix {
    fn from(net: Ipv4Net) -> Self {
        Self::from(IpNet::V4(net))
    }
}

impl From<Ipv6Net> for Prefix {
    fn from(net: Ipv6Net) -> Self {
        Self::from(IpNet::V6(net))
    }
}

impl FromStr for Prefix {
    type Err = Error;

    fn from_str(literal: &str) -> Result<Self> {
        let net = literal
            .parse::<IpNet>()
            .map_err(|source| Error::InvalidCidrLiteral {
                literal: literal.to_owned(),
                source,
            })?;
        Ok(Self::from(net))
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.net, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Prefix {
        s.parse().unwrap()
    }

    #[test]
    fn test_host_bits_cleared() {
        assert_eq!(p("10.1.2.3/8"), p("10.0.0.0/8"));
        assert_eq!(p("10.1.2.3/8").to_string(), "10.0.0.0/8");
        assert_eq!(p("2001:db8:ffff::1/32").to_string(), "2001:db8::/32");
    }

    #[test]
    fn test_mapped_prefix_unwraps() {
        let mapped = p("::ffff:10.0.0.0/104");
        assert_eq!(mapped, p("10.0.0.0/8"));
        assert_eq!(mapped.family(), Family::V4);
        assert_eq!(p("::ffff:0.0.0.0/96"), p("0.0.0.0/0"));

        // Wider than the mapped block, so it stays v6.
        let wide = p("::ffff:0.0.0.0/95");
        assert_eq!(wide.family(), Family::V6);
        assert_eq!(wide.len(), 95);
    }

    #[test]
    fn test_new() {
        let prefix = Prefix::new("192.168.1.1".parse().unwrap(), 16).unwrap();
        assert_eq!(prefix, p("192.168.0.0/16"));
        assert_eq!(prefix.len(), 16);

        match Prefix::new("192.168.1.1".parse().unwrap(), 33) {
            Err(Error::PrefixLength { family: Family::V4, len: 33 }) => (),
            r => panic!("unexpected {:?}", r),
        }
        assert!(Prefix::new("::".parse().unwrap(), 128).is_ok());
        assert!(Prefix::new("::".parse().unwrap(), 129).is_err());
    }

    #[test]
    fn test_parse_errors() {
        for literal in &["10.0.0.0/33", "2001:db8::/129", "10.0.0.0", "bogus/8", "10.0.0/8", ""] {
            match literal.parse::<Prefix>() {
                Err(Error::InvalidCidrLiteral { literal: l, .. }) => assert_eq!(&l, literal),
                r => panic!("{}: unexpected {:?}", literal, r),
            }
        }
    }

    #[test]
    fn test_contains() {
        let prefix = p("10.0.0.0/8");
        assert!(prefix.contains("10.255.0.1".parse::<IpAddr>().unwrap()));
        assert!(prefix.contains("::ffff:10.1.1.1".parse::<IpAddr>().unwrap()));
        assert!(!prefix.contains("11.0.0.0".parse::<IpAddr>().unwrap()));
        assert!(!prefix.contains("::a00:1".parse::<IpAddr>().unwrap()));
    }
}
