//! IPv4 address value with optional CIDR prefix length.
//!
//! [`Address`] is parsed from dotted decimal, dotted binary, a single 32-bit
//! binary token or a single decimal token, each optionally followed by
//! `/<prefix length>`. All subnet arithmetic works on the raw `u32` value.

use crate::error::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::net::Ipv4Addr;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of characters in a binary octet, e.g. `11000000`.
const BINARY_OCTET_LEN: usize = 8;
/// Number of characters in a binary address token.
const BINARY_ADDRESS_LEN: usize = 32;
/// Digits in `4294967295`, the largest decimal address token.
const MAX_DECIMAL_DIGITS: usize = 10;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4db::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(Error::invalid(
            "Subnet mask length must be between 0 and 32 (inclusive)",
        ))
    } else {
        Ok(mask_bits(len))
    }
}

fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// IPv4 address with an optional prefix length.
///
/// A `prefix_length` of 0 means no mask was supplied. Equality compares both
/// fields; the derived ordering sorts by value first, so use
/// [`Address::numeric_cmp`] when the prefix must be ignored.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Default, Copy, Clone, Hash)]
pub struct Address {
    value: u32,
    prefix_length: u8,
}

impl Address {
    /// Create an address without a prefix from an integer in `[0, 2^32)`.
    pub fn from_integer(value: u64) -> Result<Address> {
        let value = u32::try_from(value).map_err(|_| {
            Error::invalid("IP address must be between 0 and 2^32 - 1")
        })?;
        Ok(Address::from(value))
    }

    /// Create an address from an integer and a prefix length.
    pub fn with_prefix(value: u64, prefix_length: u8) -> Result<Address> {
        Address::from_integer(value)?.with_prefix_length(prefix_length)
    }

    /// Parse any of the supported text encodings, see [`FromStr`].
    pub fn from_text(text: &str) -> Result<Address> {
        text.parse()
    }

    /// Same value, different prefix length.
    pub fn with_prefix_length(self, prefix_length: u8) -> Result<Address> {
        if prefix_length > MAX_LENGTH {
            return Err(Error::invalid(
                "Subnet mask length must be between 0 and 32 (inclusive)",
            ));
        }
        Ok(Address {
            prefix_length,
            ..self
        })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// `true` when no prefix length was supplied.
    pub fn is_unmasked(&self) -> bool {
        self.prefix_length == 0
    }

    pub fn octets(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    /// Subnet mask for this prefix length, without a prefix of its own.
    ///
    /// A prefix length of 0 yields `0.0.0.0`.
    pub fn subnet_mask(&self) -> Address {
        Address::from(mask_bits(self.prefix_length))
    }

    /// Network part of the address, keeping the prefix length.
    pub fn network_address(&self) -> Address {
        Address {
            value: self.value & mask_bits(self.prefix_length),
            prefix_length: self.prefix_length,
        }
    }

    /// Host part of the address, keeping the prefix length.
    pub fn host_address(&self) -> Address {
        Address {
            value: self.value & !mask_bits(self.prefix_length),
            prefix_length: self.prefix_length,
        }
    }

    /// Compare by numeric value only.
    pub fn numeric_cmp(&self, other: &Address) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Offset the value, `None` if the result leaves the address space.
    pub fn checked_offset(self, offset: i64) -> Option<Address> {
        let value = i64::from(self.value).checked_add(offset)?;
        let value = u32::try_from(value).ok()?;
        Some(Address { value, ..self })
    }

    /// Offset the value, clamping at `0.0.0.0` and `255.255.255.255`.
    pub fn saturating_offset(self, offset: i64) -> Address {
        let value = i64::from(self.value)
            .saturating_add(offset)
            .clamp(0, i64::from(u32::MAX));
        Address {
            value: value as u32,
            ..self
        }
    }
}

impl FromStr for Address {
    type Err = Error;

    /// Parses an address with an optional `/<prefix length>` suffix.
    ///
    /// Supported formats:
    /// * **Dotted**: four parts, each a decimal octet (`192`) or an
    ///   8-character binary octet (`11000000`).
    /// * **Binary**: one 32-character token of `0` and `1`.
    /// * **Decimal**: one token holding the whole 32-bit value.
    ///
    /// An 8-character part is always read as binary.
    fn from_str(s: &str) -> Result<Address> {
        let (addr, prefix_length) = split_cidr(s.trim())?;

        let value = if addr.matches('.').count() == 3 {
            parse_dotted(addr)?
        } else {
            parse_token(addr)?
        };

        Ok(Address {
            value,
            prefix_length,
        })
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn split_cidr(s: &str) -> Result<(&str, u8)> {
    let Some((addr, len)) = s.split_once('/') else {
        return Ok((s, 0));
    };
    if len.contains('/') {
        return Err(Error::invalid("Only one slash allowed in CIDR notation"));
    }
    if !is_digits(len) {
        return Err(Error::invalid("Subnet mask length must be an integer"));
    }
    let len = len
        .parse::<u8>()
        .ok()
        .filter(|len| *len <= MAX_LENGTH)
        .ok_or_else(|| {
            Error::invalid("Subnet mask length must be between 0 and 32 (inclusive)")
        })?;
    Ok((addr, len))
}

fn parse_dotted(addr: &str) -> Result<u32> {
    addr.split('.')
        .try_fold(0u32, |acc, octet| Ok((acc << 8) | u32::from(parse_octet(octet)?)))
}

fn parse_octet(octet: &str) -> Result<u8> {
    if !is_digits(octet) {
        return Err(Error::invalid(
            "Each octet separated by a '.' must be an integer",
        ));
    }
    match octet.len() {
        BINARY_OCTET_LEN => u8::from_str_radix(octet, 2).map_err(|_| {
            Error::invalid("Binary octets separated by a '.' must only contain 0 and 1")
        }),
        1..=3 => octet.parse::<u8>().map_err(|_| {
            Error::invalid(
                "Decimal octets separated by a '.' must be between 0 and 255 (inclusive)",
            )
        }),
        _ => Err(Error::invalid(
            "Binary octets separated by a '.' must have 8 bits each",
        )),
    }
}

fn parse_token(token: &str) -> Result<u32> {
    if !is_digits(token) {
        return Err(Error::invalid(
            "IP address must be an integer, either in binary or in decimal",
        ));
    }
    match token.len() {
        BINARY_ADDRESS_LEN => u32::from_str_radix(token, 2)
            .map_err(|_| Error::invalid("Binary IP address must only contain 0 and 1")),
        len if len > MAX_DECIMAL_DIGITS => {
            Err(Error::invalid("Binary IP address must have 32 bits"))
        }
        _ => token
            .parse::<u32>()
            .map_err(|_| Error::invalid("Decimal IP address must be between 0 and 2^32 - 1")),
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Address {
        Address {
            value,
            prefix_length: 0,
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address::from(u32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Ipv4Addr {
        Ipv4Addr::from(addr.value)
    }
}

impl Add<i64> for Address {
    type Output = Address;

    fn add(self, rhs: i64) -> Address {
        self.saturating_offset(rhs)
    }
}

impl Sub<i64> for Address {
    type Output = Address;

    fn sub(self, rhs: i64) -> Address {
        self.saturating_offset(rhs.saturating_neg())
    }
}

impl Add<Address> for Address {
    type Output = Address;

    fn add(self, rhs: Address) -> Address {
        self + i64::from(rhs.value)
    }
}

impl Sub<Address> for Address {
    type Output = Address;

    fn sub(self, rhs: Address) -> Address {
        self - i64::from(rhs.value)
    }
}

impl AddAssign<i64> for Address {
    fn add_assign(&mut self, rhs: i64) {
        *self = *self + rhs;
    }
}

impl SubAssign<i64> for Address {
    fn sub_assign(&mut self, rhs: i64) {
        *self = *self - rhs;
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid address '{s}': {e}")))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(self.value))?;
        if self.prefix_length != 0 {
            write!(f, "/{}", self.prefix_length)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    fn reason(s: &str) -> String {
        match s.parse::<Address>() {
            Err(Error::InvalidAddress(reason)) => reason,
            other => panic!("expected InvalidAddress for {s:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_parse_dotted_decimal() {
        let ip = addr("155.153.45.23/24");
        assert_eq!(ip.value(), 2610507031);
        assert_eq!(ip.prefix_length(), 24);
        assert_eq!(ip.to_string(), "155.153.45.23/24");

        let ip = addr("10.0.0.1");
        assert_eq!(ip.octets(), [10, 0, 0, 1]);
        assert!(ip.is_unmasked());
        assert_eq!(ip.to_string(), "10.0.0.1");

        assert_eq!(addr("255.255.255.255").value(), u32::MAX);
        assert_eq!(addr(" 0.0.0.0/0 ").value(), 0);
    }

    #[test]
    fn test_parse_binary() {
        let ip = addr("00001111010101011110000110100101/24");
        assert_eq!(ip.to_string(), "15.85.225.165/24");

        let ip = addr("11000000.10101000.00000001.00000001");
        assert_eq!(ip, addr("192.168.1.1"));

        // binary and decimal octets can be mixed
        assert_eq!(addr("11000000.168.1.00000001"), addr("192.168.1.1"));
        assert_eq!(addr("11111111.11111111.11111111.11111111").value(), u32::MAX);
    }

    #[test]
    fn test_parse_decimal_token() {
        assert_eq!(addr("2610507031/24"), addr("155.153.45.23/24"));
        assert_eq!(addr("0"), Address::from(0));
        assert_eq!(addr("4294967295").value(), u32::MAX);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(reason("1.2.3.4/24/8"), "Only one slash allowed in CIDR notation");
        assert_eq!(reason("1.2.3.4/x"), "Subnet mask length must be an integer");
        assert_eq!(reason("1.2.3.4/"), "Subnet mask length must be an integer");
        assert_eq!(
            reason("1.2.3.4/33"),
            "Subnet mask length must be between 0 and 32 (inclusive)"
        );
        assert_eq!(
            reason("1.2.3.4/300"),
            "Subnet mask length must be between 0 and 32 (inclusive)"
        );
        assert_eq!(
            reason("1.2.x.4"),
            "Each octet separated by a '.' must be an integer"
        );
        assert_eq!(reason("1..3.4"), "Each octet separated by a '.' must be an integer");
        assert_eq!(
            reason("1.2.256.4"),
            "Decimal octets separated by a '.' must be between 0 and 255 (inclusive)"
        );
        assert_eq!(
            reason("1.2.0255.4"),
            "Binary octets separated by a '.' must have 8 bits each"
        );
        assert_eq!(
            reason("1.2.12345678.4"),
            "Binary octets separated by a '.' must only contain 0 and 1"
        );
        assert_eq!(
            reason("Space"),
            "IP address must be an integer, either in binary or in decimal"
        );
        assert_eq!(
            reason("1.2.3"),
            "IP address must be an integer, either in binary or in decimal"
        );
        assert_eq!(
            reason(""),
            "IP address must be an integer, either in binary or in decimal"
        );
        assert_eq!(
            reason("0000111101010101111000011010010"),
            "Binary IP address must have 32 bits"
        );
        assert_eq!(
            reason("00001111010101011110000110100102"),
            "Binary IP address must only contain 0 and 1"
        );
        assert_eq!(
            reason("4294967296"),
            "Decimal IP address must be between 0 and 2^32 - 1"
        );
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(Address::from_integer(0).unwrap().to_string(), "0.0.0.0");
        assert_eq!(
            Address::from_integer(u64::from(u32::MAX)).unwrap().to_string(),
            "255.255.255.255"
        );
        assert!(Address::from_integer(1 << 32).is_err());

        let ip = Address::with_prefix(2610507031, 24).unwrap();
        assert_eq!(ip, addr("155.153.45.23/24"));
        assert!(Address::with_prefix(1, 33).is_err());
    }

    #[test]
    fn test_round_trip() {
        for text in ["155.153.45.23/24", "0.0.0.0", "255.255.255.255/32", "18.1.0.0/20"] {
            let ip = addr(text);
            assert_eq!(addr(&ip.to_string()), ip);
        }
    }

    #[test]
    fn test_subnet_mask() {
        assert_eq!(addr("1.2.3.4/24").subnet_mask().to_string(), "255.255.255.0");
        assert_eq!(addr("1.2.3.4").subnet_mask().to_string(), "0.0.0.0");
        assert_eq!(addr("1.2.3.4/32").subnet_mask().to_string(), "255.255.255.255");
        assert_eq!(addr("1.2.3.4/20").subnet_mask().to_string(), "255.255.240.0");
    }

    #[test]
    fn test_network_and_host_address() {
        let ip = addr("192.168.1.42/24");
        assert_eq!(ip.network_address(), addr("192.168.1.0/24"));
        assert_eq!(ip.host_address(), addr("0.0.0.42/24"));

        let ip = addr("96.85.162.16/22");
        assert_eq!(ip.network_address().to_string(), "96.85.160.0/22");
        assert_eq!(ip.host_address().to_string(), "0.0.2.16/22");

        // no mask: everything is host
        let ip = addr("10.1.2.3");
        assert_eq!(ip.network_address(), addr("0.0.0.0"));
        assert_eq!(ip.host_address(), ip);
    }

    #[test]
    fn test_arithmetic() {
        let ip = addr("10.0.0.255/24");
        assert_eq!(ip + 1, addr("10.0.1.0/24"));
        assert_eq!(ip - 255, addr("10.0.0.0/24"));
        assert_eq!(ip + addr("0.0.1.0/8"), addr("10.0.1.255/24"));
        assert_eq!(ip - addr("0.0.0.5"), addr("10.0.0.250/24"));

        let mut ip = addr("10.0.0.1/8");
        ip += 2;
        assert_eq!(ip, addr("10.0.0.3/8"));
        ip -= 3;
        assert_eq!(ip, addr("10.0.0.0/8"));
    }

    #[test]
    fn test_arithmetic_bounds() {
        let top = addr("255.255.255.254/31");
        assert_eq!(top + 5, addr("255.255.255.255/31"));
        assert_eq!(top.checked_offset(1), Some(addr("255.255.255.255/31")));
        assert_eq!(top.checked_offset(2), None);

        let bottom = addr("0.0.0.1");
        assert_eq!(bottom - 5, addr("0.0.0.0"));
        assert_eq!(bottom.checked_offset(-2), None);
        assert_eq!(bottom - i64::MIN, addr("255.255.255.255"));
    }

    #[test]
    fn test_cmp() {
        let ip1 = addr("10.0.0.1/24");
        let ip2 = addr("10.0.0.2/24");
        let ip3 = addr("10.0.0.1/24");

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_cmp_ignores_prefix() {
        let masked = addr("10.0.0.1/24");
        let plain = addr("10.0.0.1");

        assert_ne!(masked, plain);
        assert_eq!(masked.numeric_cmp(&plain), Ordering::Equal);
        assert_eq!(addr("10.0.0.2").numeric_cmp(&masked), Ordering::Greater);
        // value dominates the derived order
        assert!(addr("10.0.0.1/32") < addr("10.0.0.2/1"));
    }

    #[test]
    fn test_ipv4addr_conversion() {
        let ip = Address::from(Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(ip, addr("192.168.1.1"));
        assert_eq!(Ipv4Addr::from(addr("10.1.2.3/8")), Ipv4Addr::new(10, 1, 2, 3));
    }

    #[test]
    fn test_serde() {
        let ip = addr("18.1.0.0/20");
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"18.1.0.0/20\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ip);
        assert!(serde_json::from_str::<Address>("\"1.2.3.4/40\"").is_err());
    }
}
