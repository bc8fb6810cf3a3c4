//! Core data types for Spline Merkle

use crate::core::error::SplineMerkleError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// 32-byte SHA-256 hash
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash([u8; 32]);

impl Hash {
    /// Create a Hash from a 32-byte array
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create a Hash from a hex string, with or without a `0x` prefix
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        Ok(Hash(array))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create a zero hash (for testing and special cases)
    pub fn zero() -> Self {
        Hash([0u8; 32])
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", &hex::encode(self.0)[..8])
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }
}

// Custom serialization to use hex strings instead of byte arrays
impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_string = String::deserialize(deserializer)?;
        Hash::from_hex(&hex_string).map_err(serde::de::Error::custom)
    }
}

/// Root hash of a committed segment set
pub type RootHash = Hash;

/// Digest of a single encoded segment record
pub type LeafDigest = Hash;

/// A numeric value used for segment bounds, query points and payload entries.
///
/// Upstream spline tooling writes fixed-point integers scaled by [`WAD`], so
/// integers are kept exact. Plain floats are accepted for hand-built segment
/// sets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    /// Exact signed integer (usually WAD-scaled fixed point)
    Int(i128),
    /// IEEE-754 double
    Float(f64),
}

/// Fixed-point scale used by upstream spline parameter files (1.0 == 1e18)
pub const WAD: i128 = 1_000_000_000_000_000_000;

impl Scalar {
    /// Numeric comparison across both representations.
    ///
    /// Returns `None` when either side is NaN. Mixed comparisons are exact:
    /// the integer is never rounded to `f64`.
    pub fn numeric_cmp(&self, other: &Scalar) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(b)),
            (Scalar::Float(a), Scalar::Float(b)) => a.partial_cmp(b),
            (Scalar::Int(a), Scalar::Float(b)) => cmp_int_float(*a, *b),
            (Scalar::Float(a), Scalar::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
        }
    }

    /// `self <= other`, false when the values are not comparable
    pub fn le(&self, other: &Scalar) -> bool {
        matches!(
            self.numeric_cmp(other),
            Some(Ordering::Less) | Some(Ordering::Equal)
        )
    }

    /// Whether this value is a finite number
    pub fn is_finite(&self) -> bool {
        match self {
            Scalar::Int(_) => true,
            Scalar::Float(v) => v.is_finite(),
        }
    }

    /// Approximate value as a float
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Int(v) => *v as f64,
            Scalar::Float(v) => *v,
        }
    }
}

/// Exact ordering of an integer against a float
fn cmp_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // 2^127, exactly representable; every i128 lies in [-2^127, 2^127)
    let bound = -(i128::MIN as f64);
    if float >= bound {
        return Some(Ordering::Less);
    }
    if float < -bound {
        return Some(Ordering::Greater);
    }

    let floor = float.floor();
    match int.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl From<i128> for Scalar {
    fn from(value: i128) -> Self {
        Scalar::Int(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value as i128)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i128)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            // Debug formatting always keeps a '.' or exponent, so floats
            // never read back as integers.
            Scalar::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl FromStr for Scalar {
    type Err = SplineMerkleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i128>() {
            return Ok(Scalar::Int(v));
        }
        trimmed
            .parse::<f64>()
            .map(Scalar::Float)
            .map_err(|_| SplineMerkleError::invalid_scalar(s))
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> serde::de::Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Scalar, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Scalar, E> {
                Ok(Scalar::Int(v as i128))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Scalar, E> {
                Ok(Scalar::Int(v as i128))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Scalar, E> {
                Ok(Scalar::Float(v))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_hex_with_prefix() {
        let hash = Hash::from_bytes([7u8; 32]);
        let prefixed = format!("0x{}", hash.to_hex());
        assert_eq!(Hash::from_hex(&prefixed).unwrap(), hash);
        assert!(Hash::from_hex("abcd").is_err());
    }

    #[test]
    fn test_scalar_text_form() {
        assert_eq!("10".parse::<Scalar>().unwrap(), Scalar::Int(10));
        assert_eq!("10.0".parse::<Scalar>().unwrap(), Scalar::Float(10.0));
        assert_eq!(
            "-1500000000000000000".parse::<Scalar>().unwrap(),
            Scalar::Int(-1_500_000_000_000_000_000)
        );
        assert_eq!(Scalar::Float(10.0).to_string(), "10.0");
        assert_eq!(Scalar::Int(10).to_string(), "10");
        assert!("ten".parse::<Scalar>().is_err());
    }

    #[test]
    fn test_scalar_float_display_reparses_as_float() {
        for v in [1e21, 1.5e-7, -0.25, 3.0] {
            let text = Scalar::Float(v).to_string();
            assert_eq!(text.parse::<Scalar>().unwrap(), Scalar::Float(v));
        }
    }

    #[test]
    fn test_scalar_numeric_cmp() {
        assert_eq!(
            Scalar::Int(10).numeric_cmp(&Scalar::Float(10.0)),
            Some(Ordering::Equal)
        );
        assert!(Scalar::Int(3).le(&Scalar::Float(3.5)));
        assert!(!Scalar::Float(f64::NAN).le(&Scalar::Int(0)));
        assert!(!Scalar::Int(0).le(&Scalar::Float(f64::NAN)));
    }

    #[test]
    fn test_scalar_numeric_cmp_is_exact() {
        // 1500000000000000256 is exactly representable; the integer is not
        let float = Scalar::Float(1_500_000_000_000_000_256.0);
        assert_eq!(
            Scalar::Int(1_500_000_000_000_000_200).numeric_cmp(&float),
            Some(Ordering::Less)
        );
        assert_eq!(
            float.numeric_cmp(&Scalar::Int(1_500_000_000_000_000_300)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Scalar::Int(1_500_000_000_000_000_256).numeric_cmp(&float),
            Some(Ordering::Equal)
        );

        assert_eq!(
            Scalar::Int(-3).numeric_cmp(&Scalar::Float(-3.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Scalar::Int(-4).numeric_cmp(&Scalar::Float(-3.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Scalar::Int(i128::MAX).numeric_cmp(&Scalar::Float(f64::INFINITY)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Scalar::Int(i128::MIN).numeric_cmp(&Scalar::Float(f64::NEG_INFINITY)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Scalar::Int(i128::MAX).numeric_cmp(&Scalar::Float(1e39)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Scalar::Int(i128::MIN).numeric_cmp(&Scalar::Float(i128::MIN as f64)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_scalar_serde() {
        let json = serde_json::to_string(&vec![Scalar::Int(5), Scalar::Float(0.5)]).unwrap();
        assert_eq!(json, r#"["5","0.5"]"#);

        let parsed: Vec<Scalar> = serde_json::from_str(r#"["5", 7, 0.5]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Scalar::Int(5), Scalar::Int(7), Scalar::Float(0.5)]
        );
    }
}
