//! Custom serde helpers for backend wire formats.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Deserializes `null` (or a missing field, together with `#[serde(default)]`)
/// into `T::default()`.
///
/// The backend omits or nulls numeric profile fields for fresh accounts; the
/// client displays those as zero instead of failing the whole payload.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

// ─── Lenient numbers ─────────────────────────────────────────────────────────

/// Integer targets for [`lenient_number`].
///
/// Conversions saturate at the type's bounds; fractions truncate toward zero
/// and `NaN` becomes zero.
pub trait LenientInt: Default + Copy {
    fn from_i64(v: i64) -> Self;
    fn from_u64(v: u64) -> Self;
    fn from_f64(v: f64) -> Self;
}

impl LenientInt for i64 {
    fn from_i64(v: i64) -> Self {
        v
    }
    fn from_u64(v: u64) -> Self {
        i64::try_from(v).unwrap_or(i64::MAX)
    }
    fn from_f64(v: f64) -> Self {
        v as i64
    }
}

impl LenientInt for u64 {
    fn from_i64(v: i64) -> Self {
        u64::try_from(v).unwrap_or(0)
    }
    fn from_u64(v: u64) -> Self {
        v
    }
    fn from_f64(v: f64) -> Self {
        v as u64
    }
}

impl LenientInt for u32 {
    fn from_i64(v: i64) -> Self {
        v.clamp(0, i64::from(u32::MAX)) as u32
    }
    fn from_u64(v: u64) -> Self {
        u32::try_from(v).unwrap_or(u32::MAX)
    }
    fn from_f64(v: f64) -> Self {
        v as u32
    }
}

/// An integer decoded from any JSON number, a numeric string or `null`.
///
/// Use it where the integer is not a struct field (map values, sequence
/// elements); fields use [`lenient_number`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lenient<T>(pub T);

impl<'de, T: LenientInt> Deserialize<'de> for Lenient<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_any(LenientVisitor(PhantomData))
            .map(Lenient)
    }
}

impl<T: Serialize> Serialize for Lenient<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

struct LenientVisitor<T>(PhantomData<T>);

impl<'de, T: LenientInt> Visitor<'de> for LenientVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        Ok(T::from_i64(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        Ok(T::from_u64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
        Ok(T::from_f64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        let v = v.trim();
        if v.is_empty() {
            return Ok(T::default());
        }
        if let Ok(n) = v.parse::<i64>() {
            return Ok(T::from_i64(n));
        }
        v.parse::<f64>()
            .map(T::from_f64)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Field helper: any JSON number (integer, fractional, negative), a numeric
/// string or `null` into an integer field. Pair with `#[serde(default)]` so a
/// missing field is zero too.
///
/// Balances and progression are plain JSON numbers on the wire; one
/// fractional or out-of-range value must not fail the whole payload.
pub mod lenient_number {
    use super::{Lenient, LenientInt};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: LenientInt,
    {
        Lenient::<T>::deserialize(deserializer).map(|n| n.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Deserialize)]
    struct Balance {
        #[serde(default, deserialize_with = "super::null_as_default::deserialize")]
        coins: i64,
    }

    #[derive(Deserialize)]
    struct Stats {
        #[serde(default, deserialize_with = "lenient_number::deserialize")]
        xp: u64,
        #[serde(default, deserialize_with = "lenient_number::deserialize")]
        level: u32,
        #[serde(default, deserialize_with = "lenient_number::deserialize")]
        coins: i64,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let p: Balance = serde_json::from_str(r#"{"coins": null}"#).unwrap();
        assert_eq!(p.coins, 0);
        let p: Balance = serde_json::from_str("{}").unwrap();
        assert_eq!(p.coins, 0);
        let p: Balance = serde_json::from_str(r#"{"coins": 42}"#).unwrap();
        assert_eq!(p.coins, 42);
    }

    #[test]
    fn test_lenient_accepts_fractions_and_truncates() {
        let s: Stats =
            serde_json::from_str(r#"{"xp": 12.5, "level": 3.9, "coins": -7.5}"#).unwrap();
        assert_eq!(s.xp, 12);
        assert_eq!(s.level, 3);
        assert_eq!(s.coins, -7);
    }

    #[test]
    fn test_lenient_saturates_out_of_range() {
        let s: Stats = serde_json::from_str(
            r#"{"xp": -40, "level": 99999999999, "coins": 18446744073709551615}"#,
        )
        .unwrap();
        assert_eq!(s.xp, 0);
        assert_eq!(s.level, u32::MAX);
        assert_eq!(s.coins, i64::MAX);

        let s: Stats = serde_json::from_str(r#"{"xp": -3.2, "level": 1e300}"#).unwrap();
        assert_eq!(s.xp, 0);
        assert_eq!(s.level, u32::MAX);
    }

    #[test]
    fn test_lenient_null_missing_and_strings() {
        let s: Stats = serde_json::from_str(r#"{"xp": null, "coins": "25"}"#).unwrap();
        assert_eq!(s.xp, 0);
        assert_eq!(s.level, 0);
        assert_eq!(s.coins, 25);

        let s: Stats = serde_json::from_str(r#"{"coins": "2.75"}"#).unwrap();
        assert_eq!(s.coins, 2);

        assert!(serde_json::from_str::<Stats>(r#"{"coins": "lots"}"#).is_err());
        assert!(serde_json::from_str::<Stats>(r#"{"coins": true}"#).is_err());
    }

    #[test]
    fn test_lenient_map_values() {
        let m: BTreeMap<String, Lenient<i64>> =
            serde_json::from_str(r#"{"a": 1.5, "b": null, "c": -2}"#).unwrap();
        assert_eq!(m["a"], Lenient(1));
        assert_eq!(m["b"], Lenient(0));
        assert_eq!(m["c"], Lenient(-2));
    }
}
