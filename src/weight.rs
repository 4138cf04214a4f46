//! Numeric weights for corpus entries.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use num_traits::{ToPrimitive, Zero};

/// A numeric popularity score attached to a corpus word.
///
/// Weights can be integer usage counts or real-valued frequencies. They are
/// compared with a total order, so floating point weights must never be
/// `NaN`; the [corpus loader](crate::Corpus::from_reader) rejects `NaN` and
/// negative values.
pub trait Weight:
    Copy + PartialOrd + Zero + ToPrimitive + Display + Debug + Send + Sync + 'static
{
    /// Total ordering between two weights.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Parses a weight, returning a human-readable reason on failure.
    fn parse_weight(s: &str) -> Result<Self, String>;

    /// Returns true for weights a corpus may hold.
    fn is_valid(&self) -> bool {
        matches!(
            self.partial_cmp(&Self::zero()),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
}

macro_rules! integer_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            fn parse_weight(s: &str) -> Result<Self, String> {
                s.parse::<$t>().map_err(|e| format!("\"{}\" is not a valid weight: {}", s, e))
            }
        }
    )*};
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            fn parse_weight(s: &str) -> Result<Self, String> {
                s.parse::<$t>().map_err(|e| format!("\"{}\" is not a valid weight: {}", s, e))
            }
        }
    )*};
}

integer_weight!(u32, u64, usize);
float_weight!(f32, f64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!(u64::parse_weight("42"), Ok(42));
        assert!(u64::parse_weight("-3").is_err());
        assert!(u64::parse_weight("4.5").is_err());
        assert!(u64::parse_weight("").is_err());
    }

    #[test]
    fn parses_floats() {
        assert_eq!(f64::parse_weight("0.25"), Ok(0.25));
        assert_eq!(f64::parse_weight("7"), Ok(7.0));
        assert!(f64::parse_weight("many").is_err());
    }

    #[test]
    fn validity() {
        assert!(0_u32.is_valid());
        assert!(0.0_f64.is_valid());
        assert!(3.5_f32.is_valid());
        assert!(!(-1.0_f64).is_valid());
        assert!(!f64::NAN.is_valid());
    }

    #[test]
    fn float_order_is_total() {
        assert_eq!(Weight::total_cmp(&1.0_f64, &2.0), Ordering::Less);
        assert_eq!(Weight::total_cmp(&2.0_f64, &2.0), Ordering::Equal);
        assert_eq!(Weight::total_cmp(&7_u64, &2), Ordering::Greater);
    }
}
