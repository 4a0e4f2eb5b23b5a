use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    ops::{Add, Sub},
};

use serde::{Serialize, Serializer};

const MICROS_IN_UNIT: i64 = 1_000_000;

/// Edge length in kilometers (or abstract units for synthetic graphs).
///
/// Stored as fixed-point millionths of a unit so that distances are totally ordered
/// and sums along a path are exact, which lets them act as heap priorities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Distance {
    micros: i64,
}

impl Distance {
    pub const ZERO: Distance = Distance { micros: 0 };
    pub const MAX: Distance = Distance { micros: i64::MAX };

    /// Saturates at `Distance::MAX`, see [`IntoDistance`] for a checked conversion.
    pub fn new(value: i64) -> Distance {
        Distance {
            micros: value.saturating_mul(MICROS_IN_UNIT),
        }
    }

    #[inline(always)]
    pub fn value(&self) -> f64 {
        (self.micros as f64) / (MICROS_IN_UNIT as f64)
    }

    pub fn is_negative(&self) -> bool {
        self.micros < 0
    }

    pub fn saturating_add(self, other: Distance) -> Distance {
        Distance {
            micros: self.micros.saturating_add(other.micros),
        }
    }
}

impl From<Distance> for f64 {
    fn from(value: Distance) -> Self {
        value.value()
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance {
            micros: (value * (MICROS_IN_UNIT as f64)).round() as i64,
        }
    }
}

impl From<i64> for Distance {
    fn from(value: i64) -> Self {
        Distance::new(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Distance) -> Ordering {
        self.micros.cmp(&other.micros)
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Distance) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Saturating, a sum reaching `Distance::MAX` stays there.
impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        self.saturating_add(other)
    }
}

impl Sub for Distance {
    type Output = Distance;

    fn sub(self, other: Distance) -> Distance {
        Distance {
            micros: self.micros.saturating_sub(other.micros),
        }
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Self {
        iter.fold(Distance::ZERO, |acc, distance| acc + distance)
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidDistance {
    NonFinite,
    OutOfRange(f64),
}

/// Raw edge lengths accepted by `Graph::add_edge`.
///
/// Unlike `From`, the conversion fails instead of clamping values a `Distance` cannot hold.
pub trait IntoDistance {
    fn into_distance(self) -> Result<Distance, InvalidDistance>;
}

impl IntoDistance for Distance {
    fn into_distance(self) -> Result<Distance, InvalidDistance> {
        Ok(self)
    }
}

impl IntoDistance for i64 {
    fn into_distance(self) -> Result<Distance, InvalidDistance> {
        self.checked_mul(MICROS_IN_UNIT)
            .map(|micros| Distance { micros })
            .ok_or(InvalidDistance::OutOfRange(self as f64))
    }
}

impl IntoDistance for f64 {
    fn into_distance(self) -> Result<Distance, InvalidDistance> {
        if !self.is_finite() {
            return Err(InvalidDistance::NonFinite);
        }

        let micros = (self * (MICROS_IN_UNIT as f64)).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if micros >= i64::MAX as f64 || micros < i64::MIN as f64 {
            return Err(InvalidDistance::OutOfRange(self));
        }

        Ok(Distance {
            micros: micros as i64,
        })
    }
}

#[macro_export]
macro_rules! distance {
    ($num:expr) => {
        $crate::distance::Distance::from($num)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_add_distances_together() {
        let result = distance!(10) + distance!(1.5);
        assert_eq!(result, distance!(11.5));
    }

    #[test]
    fn sum_is_exact() {
        let total: Distance = [0.1, 0.2, 0.3].into_iter().map(Distance::from).sum();
        assert_eq!(total, distance!(0.6));
    }

    #[test]
    fn value() {
        assert_eq!(distance!(100).value(), 100.0);
        assert_eq!(f64::from(distance!(2.5)), 2.5);
    }

    #[test]
    fn ordering() {
        assert!(distance!(1) < distance!(1.000001));
        assert!(Distance::ZERO < Distance::MAX);
        assert!(distance!(-1.0).is_negative());
    }

    #[test]
    fn saturating_add_does_not_overflow() {
        assert_eq!(Distance::MAX.saturating_add(distance!(1)), Distance::MAX);
    }

    #[test]
    fn arithmetic_saturates() {
        assert_eq!(Distance::MAX + distance!(5), Distance::MAX);
        assert_eq!(
            [Distance::MAX, Distance::MAX].into_iter().sum::<Distance>(),
            Distance::MAX
        );
        assert_eq!(Distance::new(i64::MAX), Distance::MAX);
    }

    #[test]
    fn checked_conversion() {
        assert_eq!(2.5_f64.into_distance(), Ok(distance!(2.5)));
        assert_eq!(7_i64.into_distance(), Ok(distance!(7)));
        assert_eq!(f64::NAN.into_distance(), Err(InvalidDistance::NonFinite));
        assert_eq!(f64::INFINITY.into_distance(), Err(InvalidDistance::NonFinite));
        assert_eq!(1e300_f64.into_distance(), Err(InvalidDistance::OutOfRange(1e300)));
        assert!(i64::MAX.into_distance().is_err());
        assert!(5e12_f64.into_distance().is_ok());
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&distance!(4.25)).unwrap(), "4.25");
    }
}
