//! Whole-second duration value type.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// Errors produced by [`TimeCode`] operations.
///
/// Everything except [`TimeCodeError::Parse`] is an invalid-argument error:
/// the caller asked for a value the type cannot represent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeCodeError {
    /// Minutes must be in 0..=59 when set individually.
    #[error("invalid argument: minutes cannot exceed 59, got {value}")]
    MinutesOutOfRange { value: u64 },

    /// Seconds must be in 0..=59 when set individually.
    #[error("invalid argument: seconds cannot exceed 59, got {value}")]
    SecondsOutOfRange { value: u64 },

    /// Subtraction would go below zero.
    #[error("invalid argument: negative durations are not allowed")]
    NegativeDifference,

    /// Division by a zero factor.
    #[error("invalid argument: division by zero")]
    DivisionByZero,

    /// Text was not of the form `H:M:S`.
    #[error("invalid time code: {input:?}")]
    Parse { input: String },
}

impl TimeCodeError {
    /// Returns true for the invalid-argument family of errors.
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Parse { .. })
    }
}

/// A non-negative span of time at one-second resolution.
///
/// The second count is the only stored state; hours, minutes and seconds are
/// projections of it. Construction from components normalizes overflow, so
/// `TimeCode::new(1, 75, 0)` is two hours and fifteen minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeCode {
    seconds: u64,
}

impl TimeCode {
    /// The zero duration.
    pub const ZERO: Self = Self { seconds: 0 };

    /// Creates a time code from components that need not be in canonical range.
    ///
    /// A total beyond `u64::MAX` seconds is out of contract: it panics in
    /// debug builds and wraps in release builds.
    pub const fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            seconds: components_to_seconds(hours, minutes, seconds),
        }
    }

    /// Creates a time code from a raw second count.
    pub const fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    pub const fn hours(&self) -> u64 {
        self.seconds / SECONDS_PER_HOUR
    }

    pub const fn minutes(&self) -> u64 {
        (self.seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// The seconds component (0..=59), not the total.
    pub const fn seconds(&self) -> u64 {
        self.seconds % SECONDS_PER_MINUTE
    }

    /// The raw second count.
    pub const fn total_seconds(&self) -> u64 {
        self.seconds
    }

    /// Returns `(hours, minutes, seconds)`.
    pub const fn components(&self) -> (u64, u64, u64) {
        (self.hours(), self.minutes(), self.seconds())
    }

    /// Replaces the hours, keeping minutes and seconds.
    pub const fn set_hours(&mut self, hours: u64) {
        self.seconds = components_to_seconds(hours, self.minutes(), self.seconds());
    }

    /// Replaces the minutes component. Fails above 59.
    pub const fn set_minutes(&mut self, minutes: u64) -> Result<(), TimeCodeError> {
        if minutes > 59 {
            return Err(TimeCodeError::MinutesOutOfRange { value: minutes });
        }
        self.seconds = components_to_seconds(self.hours(), minutes, self.seconds());
        Ok(())
    }

    /// Replaces the seconds component. Fails above 59.
    pub const fn set_seconds(&mut self, seconds: u64) -> Result<(), TimeCodeError> {
        if seconds > 59 {
            return Err(TimeCodeError::SecondsOutOfRange { value: seconds });
        }
        self.seconds = components_to_seconds(self.hours(), self.minutes(), seconds);
        Ok(())
    }

    pub const fn reset(&mut self) {
        self.seconds = 0;
    }

    /// Sum of the two durations, or `None` if it exceeds `u64::MAX` seconds.
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.seconds.checked_add(other.seconds) {
            Some(seconds) => Some(Self::from_seconds(seconds)),
            None => None,
        }
    }

    /// Difference of the two durations; fails if `other` is longer.
    pub const fn subtract(self, other: Self) -> Result<Self, TimeCodeError> {
        match self.seconds.checked_sub(other.seconds) {
            Some(seconds) => Ok(Self::from_seconds(seconds)),
            None => Err(TimeCodeError::NegativeDifference),
        }
    }

    /// Multiplies by `factor`, truncating toward zero.
    ///
    /// `factor` is expected to be non-negative. A negative or NaN factor is
    /// outside the contract; the float-to-integer cast then produces zero.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn scale_by(self, factor: f64) -> Self {
        Self::from_seconds((self.seconds as f64 * factor) as u64)
    }

    /// Divides by `factor`, truncating toward zero. Fails on a zero factor.
    ///
    /// Negative divisors fall outside the contract in the same way as for
    /// [`TimeCode::scale_by`].
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn divide_by(self, factor: f64) -> Result<Self, TimeCodeError> {
        if factor == 0.0 {
            return Err(TimeCodeError::DivisionByZero);
        }
        Ok(Self::from_seconds((self.seconds as f64 / factor) as u64))
    }

    /// Renders as unpadded `H:M:S`, e.g. `0:1:5` for 65 seconds.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

const fn components_to_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours(), self.minutes(), self.seconds())
    }
}

impl FromStr for TimeCode {
    type Err = TimeCodeError;

    /// Parses `H:M:S`. Fields may be zero-padded and are normalized like
    /// [`TimeCode::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || TimeCodeError::Parse {
            input: s.to_string(),
        };

        let mut fields = s.trim().split(':').map(|field| {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(parse_err());
            }
            field.parse::<u64>().map_err(|_| parse_err())
        });

        let (Some(hours), Some(minutes), Some(seconds), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(parse_err());
        };

        Ok(Self::new(hours?, minutes?, seconds?))
    }
}

impl From<TimeCode> for u64 {
    fn from(tc: TimeCode) -> Self {
        tc.seconds
    }
}

impl From<u64> for TimeCode {
    fn from(seconds: u64) -> Self {
        Self::from_seconds(seconds)
    }
}

/// Overflow past `u64::MAX` seconds panics in debug builds and wraps in
/// release builds. Use [`TimeCode::checked_add`] when the sum may not fit.
impl Add for TimeCode {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_seconds(self.seconds + rhs.seconds)
    }
}

/// Overflows like [`Add`].
impl AddAssign for TimeCode {
    fn add_assign(&mut self, rhs: Self) {
        self.seconds += rhs.seconds;
    }
}

impl Mul<f64> for TimeCode {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale_by(rhs)
    }
}

impl Sum for TimeCode {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for TimeCode {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for TimeCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seconds.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TimeCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Self::from_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_normalizes_overflow() {
        for (h, m, s) in [(0, 0, 0), (1, 2, 3), (0, 61, 61), (5, 0, 7200), (100, 99, 99)] {
            assert_eq!(TimeCode::new(h, m, s).total_seconds(), h * 3600 + m * 60 + s);
        }
    }

    #[test]
    fn components_are_normalized_projection() {
        assert_eq!(TimeCode::new(1, 75, 0).components(), (2, 15, 0));
        assert_eq!(TimeCode::new(0, 0, 3725).components(), (1, 2, 5));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(TimeCode::default(), TimeCode::ZERO);
        assert_eq!(TimeCode::default().total_seconds(), 0);
    }

    #[test]
    fn copy_duplicates_count() {
        let original = TimeCode::new(1, 2, 3);
        let mut copy = original;
        copy.reset();
        assert_eq!(original.total_seconds(), 3723);
        assert_eq!(copy.total_seconds(), 0);
    }

    #[test]
    fn canonical_string_is_unpadded() {
        assert_eq!(TimeCode::new(0, 1, 5).to_canonical_string(), "0:1:5");
        assert_eq!(TimeCode::from_seconds(65).to_string(), "0:1:5");
        assert_eq!(TimeCode::new(12, 7, 30).to_string(), "12:7:30");
        assert_eq!(TimeCode::ZERO.to_string(), "0:0:0");
    }

    #[test]
    fn set_hours_is_unconstrained() {
        let mut tc = TimeCode::new(1, 2, 3);
        tc.set_hours(250);
        assert_eq!(tc.components(), (250, 2, 3));
    }

    #[test]
    fn set_minutes_checks_range() {
        let mut tc = TimeCode::new(1, 2, 3);
        assert!(tc.set_minutes(59).is_ok());
        assert_eq!(tc.components(), (1, 59, 3));

        let err = tc.set_minutes(60).unwrap_err();
        assert_eq!(err, TimeCodeError::MinutesOutOfRange { value: 60 });
        assert!(err.is_invalid_argument());
        assert_eq!(tc.components(), (1, 59, 3), "failed set must not mutate");
    }

    #[test]
    fn set_seconds_checks_range() {
        let mut tc = TimeCode::new(1, 2, 3);
        assert!(tc.set_seconds(0).is_ok());
        assert_eq!(tc.components(), (1, 2, 0));

        let err = tc.set_seconds(60).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument: seconds cannot exceed 59, got 60");
    }

    #[test]
    fn reset_zeroes() {
        let mut tc = TimeCode::new(3, 0, 0);
        tc.reset();
        assert_eq!(tc, TimeCode::ZERO);
    }

    #[test]
    fn add_sums_counts() {
        let a = TimeCode::from_seconds(35_100);
        let b = TimeCode::from_seconds(52_200);
        assert_eq!((a + b).total_seconds(), 87_300);
        assert_eq!(a.add(b), a + b);

        let mut acc = TimeCode::ZERO;
        acc += a;
        acc += b;
        assert_eq!(acc.total_seconds(), 87_300);
    }

    #[test]
    fn checked_add_reports_overflow() {
        let max = TimeCode::from_seconds(u64::MAX);
        assert_eq!(max.checked_add(TimeCode::from_seconds(1)), None);
        assert_eq!(max.checked_add(TimeCode::ZERO), Some(max));
        assert_eq!(
            TimeCode::new(1, 0, 0).checked_add(TimeCode::new(0, 30, 0)),
            Some(TimeCode::new(1, 30, 0))
        );
    }

    #[test]
    fn sum_over_iterator() {
        let parts = [TimeCode::new(0, 30, 0), TimeCode::new(0, 45, 0)];
        let total: TimeCode = parts.iter().sum();
        assert_eq!(total.to_string(), "1:15:0");
    }

    #[test]
    fn subtract_rejects_negative_results() {
        let a = TimeCode::from_seconds(100);
        let b = TimeCode::from_seconds(40);
        assert_eq!(a.subtract(b).unwrap().total_seconds(), 60);
        assert_eq!(a.subtract(a).unwrap(), TimeCode::ZERO);

        let err = b.subtract(a).unwrap_err();
        assert_eq!(err, TimeCodeError::NegativeDifference);
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn scale_truncates_toward_zero() {
        let tc = TimeCode::from_seconds(10);
        assert_eq!(tc.scale_by(1.55).total_seconds(), 15);
        assert_eq!((tc * 0.5).total_seconds(), 5);
        assert_eq!(tc.scale_by(0.0), TimeCode::ZERO);
    }

    #[test]
    fn divide_truncates_and_rejects_zero() {
        let tc = TimeCode::from_seconds(87_300);
        assert_eq!(tc.divide_by(2.0).unwrap().to_string(), "12:7:30");
        assert_eq!(TimeCode::from_seconds(10).divide_by(3.0).unwrap().total_seconds(), 3);

        for x in [0, 1, 12_345] {
            let err = TimeCode::from_seconds(x).divide_by(0.0).unwrap_err();
            assert_eq!(err, TimeCodeError::DivisionByZero);
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn parses_canonical_and_padded() {
        assert_eq!("0:1:5".parse::<TimeCode>().unwrap(), TimeCode::from_seconds(65));
        assert_eq!("00:01:05".parse::<TimeCode>().unwrap(), TimeCode::from_seconds(65));
        assert_eq!("1:75:0".parse::<TimeCode>().unwrap().to_string(), "2:15:0");
    }

    #[test]
    fn parse_rejects_malformed() {
        for input in ["", "1:2", "1:2:3:4", "a:b:c", "1::3", "-1:0:0", "1:+2:3"] {
            let err = input.parse::<TimeCode>().unwrap_err();
            assert!(!err.is_invalid_argument(), "{input:?} should be a parse error");
        }
    }

    #[test]
    fn serde_uses_second_count() {
        let tc = TimeCode::new(0, 1, 5);
        let json = serde_json::to_string(&tc).unwrap();
        assert_eq!(json, "65");
        let parsed: TimeCode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tc);
    }
}
