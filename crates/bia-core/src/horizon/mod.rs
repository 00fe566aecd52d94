//! Recovery-time horizons for impact assessment.
//!
//! A business impact assessment scores each impact dimension against a
//! fixed ladder of eight recovery horizons, from one hour out to more than
//! a week. The ladder is strictly ordered and closed: every timeline
//! reduction in this crate compares buckets by their position on the
//! ladder. Labels such as `"8h"` are presentation only and are never used
//! for ordering.
//!
//! # Invariants
//!
//! - The derived `Ord` on [`TimeBucket`] matches chronology exactly.
//! - Conversions from hours, ordinals, or labels outside the fixed set
//!   fail with `None`; a bucket outside the ladder cannot be constructed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hour count assigned to the open-ended `>1week` horizon.
///
/// One week is the conservative floor for threshold comparisons: a process
/// whose impact only turns major beyond a week is compared as if it turned
/// major at exactly 168 hours.
const BEYOND_WEEK_HOURS: u32 = 168;

/// One of the eight fixed recovery-time horizons.
///
/// The derived ordering follows chronology: `OneHour < FourHours < ... <
/// BeyondWeek`. This is the sole ordering used for "earliest occurrence"
/// comparisons in the recovery-timeline reductions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum TimeBucket {
    /// Disruption horizon of one hour.
    #[serde(rename = "1h")]
    OneHour      = 0,
    /// Disruption horizon of four hours.
    #[serde(rename = "4h")]
    FourHours    = 1,
    /// Disruption horizon of eight hours.
    #[serde(rename = "8h")]
    EightHours   = 2,
    /// Disruption horizon of twelve hours.
    #[serde(rename = "12h")]
    TwelveHours  = 3,
    /// Disruption horizon of one day.
    #[serde(rename = "24h")]
    OneDay       = 4,
    /// Disruption horizon of two days.
    #[serde(rename = "48h")]
    TwoDays      = 5,
    /// Disruption horizon of three days.
    #[serde(rename = "72h")]
    ThreeDays    = 6,
    /// Disruption lasting longer than one week.
    #[serde(rename = ">1week")]
    BeyondWeek   = 7,
}

impl TimeBucket {
    /// All buckets in chronological order.
    pub const ALL: &'static [Self] = &[
        Self::OneHour,
        Self::FourHours,
        Self::EightHours,
        Self::TwelveHours,
        Self::OneDay,
        Self::TwoDays,
        Self::ThreeDays,
        Self::BeyondWeek,
    ];

    /// Returns the hour count used for threshold comparisons.
    ///
    /// The open-ended `>1week` horizon compares as 168 hours.
    #[must_use]
    pub const fn hours(self) -> u32 {
        match self {
            Self::OneHour => 1,
            Self::FourHours => 4,
            Self::EightHours => 8,
            Self::TwelveHours => 12,
            Self::OneDay => 24,
            Self::TwoDays => 48,
            Self::ThreeDays => 72,
            Self::BeyondWeek => BEYOND_WEEK_HOURS,
        }
    }

    /// Returns the bucket with exactly the given hour count, if any.
    #[must_use]
    pub const fn from_hours(hours: u32) -> Option<Self> {
        match hours {
            1 => Some(Self::OneHour),
            4 => Some(Self::FourHours),
            8 => Some(Self::EightHours),
            12 => Some(Self::TwelveHours),
            24 => Some(Self::OneDay),
            48 => Some(Self::TwoDays),
            72 => Some(Self::ThreeDays),
            BEYOND_WEEK_HOURS => Some(Self::BeyondWeek),
            _ => None,
        }
    }

    /// Returns the zero-based position on the ladder.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the bucket at the given ladder position, if any.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::OneHour),
            1 => Some(Self::FourHours),
            2 => Some(Self::EightHours),
            3 => Some(Self::TwelveHours),
            4 => Some(Self::OneDay),
            5 => Some(Self::TwoDays),
            6 => Some(Self::ThreeDays),
            7 => Some(Self::BeyondWeek),
            _ => None,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::FourHours => "4h",
            Self::EightHours => "8h",
            Self::TwelveHours => "12h",
            Self::OneDay => "24h",
            Self::TwoDays => "48h",
            Self::ThreeDays => "72h",
            Self::BeyondWeek => ">1week",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_chronological() {
        assert_eq!(TimeBucket::ALL.len(), 8);
        for window in TimeBucket::ALL.windows(2) {
            assert!(window[0] < window[1]);
            assert!(window[0].hours() < window[1].hours());
        }
    }

    #[test]
    fn test_ordering_matches_chronology() {
        assert!(TimeBucket::OneHour < TimeBucket::FourHours);
        assert!(TimeBucket::TwelveHours < TimeBucket::OneDay);
        assert!(TimeBucket::ThreeDays < TimeBucket::BeyondWeek);
    }

    #[test]
    fn test_hours_mapping() {
        let expected = [1, 4, 8, 12, 24, 48, 72, 168];
        for (bucket, hours) in TimeBucket::ALL.iter().zip(expected) {
            assert_eq!(bucket.hours(), hours);
        }
    }

    #[test]
    fn test_from_hours_round_trip() {
        for &bucket in TimeBucket::ALL {
            assert_eq!(TimeBucket::from_hours(bucket.hours()), Some(bucket));
        }
        assert_eq!(TimeBucket::from_hours(0), None);
        assert_eq!(TimeBucket::from_hours(2), None);
        assert_eq!(TimeBucket::from_hours(169), None);
    }

    #[test]
    fn test_from_ordinal_round_trip() {
        for &bucket in TimeBucket::ALL {
            assert_eq!(TimeBucket::from_ordinal(bucket.ordinal()), Some(bucket));
        }
        assert_eq!(TimeBucket::from_ordinal(8), None);
        assert_eq!(TimeBucket::from_ordinal(u8::MAX), None);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(TimeBucket::OneHour.to_string(), "1h");
        assert_eq!(TimeBucket::OneDay.to_string(), "24h");
        assert_eq!(TimeBucket::BeyondWeek.to_string(), ">1week");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&TimeBucket::EightHours).unwrap();
        assert_eq!(json, "\"8h\"");

        let parsed: TimeBucket = serde_json::from_str("\">1week\"").unwrap();
        assert_eq!(parsed, TimeBucket::BeyondWeek);

        assert!(serde_json::from_str::<TimeBucket>("\"2h\"").is_err());
    }
}
