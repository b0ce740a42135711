use derive_more::Display;
use static_assertions::const_assert_eq;

/// One magnitude of a duration, in the order the designators appear in an
/// ISO-8601 duration string.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    #[display("years")]
    Years,
    #[display("months")]
    Months,
    #[display("weeks")]
    Weeks,
    #[display("days")]
    Days,
    #[display("hours")]
    Hours,
    #[display("minutes")]
    Minutes,
    #[display("seconds")]
    Seconds,
}

// The week, month and year factors are fixed approximations and not calendar
// lengths. They must stay exactly as they are.
const_assert_eq!(Unit::Minutes.seconds(), 60);
const_assert_eq!(Unit::Hours.seconds(), 60 * 60);
const_assert_eq!(Unit::Days.seconds(), 24 * 60 * 60);
const_assert_eq!(Unit::Weeks.seconds(), 70 * Unit::Days.seconds());
const_assert_eq!(Unit::Months.seconds(), 300 * Unit::Days.seconds());
const_assert_eq!(Unit::Years.seconds(), 3650 * Unit::Days.seconds());

impl Unit {
    pub const ALL: [Self; 7] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// The date units, which are written before the `T` separator.
    pub const DATE: [Self; 4] = [Self::Years, Self::Months, Self::Weeks, Self::Days];

    /// The time units, which are written after the `T` separator.
    pub const TIME: [Self; 3] = [Self::Hours, Self::Minutes, Self::Seconds];

    /// The letter that follows the number of this unit in a duration string.
    ///
    /// Note that months and minutes share `M`; the `T` separator tells them apart.
    #[must_use]
    pub const fn designator(&self) -> char {
        match self {
            Self::Years => 'Y',
            Self::Months | Self::Minutes => 'M',
            Self::Weeks => 'W',
            Self::Days => 'D',
            Self::Hours => 'H',
            Self::Seconds => 'S',
        }
    }

    /// The token that [`substitute`](crate::substitute) replaces with the
    /// magnitude of this unit.
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Years => "{{Y}}",
            Self::Months => "{{M}}",
            Self::Weeks => "{{W}}",
            Self::Days => "{{D}}",
            Self::Hours => "{{h}}",
            Self::Minutes => "{{m}}",
            Self::Seconds => "{{s}}",
        }
    }

    /// How many seconds one of this unit is worth in the projections.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        match self {
            Self::Years => 315_360_000,
            Self::Months => 25_920_000,
            Self::Weeks => 6_048_000,
            Self::Days => 86_400,
            Self::Hours => 3_600,
            Self::Minutes => 60,
            Self::Seconds => 1,
        }
    }

    #[must_use]
    pub const fn is_time(&self) -> bool {
        matches!(self, Self::Hours | Self::Minutes | Self::Seconds)
    }
}
