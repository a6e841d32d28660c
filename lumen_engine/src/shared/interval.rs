use std::fmt::{Display, Formatter};
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// Represents a closed interval of values. There may/not be a `start` and/or `end` bound.
///
/// Both bounds are inclusive when present; `Range` conversions are treated as inclusive too, since ray distances
/// are compared against floats where the distinction is meaningless.
///
/// # Requirements
/// It is a logic error for `start > end`. Such an interval is considered empty, and [Self::contains()] will
/// return `false` for every value.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Interval<T> {
    pub start: Option<T>,
    pub end: Option<T>,
}

impl<T> From<RangeFull> for Interval<T> {
    fn from(_value: RangeFull) -> Self { Self { start: None, end: None } }
}
impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (min, max) = value.into_inner();
        Self {
            start: Some(min),
            end: Some(max),
        }
    }
}
impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(value: RangeTo<T>) -> Self {
        Self {
            start: None,
            end: Some(value.end),
        }
    }
}
impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(value: RangeToInclusive<T>) -> Self {
        Self {
            start: None,
            end: Some(value.end),
        }
    }
}
impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(value: RangeFrom<T>) -> Self {
        Self {
            start: Some(value.start),
            end: None,
        }
    }
}
impl<T> From<Range<T>> for Interval<T> {
    fn from(value: Range<T>) -> Self {
        Self {
            start: Some(value.start),
            end: Some(value.end),
        }
    }
}

impl<T> Interval<T> {
    pub const FULL: Self = Self { start: None, end: None };
}

impl<T: PartialOrd> Interval<T> {
    pub fn contains(&self, item: &T) -> bool {
        match self {
            Self {
                start: Some(start),
                end: Some(end),
            } => start <= item && item <= end,
            Self {
                start: Some(start),
                end: None,
            } => start <= item,
            Self {
                start: None,
                end: Some(end),
            } => item <= end,
            Self { start: None, end: None } => true,
        }
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(start) = &self.start {
            write!(f, "{start}")?;
        }
        write!(f, "..=")?;
        if let Some(end) = &self.end {
            write!(f, "{end}")?
        }
        Ok(())
    }
}

impl<T> Interval<T> {
    /// Returns a copy of the interval, but ending at `end`
    pub fn with_some_end(self, end: T) -> Self { Self { end: Some(end), ..self } }
}
