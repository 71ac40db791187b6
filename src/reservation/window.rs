use std::fmt;

use chrono::NaiveTime;

/// Daily time range during which orders are accepted, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl OrderingWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

impl Default for OrderingWindow {
    /// 07:25 to 12:45.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(7, 25, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(12, 45, 0).unwrap_or_default(),
        }
    }
}

impl fmt::Display for OrderingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}
