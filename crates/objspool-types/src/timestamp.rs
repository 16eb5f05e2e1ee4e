use std::fmt;

use serde::{Deserialize, Serialize};

/// Broken-down syslog timestamp as carried in property values.
///
/// Twelve ordered sub-fields, colon-joined on the wire:
///
/// ```text
/// <type>:<year>:<month>:<day>:<hour>:<minute>:<second>:<frac>:<precision>:<sign>:<offhour>:<offminute>
/// ```
///
/// The offset sign is a single character (`+` or `-`); every other
/// sub-field is a decimal number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogTime {
    /// Timestamp flavor (e.g. RFC 3164 vs. RFC 5424 origin).
    pub time_type: i32,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    /// Fractional seconds, scaled by `sec_frac_precision` digits.
    pub sec_frac: i32,
    /// Number of significant digits in `sec_frac`.
    pub sec_frac_precision: i32,
    /// UTC offset direction, `+` or `-`.
    pub offset_sign: char,
    pub offset_hour: i32,
    pub offset_minute: i32,
}

impl LogTime {
    /// The all-zero timestamp with a positive UTC offset.
    pub const fn zero() -> Self {
        Self {
            time_type: 0,
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            sec_frac: 0,
            sec_frac_precision: 0,
            offset_sign: '+',
            offset_hour: 0,
            offset_minute: 0,
        }
    }
}

impl Default for LogTime {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for LogTime {
    /// Renders the colon-joined wire form of the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}",
            self.time_type,
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.sec_frac,
            self.sec_frac_precision,
            self.offset_sign,
            self.offset_hour,
            self.offset_minute
        )
    }
}
