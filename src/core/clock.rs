//! Wall-clock source for the greeting timestamp.
//!
//! The host's local clock is the default. A deployment can pin a named zone
//! through [`AppConfig::time_zone`](crate::core::config::AppConfig).

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Display;

use super::config::AppConfig;

/// 24-hour, zero-padded, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GreetingClock {
    #[default]
    Local,
    Zone(Tz),
}

impl GreetingClock {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        config.time_zone.map_or(Self::Local, Self::Zone)
    }

    /// Reads the clock and renders it with [`TIMESTAMP_FORMAT`].
    #[must_use]
    pub fn timestamp(&self) -> String {
        match self {
            Self::Local => render_timestamp(&Local::now()),
            Self::Zone(tz) => render_timestamp(&Utc::now().with_timezone(tz)),
        }
    }
}

#[must_use]
pub fn render_timestamp<Z>(instant: &DateTime<Z>) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    instant.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_padded_fields() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(render_timestamp(&instant), "2024-01-02 03:04:05");
    }

    #[test]
    fn renders_in_pinned_zone() {
        let instant = Utc
            .with_ymd_and_hms(2024, 7, 1, 22, 30, 0)
            .unwrap()
            .with_timezone(&chrono_tz::Asia::Tokyo);
        assert_eq!(render_timestamp(&instant), "2024-07-02 07:30:00");
    }

    #[test]
    fn defaults_to_local_clock() {
        let clock = GreetingClock::from_config(&AppConfig::default());
        assert_eq!(clock, GreetingClock::Local);
    }
}
