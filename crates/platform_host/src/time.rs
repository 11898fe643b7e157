//! Time helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Local wall-clock hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalClockTime {
    /// Hour in `0..24`.
    pub hour: u32,
    /// Minute in `0..60`.
    pub minute: u32,
}

/// Returns the local wall-clock time.
///
/// Native builds have no timezone source and report UTC.
pub fn local_clock_now() -> LocalClockTime {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        LocalClockTime {
            hour: date.get_hours(),
            minute: date.get_minutes(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let minutes = unix_time_ms_now() / 60_000;
        LocalClockTime {
            hour: ((minutes / 60) % 24) as u32,
            minute: (minutes % 60) as u32,
        }
    }
}

/// Formats a clock reading as zero-padded `HH:MM`.
pub fn format_clock_hh_mm(time: LocalClockTime) -> String {
    format!("{:02}:{:02}", time.hour, time.minute)
}
