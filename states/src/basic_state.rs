use std::any::Any;

use chrono::{DateTime, Duration, Utc};

use crate::State;

/// Virtual clock shared by every time-dependent piece of client logic.
///
/// The app shell sets it from the wall clock once per frame; everything
/// downstream (debounce deadlines, elapsed-time display) reads `now` from
/// here instead of calling `Utc::now()` directly, so tests can drive time
/// forward deterministically.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { virt: now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    /// Moves the clock forward. Test helper; the app shell assigns the
    /// wall clock through `as_mut` instead.
    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_defaults_to_epoch() {
        let time = Time::default();
        assert_eq!(time.now().timestamp(), 0);
    }

    #[test]
    fn test_advance_moves_clock_forward() {
        let mut time = Time::default();
        time.advance(Duration::milliseconds(450));
        assert_eq!(time.now().timestamp_millis(), 450);
    }

    #[test]
    fn test_as_mut_assigns_wall_clock() {
        let mut time = Time::default();
        let now = Utc::now();
        *time.as_mut() = now;
        assert_eq!(*time.as_ref(), now);
    }
}
