use chrono::{DateTime, Duration, Utc};

/// Clock abstraction so trackers stamp time deterministically in tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Real system time.
    #[default]
    Default,
    /// A pinned timestamp, advanced explicitly.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Current time according to this clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }

    /// Advances a fixed clock by `delta`; no effect on the default clock.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(at) = self {
            *at += delta;
        }
    }
}

/// Deterministic timestamp for tests (2024-03-01T00:00:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_709_251_200;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` pinned at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_stable() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), fixed_now());
    }

    #[test]
    fn advance_moves_fixed_clock_only() {
        let mut clock = fixed_clock();
        clock.advance(Duration::seconds(30));
        assert_eq!(clock.now(), fixed_now() + Duration::seconds(30));

        let mut real = Clock::Default;
        real.advance(Duration::seconds(30));
        assert!(matches!(real, Clock::Default));
    }
}
