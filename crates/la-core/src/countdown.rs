//! Time remaining until a deadline, split into days/hours/minutes/seconds.
//!
//! Always recomputed from the current clock; ticks are never accumulated.

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    /// Both arguments are epoch milliseconds. Past deadlines and unparsable
    /// (NaN) instants clamp to zero.
    pub fn between(deadline_ms: f64, now_ms: f64) -> Self {
        let diff = ((deadline_ms - now_ms) / 1000.0).floor();
        if !diff.is_finite() || diff <= 0.0 {
            return Self::default();
        }
        Self::from_seconds(diff as u64)
    }

    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }

    #[cfg(test)]
    fn is_expired(&self) -> bool {
        self.total_seconds() == 0
    }

    /// `[days, hours, minutes, seconds]`, each zero-padded to two digits.
    pub fn fields(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(|v| format!("{v:02}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_760_000_000_000.0;

    fn secs(d: u64, h: u64, m: u64, s: u64) -> f64 {
        ((d * SECS_PER_DAY + h * SECS_PER_HOUR + m * SECS_PER_MINUTE + s) * 1000) as f64
    }

    #[test]
    fn mid_range_deadline_renders_each_unit() {
        let remaining = Remaining::between(NOW + secs(1, 2, 3, 4), NOW);
        assert_eq!(remaining.fields(), ["01", "02", "03", "04"]);
    }

    #[test]
    fn expired_deadline_stays_at_zero() {
        let deadline = NOW - 10_000.0;
        for offset in [0.0, 1_000.0, 60_000.0] {
            let remaining = Remaining::between(deadline, NOW + offset);
            assert_eq!(remaining.fields(), ["00", "00", "00", "00"]);
            assert!(remaining.is_expired());
        }
    }

    #[test]
    fn exactly_at_deadline_is_zero() {
        assert_eq!(Remaining::between(NOW, NOW), Remaining::default());
    }

    #[test]
    fn decomposition_sums_back_to_floored_difference() {
        let deadline = NOW + 9_876_543_210.0;
        for step in [0.0, 1.0, 499.0, 999.0, 1_000.0, 86_399_999.0, 3_600_001.5] {
            let now = NOW + step;
            let remaining = Remaining::between(deadline, now);
            let expected = ((deadline - now) / 1000.0).floor() as u64;
            assert_eq!(remaining.total_seconds(), expected);
            assert!(remaining.hours < 24);
            assert!(remaining.minutes < 60);
            assert!(remaining.seconds < 60);
        }
    }

    #[test]
    fn sub_second_remainder_is_floored() {
        let remaining = Remaining::between(NOW + 59_999.0, NOW);
        assert_eq!(remaining.fields(), ["00", "00", "00", "59"]);
    }

    #[test]
    fn fields_are_two_numeric_characters() {
        let remaining = Remaining::between(NOW + secs(7, 23, 59, 9), NOW);
        for field in remaining.fields() {
            assert_eq!(field.len(), 2);
            assert!(field.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn unparsable_deadline_renders_zero() {
        assert_eq!(Remaining::between(f64::NAN, NOW), Remaining::default());
        assert_eq!(Remaining::between(f64::INFINITY, NOW), Remaining::default());
    }

    #[test]
    fn large_day_counts_keep_full_width() {
        let remaining = Remaining::from_seconds(120 * SECS_PER_DAY);
        assert_eq!(remaining.fields()[0], "120");
    }
}
