//! Debouncing driven by the frame clock.

use chrono::{DateTime, TimeDelta, Utc};

/// Holds an applied value and at most one pending replacement.
///
/// A pending value is applied once it has been left unchanged for `delay`,
/// so only the latest value within a burst of changes is ever applied.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    value: T,
    pending: Option<(T, DateTime<Utc>)>,
    delay: TimeDelta,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(value: T, delay: TimeDelta) -> Self {
        Self {
            value,
            pending: None,
            delay,
        }
    }

    /// The applied value.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(value, _)| value)
    }

    pub fn delay(&self) -> TimeDelta {
        self.delay
    }

    pub fn is_settled(&self) -> bool {
        self.pending.is_none()
    }

    /// Records `value` as changed at `now`.
    ///
    /// Setting the value that is already pending keeps its timestamp;
    /// setting the applied value drops the pending change.
    pub fn set(&mut self, value: T, now: DateTime<Utc>) {
        if value == self.value {
            self.pending = None;
            return;
        }
        match &self.pending {
            Some((pending, _)) if *pending == value => {}
            _ => self.pending = Some((value, now)),
        }
    }

    /// Applies the pending value if it is due. Returns whether the applied
    /// value changed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.pending.take() {
            Some((value, changed_at)) if now - changed_at >= self.delay => {
                self.value = value;
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Time left until the pending value is due, if any. A deadline past
    /// the end of the calendar is never due.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        let (_, changed_at) = self.pending.as_ref()?;
        let due = changed_at.checked_add_signed(self.delay)?;
        Some((due - now).max(TimeDelta::zero()))
    }

    /// Applies `value` immediately and drops any pending change.
    pub fn reset(&mut self, value: T) {
        self.value = value;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn ms(n: i64) -> TimeDelta {
        TimeDelta::milliseconds(n)
    }

    #[test]
    fn applies_after_delay() {
        let mut d = Debounced::new(String::new(), ms(300));
        d.set("lean".to_owned(), t0());

        assert!(!d.poll(t0() + ms(299)));
        assert_eq!(d.value(), "");
        assert_eq!(d.pending().map(String::as_str), Some("lean"));

        assert!(d.poll(t0() + ms(300)));
        assert_eq!(d.value(), "lean");
        assert!(d.is_settled());
    }

    #[test]
    fn only_latest_value_in_window_is_applied() {
        let mut d = Debounced::new(String::new(), ms(300));
        d.set("l".to_owned(), t0());
        d.set("le".to_owned(), t0() + ms(100));
        d.set("lea".to_owned(), t0() + ms(200));

        // 300ms after the first keystroke, but only 100ms after the last.
        assert!(!d.poll(t0() + ms(300)));
        assert_eq!(d.value(), "");

        assert!(d.poll(t0() + ms(500)));
        assert_eq!(d.value(), "lea");
    }

    #[test]
    fn repeated_set_keeps_original_timestamp() {
        let mut d = Debounced::new(0, ms(300));
        d.set(1, t0());
        d.set(1, t0() + ms(250));
        assert!(d.poll(t0() + ms(300)));
        assert_eq!(*d.value(), 1);
    }

    #[test]
    fn reverting_cancels_pending_change() {
        let mut d = Debounced::new(5, ms(300));
        d.set(6, t0());
        d.set(5, t0() + ms(10));
        assert!(d.is_settled());
        assert!(!d.poll(t0() + ms(1000)));
        assert_eq!(*d.value(), 5);
    }

    #[test]
    fn zero_delay_applies_on_next_poll() {
        let mut d = Debounced::new(0, TimeDelta::zero());
        d.set(3, t0());
        assert!(d.poll(t0()));
        assert_eq!(*d.value(), 3);
    }

    #[test]
    fn remaining_counts_down() {
        let mut d = Debounced::new(0, ms(300));
        assert_eq!(d.remaining(t0()), None);

        d.set(1, t0());
        assert_eq!(d.remaining(t0() + ms(100)), Some(ms(200)));
        assert_eq!(d.remaining(t0() + ms(400)), Some(TimeDelta::zero()));
    }

    #[test]
    fn overflowing_deadline_is_never_due() {
        let mut d = Debounced::new(0, TimeDelta::MAX);
        d.set(1, t0());

        assert_eq!(d.remaining(t0()), None);
        assert!(!d.poll(t0() + TimeDelta::days(365)));
        assert_eq!(*d.value(), 0);
    }

    #[test]
    fn reset_applies_immediately() {
        let mut d = Debounced::new("a".to_owned(), ms(300));
        d.set("ab".to_owned(), t0());
        d.reset(String::new());

        assert_eq!(d.value(), "");
        assert!(d.is_settled());
        assert_eq!(d.delay(), ms(300));
    }
}
