//! View state of the user table: the four filter inputs.
//!
//! Each input keeps the text as typed and a debounced copy of it. Rows are
//! filtered with the debounced copies so typing does not refilter on every
//! keystroke; highlighting follows the typed text directly.

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use roster_states::State;

use crate::{BusinessConfig, Debounced, FilterField, UserFilter};

#[derive(Debug, Clone)]
pub struct FilterInput {
    pub text: String,
    debounced: Debounced<String>,
}

impl FilterInput {
    fn new(delay: TimeDelta) -> Self {
        Self {
            text: String::new(),
            debounced: Debounced::new(String::new(), delay),
        }
    }

    pub fn applied(&self) -> &str {
        self.debounced.value()
    }

    pub fn is_settled(&self) -> bool {
        self.debounced.is_settled() && self.text == *self.debounced.value()
    }
}

#[derive(Debug, Clone)]
pub struct UserTableState {
    inputs: [FilterInput; 4],
}

impl Default for UserTableState {
    fn default() -> Self {
        Self::new(BusinessConfig::default().filter_debounce())
    }
}

impl UserTableState {
    pub fn new(delay: TimeDelta) -> Self {
        Self {
            inputs: std::array::from_fn(|_| FilterInput::new(delay)),
        }
    }

    pub fn input(&self, field: FilterField) -> &FilterInput {
        &self.inputs[field.index()]
    }

    /// The live text buffer, for binding to a text edit.
    pub fn input_mut(&mut self, field: FilterField) -> &mut String {
        &mut self.inputs[field.index()].text
    }

    pub fn set_input(&mut self, field: FilterField, text: impl Into<String>) {
        *self.input_mut(field) = text.into();
    }

    /// Empties one filter, bypassing the debounce.
    pub fn clear(&mut self, field: FilterField) {
        let input = &mut self.inputs[field.index()];
        input.text.clear();
        input.debounced.reset(String::new());
    }

    /// Feeds the typed text to the debouncers and applies whatever is due.
    /// Returns whether any applied filter changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let mut changed = false;
        for (field, input) in FilterField::ALL.into_iter().zip(self.inputs.iter_mut()) {
            input.debounced.set(input.text.clone(), now);
            if input.debounced.poll(now) {
                debug!(
                    "UserTableState: {} filter applied: {:?}",
                    field.key(),
                    input.debounced.value()
                );
                changed = true;
            }
        }
        changed
    }

    /// Filter built from the debounced values; decides which rows are shown.
    pub fn applied_filter(&self) -> UserFilter {
        self.collect(|input| input.applied())
    }

    /// Filter built from the typed text; decides what is highlighted.
    pub fn live_filter(&self) -> UserFilter {
        self.collect(|input| input.text.as_str())
    }

    /// Time until the next pending filter is due.
    pub fn next_deadline(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.inputs
            .iter()
            .filter_map(|input| input.debounced.remaining(now))
            .min()
    }

    fn collect<'a>(&'a self, pick: impl Fn(&'a FilterInput) -> &'a str) -> UserFilter {
        let mut filter = UserFilter::default();
        for field in FilterField::ALL {
            filter.set(field, pick(self.input(field)));
        }
        filter
    }
}

impl State for UserTableState {}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn typed_text_applies_after_delay() {
        let mut state = UserTableState::new(TimeDelta::milliseconds(300));
        state.set_input(FilterField::Name, "lean");

        assert!(!state.tick(t0()));
        assert_eq!(state.live_filter().name, "lean");
        assert_eq!(state.applied_filter().name, "");
        assert_eq!(
            state.next_deadline(t0() + TimeDelta::milliseconds(100)),
            Some(TimeDelta::milliseconds(200))
        );

        assert!(state.tick(t0() + TimeDelta::milliseconds(300)));
        assert_eq!(state.applied_filter().name, "lean");
        assert!(state.input(FilterField::Name).is_settled());
        assert_eq!(state.next_deadline(t0()), None);
    }

    #[test]
    fn inputs_are_independent() {
        let mut state = UserTableState::new(TimeDelta::zero());
        state.set_input(FilterField::Email, "biz");
        state.set_input(FilterField::Phone, "770");
        state.tick(t0());

        let applied = state.applied_filter();
        assert_eq!(applied.email, "biz");
        assert_eq!(applied.phone, "770");
        assert_eq!(applied.name, "");
        assert_eq!(applied.username, "");
    }

    #[test]
    fn clear_skips_debounce() {
        let mut state = UserTableState::new(TimeDelta::milliseconds(300));
        state.set_input(FilterField::Username, "bret");
        state.tick(t0());
        state.tick(t0() + TimeDelta::milliseconds(300));
        assert_eq!(state.applied_filter().username, "bret");

        state.clear(FilterField::Username);
        assert_eq!(state.applied_filter().username, "");
        assert_eq!(state.live_filter().username, "");
        assert!(!state.tick(t0() + TimeDelta::milliseconds(301)));
    }

    #[test]
    fn oversized_env_delay_does_not_panic() {
        let config =
            BusinessConfig::from_vars(vec![("ROSTER_FILTER_DEBOUNCE_MS", "9000000000000000")])
                .unwrap();
        let mut state = UserTableState::new(config.filter_debounce());
        state.set_input(FilterField::Name, "lean");

        assert!(!state.tick(t0()));
        assert_eq!(
            state.next_deadline(t0()),
            Some(TimeDelta::milliseconds(crate::MAX_FILTER_DEBOUNCE_MS as i64))
        );
    }

    #[test]
    fn default_uses_standard_delay() {
        let mut state = UserTableState::default();
        state.set_input(FilterField::Name, "x");
        state.tick(t0());
        assert!(!state.tick(t0() + TimeDelta::milliseconds(299)));
        assert!(state.tick(t0() + TimeDelta::milliseconds(300)));
    }
}
