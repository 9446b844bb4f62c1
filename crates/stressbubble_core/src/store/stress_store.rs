use crate::model::date::{is_in_month, shift_date_key, today_key};
use crate::model::stressor::{Stressor, StressorPatch};
use crate::model::StressData;
use crate::reactive::{Computed, Observable, Subscription};
use crate::store::ops::{self, MutationOutcome};
use crate::logging::sanitize_field;
use log::debug;

/// Date-keyed stressor store with a current-date cursor and derived view.
///
/// One instance per application session (or per test). All access is
/// single-threaded; every operation completes, and notifies subscribers,
/// before it returns.
pub struct StressStore {
    stress_data: Observable<StressData>,
    current_date: Observable<String>,
    current_stressors: Computed<Vec<Stressor>>,
}

impl Default for StressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StressStore {
    /// Creates an empty store with the cursor on local today.
    pub fn new() -> Self {
        Self::with_date(today_key())
    }

    /// Creates an empty store with the cursor on `date`.
    pub fn with_date(date: impl Into<String>) -> Self {
        let stress_data = Observable::new(StressData::new());
        let current_date = Observable::new(date.into());
        // Registered first so external subscribers observe a fresh view.
        let current_stressors =
            Computed::from_pair(&stress_data, &current_date, |data: &StressData, date: &String| {
                data.get(date).cloned().unwrap_or_default()
            });
        debug!("event=store_init module=store status=ok");
        Self {
            stress_data,
            current_date,
            current_stressors,
        }
    }

    /// Replaces the whole mapping. Input is trusted and not validated.
    ///
    /// Always notifies `StressData` subscribers; the cursor is untouched.
    pub fn load_data(&self, data: StressData) {
        let dates = data.len();
        self.stress_data.update(move |current| {
            *current = data;
            true
        });
        debug!("event=data_load module=store status=ok dates={dates}");
    }

    /// Appends `stressor` to `date`, creating the sequence if needed.
    ///
    /// Ids are not deduplicated.
    pub fn add_stressor(&self, date: &str, stressor: Stressor) -> MutationOutcome {
        let outcome = self
            .stress_data
            .update(|data| ops::add(data, date, stressor));
        log_outcome("stressor_add", date, outcome);
        outcome
    }

    /// Merges `patch` into every record at `date` whose id is `stressor_id`.
    ///
    /// Unknown date or id is a no-op.
    pub fn update_stressor(
        &self,
        date: &str,
        stressor_id: &str,
        patch: &StressorPatch,
    ) -> MutationOutcome {
        let outcome = self
            .stress_data
            .update(|data| ops::update(data, date, stressor_id, patch));
        log_outcome("stressor_update", date, outcome);
        outcome
    }

    /// Removes every record at `date` whose id is `stressor_id`; drops the
    /// date key once its sequence is empty.
    ///
    /// Unknown date or id is a no-op.
    pub fn delete_stressor(&self, date: &str, stressor_id: &str) -> MutationOutcome {
        let outcome = self
            .stress_data
            .update(|data| ops::delete(data, date, stressor_id));
        log_outcome("stressor_delete", date, outcome);
        outcome
    }

    /// Removes every date of one calendar month (1-based `month`) in a
    /// single transition.
    ///
    /// A month without data is a no-op.
    pub fn clear_month(&self, year: i32, month: u32) -> MutationOutcome {
        let outcome = self
            .stress_data
            .update(|data| ops::clear_month(data, year, month));
        log_outcome("month_clear", &format!("{year:04}-{month:02}"), outcome);
        outcome
    }

    /// Moves the cursor. The value is not validated.
    pub fn set_date(&self, date: impl Into<String>) {
        self.current_date.set(date.into());
    }

    /// Moves the cursor by `days`.
    ///
    /// Returns `false` (cursor untouched) when the cursor is not a valid date.
    pub fn step_date(&self, days: i64) -> bool {
        let Some(next) = self.current_date.with(|date| shift_date_key(date, days)) else {
            debug!("event=date_step module=store status=noop reason=invalid_cursor");
            return false;
        };
        self.set_date(next);
        true
    }

    /// Moves the cursor to local today.
    pub fn go_to_today(&self) {
        self.set_date(today_key());
    }

    /// Snapshot of the whole mapping.
    pub fn stress_data(&self) -> StressData {
        self.stress_data.get()
    }

    pub fn current_date(&self) -> String {
        self.current_date.get()
    }

    /// Stressors for the cursor date; empty when the date has no entry.
    ///
    /// Returns a fresh vector on every call.
    pub fn current_stressors(&self) -> Vec<Stressor> {
        self.current_stressors.get()
    }

    /// Stressors stored at `date`, in insertion order.
    pub fn stressors_on(&self, date: &str) -> Vec<Stressor> {
        self.stress_data
            .with(|data| data.get(date).cloned().unwrap_or_default())
    }

    /// First record at `date` carrying `stressor_id`.
    pub fn stressor(&self, date: &str, stressor_id: &str) -> Option<Stressor> {
        self.stress_data.with(|data| {
            data.get(date)?
                .iter()
                .find(|stressor| stressor.id == stressor_id)
                .cloned()
        })
    }

    /// Returns whether `date` has at least one stressor.
    pub fn has_data(&self, date: &str) -> bool {
        self.stress_data
            .with(|data| data.get(date).is_some_and(|stressors| !stressors.is_empty()))
    }

    /// Dates with at least one stressor, ascending.
    pub fn dates_with_data(&self) -> Vec<String> {
        self.stress_data.with(|data| {
            data.iter()
                .filter(|(_, stressors)| !stressors.is_empty())
                .map(|(date, _)| date.clone())
                .collect()
        })
    }

    /// Dates with data inside one calendar month (1-based `month`).
    pub fn dates_with_data_in_month(&self, year: i32, month: u32) -> Vec<String> {
        self.dates_with_data()
            .into_iter()
            .filter(|date| is_in_month(date, year, month))
            .collect()
    }

    /// Observes every `StressData` change.
    pub fn subscribe_stress_data(&self, callback: impl Fn(&StressData) + 'static) -> Subscription {
        self.stress_data.subscribe(callback)
    }

    /// Observes every cursor change.
    pub fn subscribe_current_date(&self, callback: impl Fn(&String) + 'static) -> Subscription {
        self.current_date.subscribe(callback)
    }

    /// Observes every recomputation of the derived view.
    pub fn subscribe_current_stressors(
        &self,
        callback: impl Fn(&Vec<Stressor>) + 'static,
    ) -> Subscription {
        self.current_stressors.subscribe(callback)
    }
}

fn log_outcome(event: &str, date: &str, outcome: MutationOutcome) {
    let date = sanitize_field(date);
    match outcome {
        MutationOutcome::Applied { affected } => debug!(
            "event={event} module=store status=ok date={date} affected={affected}"
        ),
        other => debug!(
            "event={event} module=store status=noop date={date} reason={}",
            other.as_str()
        ),
    }
}
