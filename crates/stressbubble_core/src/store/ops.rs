//! Pure mutation rules over `StressData`.

use crate::model::date::is_in_month;
use crate::model::stressor::{Stressor, StressorPatch};
use crate::model::StressData;
use crate::reactive::ChangeReport;

/// Non-fatal report of what a mutation did.
///
/// The state effect of a not-found outcome is always "nothing changed";
/// callers that do not care may ignore the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The mapping changed; `affected` records were added/updated/removed.
    Applied { affected: usize },
    /// The date has no sequence.
    DateNotFound,
    /// The date exists but no record carries the requested id.
    StressorNotFound,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Stable token used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied { .. } => "applied",
            Self::DateNotFound => "date_not_found",
            Self::StressorNotFound => "stressor_not_found",
        }
    }
}

impl ChangeReport for MutationOutcome {
    fn changed(&self) -> bool {
        self.is_applied()
    }
}

pub(crate) fn add(data: &mut StressData, date: &str, stressor: Stressor) -> MutationOutcome {
    data.entry(date.to_string()).or_default().push(stressor);
    MutationOutcome::Applied { affected: 1 }
}

pub(crate) fn update(
    data: &mut StressData,
    date: &str,
    stressor_id: &str,
    patch: &StressorPatch,
) -> MutationOutcome {
    let Some(stressors) = data.get_mut(date) else {
        return MutationOutcome::DateNotFound;
    };
    let mut affected = 0;
    for stressor in stressors.iter_mut().filter(|s| s.id == stressor_id) {
        *stressor = patch.apply(stressor);
        affected += 1;
    }
    if affected == 0 {
        MutationOutcome::StressorNotFound
    } else {
        MutationOutcome::Applied { affected }
    }
}

pub(crate) fn delete(data: &mut StressData, date: &str, stressor_id: &str) -> MutationOutcome {
    let Some(stressors) = data.get_mut(date) else {
        return MutationOutcome::DateNotFound;
    };
    let before = stressors.len();
    stressors.retain(|s| s.id != stressor_id);
    let affected = before - stressors.len();
    if stressors.is_empty() {
        data.remove(date);
        // A loaded empty sequence is normalized away even without a match.
        if affected == 0 {
            return MutationOutcome::Applied { affected: 0 };
        }
    }
    if affected == 0 {
        MutationOutcome::StressorNotFound
    } else {
        MutationOutcome::Applied { affected }
    }
}

/// Removes every date key inside `year`/`month`.
///
/// `affected` counts removed records; a month without keys is `DateNotFound`.
pub(crate) fn clear_month(data: &mut StressData, year: i32, month: u32) -> MutationOutcome {
    let dates: Vec<String> = data
        .keys()
        .filter(|date| is_in_month(date, year, month))
        .cloned()
        .collect();
    if dates.is_empty() {
        return MutationOutcome::DateNotFound;
    }
    let affected = dates
        .iter()
        .filter_map(|date| data.remove(date))
        .map(|stressors| stressors.len())
        .sum();
    MutationOutcome::Applied { affected }
}
