// --- File: crates/bookagame_slots/src/selection.rs ---
//! Turns taps on a court's slot list into one contiguous booking range.
//!
//! The selector keeps the fetched slots of a single (court, date) pair sorted
//! by start time and tracks the chosen slots as indices into that list. The
//! chosen indices always form one unbroken run of `available` slots no longer
//! than `max_slots`.

use bookagame_common::models::{SlotRange, TimeSlot};
use bookagame_common::ClockTime;
use std::fmt;
use tracing::debug;

/// Receives the derived range after every change of the selection.
pub type SelectionListener = Box<dyn FnMut(Option<SlotRange>) + Send>;

/// Observable state of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    NonEmptyContiguousRun,
}

/// Why a tap left the selection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No slot starts at the tapped time.
    UnknownSlot,
    /// The slot is booked or blocked.
    Unavailable,
    /// The run already holds `max_slots` slots.
    MaxReached,
}

/// What a tap did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Slot appended to either end of the run.
    Added,
    /// Slot removed from an end of the run (or the only slot removed).
    Removed,
    /// Slot removed from the middle; only the part before it was kept.
    Trimmed,
    /// Slot was not adjacent to the run and now forms a new run on its own.
    Restarted,
    Ignored(IgnoreReason),
}

impl TapOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, TapOutcome::Ignored(_))
    }
}

/// Tap-driven selection of one contiguous run of available slots.
///
/// Contiguity is checked before the maximum: `max_slots` only bounds taps
/// that would extend the run. A tap on a slot away from a full run is not
/// ignored; it starts a new run with that slot.
pub struct SlotSelector {
    slots: Vec<TimeSlot>,
    /// Sorted, contiguous indices into `slots`.
    selected: Vec<usize>,
    max_slots: usize,
    min_slots: usize,
    listener: Option<SelectionListener>,
}

impl SlotSelector {
    /// Creates an empty selection over `slots`.
    ///
    /// Slots are sorted by start time; for duplicate start times the first
    /// occurrence wins. A `max_slots` of zero is treated as one.
    pub fn new(slots: Vec<TimeSlot>, max_slots: usize) -> Self {
        Self {
            slots: normalize(slots),
            selected: Vec::new(),
            max_slots: max_slots.max(1),
            min_slots: 1,
            listener: None,
        }
    }

    /// Minimum number of slots needed before the selection can be booked.
    pub fn with_min_slots(mut self, min_slots: usize) -> Self {
        self.min_slots = min_slots.clamp(1, self.max_slots);
        self
    }

    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(Option<SlotRange>) + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Swaps in the slots of a new (court, date) pair and clears the selection.
    pub fn reset(&mut self, slots: Vec<TimeSlot>) {
        self.slots = normalize(slots);
        if !self.selected.is_empty() {
            self.selected.clear();
            self.notify();
        }
    }

    /// Clears the selection, keeping the slot list.
    pub fn clear(&mut self) {
        if !self.selected.is_empty() {
            self.selected.clear();
            self.notify();
        }
    }

    /// Applies a tap on the slot starting at `start_time`.
    pub fn tap(&mut self, start_time: ClockTime) -> TapOutcome {
        let outcome = self.apply_tap(start_time);
        debug!(%start_time, ?outcome, selected = self.selected.len(), "slot tapped");
        if outcome.changed() {
            self.notify();
        }
        outcome
    }

    fn apply_tap(&mut self, start_time: ClockTime) -> TapOutcome {
        let Ok(index) = self.slots.binary_search_by_key(&start_time, |s| s.start_time) else {
            return TapOutcome::Ignored(IgnoreReason::UnknownSlot);
        };
        if !self.slots[index].is_available() {
            return TapOutcome::Ignored(IgnoreReason::Unavailable);
        }

        if let Ok(position) = self.selected.binary_search(&index) {
            self.selected.remove(position);
            let run = leading_run_len(&self.selected);
            if run < self.selected.len() {
                self.selected.truncate(run);
                return TapOutcome::Trimmed;
            }
            return TapOutcome::Removed;
        }

        let extends_run = match (self.selected.first(), self.selected.last()) {
            (Some(&first), Some(&last)) => index + 1 == first || index == last + 1,
            _ => true,
        };

        if !extends_run {
            self.selected.clear();
            self.selected.push(index);
            return TapOutcome::Restarted;
        }
        if self.selected.len() >= self.max_slots {
            return TapOutcome::Ignored(IgnoreReason::MaxReached);
        }

        match self.selected.first() {
            Some(&first) if index < first => self.selected.insert(0, index),
            _ => self.selected.push(index),
        }
        TapOutcome::Added
    }

    /// The booking range: start of the earliest selected slot to the end of
    /// the latest one.
    pub fn range(&self) -> Option<SlotRange> {
        let first = self.slots.get(*self.selected.first()?)?;
        let last = self.slots.get(*self.selected.last()?)?;
        Some(SlotRange {
            start_time: first.start_time,
            end_time: last.end_time,
        })
    }

    pub fn selected_start_times(&self) -> Vec<ClockTime> {
        self.selected.iter().map(|&i| self.slots[i].start_time).collect()
    }

    pub fn is_selected(&self, start_time: ClockTime) -> bool {
        self.selected.iter().any(|&i| self.slots[i].start_time == start_time)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// True once at least `min_slots` slots are selected.
    pub fn is_confirmable(&self) -> bool {
        self.selected.len() >= self.min_slots
    }

    pub fn state(&self) -> SelectionState {
        if self.selected.is_empty() {
            SelectionState::Empty
        } else {
            SelectionState::NonEmptyContiguousRun
        }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    pub fn min_slots(&self) -> usize {
        self.min_slots
    }

    fn notify(&mut self) {
        let range = self.range();
        if let Some(listener) = self.listener.as_mut() {
            listener(range);
        }
    }
}

impl fmt::Debug for SlotSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotSelector")
            .field("slots", &self.slots.len())
            .field("selected", &self.selected_start_times())
            .field("max_slots", &self.max_slots)
            .field("min_slots", &self.min_slots)
            .finish()
    }
}

fn normalize(mut slots: Vec<TimeSlot>) -> Vec<TimeSlot> {
    // stable sort keeps the first of equal start times in front for dedup
    slots.sort_by_key(|s| s.start_time);
    slots.dedup_by_key(|s| s.start_time);
    slots
}

/// Length of the unbroken run of consecutive indices at the front.
fn leading_run_len(indices: &[usize]) -> usize {
    if indices.is_empty() {
        return 0;
    }
    indices
        .windows(2)
        .position(|w| w[1] != w[0] + 1)
        .map_or(indices.len(), |gap| gap + 1)
}
