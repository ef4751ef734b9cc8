// --- File: crates/bookagame_booking/src/flow.rs ---
//! Slot booking for one court on one date.
//!
//! [`BookingFlow`] fetches a court's slots, routes taps through the
//! [`SlotSelector`] and turns the resulting range into a player booking, a
//! walk-in or a blocked slot. After every successful submission the slots
//! are fetched again so booked and blocked slots show up.

use bookagame_common::models::{
    BlockedSlot, Booking, CreateBookingRequest, OwnerBooking, SlotRange, TimeSlot,
};
use bookagame_common::services::BookingBackend;
use bookagame_common::{validation_error, BookingError, ClockTime, InFlight};
use bookagame_config::BookingConfig;
use bookagame_slots::selection::SelectionListener;
use bookagame_slots::{SlotSelector, TapOutcome};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::forms::{BlockSlotForm, WalkInForm};

/// The (court, date) pair whose slots are loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowTarget {
    pub court_id: String,
    pub date: NaiveDate,
}

struct FlowState {
    target: Option<FlowTarget>,
    selector: SlotSelector,
}

pub struct BookingFlow {
    backend: Arc<dyn BookingBackend>,
    state: Mutex<FlowState>,
    listener: Mutex<Option<SelectionListener>>,
    booking: InFlight,
    blocking: InFlight,
}

impl BookingFlow {
    pub fn new(backend: Arc<dyn BookingBackend>, settings: &BookingConfig) -> Self {
        let selector = SlotSelector::new(Vec::new(), settings.max_slots).with_min_slots(settings.min_slots);
        Self {
            backend,
            state: Mutex::new(FlowState {
                target: None,
                selector,
            }),
            listener: Mutex::new(None),
            booking: InFlight::new("booking"),
            blocking: InFlight::new("slot blocking"),
        }
    }

    fn state(&self) -> MutexGuard<'_, FlowState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Registers a callback that receives the range after every selection change.
    ///
    /// The callback runs after the flow's state lock is released, so it may
    /// query the flow. It must not register another listener.
    pub fn on_selection_change<F>(&self, listener: F)
    where
        F: FnMut(Option<SlotRange>) + Send + 'static,
    {
        let mut slot = match self.listener.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(Box::new(listener));
    }

    fn notify(&self, range: Option<SlotRange>) {
        let mut slot = match self.listener.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(listener) = slot.as_mut() {
            listener(range);
        }
    }

    /// Runs `change` on the selector and reports a changed range once the
    /// state lock is dropped.
    fn change_selection<R>(&self, change: impl FnOnce(&mut FlowState) -> R) -> R {
        let (result, before, after) = {
            let mut state = self.state();
            let before = state.selector.range();
            let result = change(&mut *state);
            (result, before, state.selector.range())
        };
        if before != after {
            self.notify(after);
        }
        result
    }

    /// Fetches the slots of `court_id` on `date` and starts a fresh selection.
    pub async fn load(&self, court_id: &str, date: NaiveDate) -> Result<Vec<TimeSlot>, BookingError> {
        let slots = self.backend.court_slots(court_id, date).await?;
        debug!(court_id, %date, count = slots.len(), "slots loaded");

        let target = FlowTarget {
            court_id: court_id.to_string(),
            date,
        };
        Ok(self.change_selection(|state| {
            state.target = Some(target);
            state.selector.reset(slots);
            state.selector.slots().to_vec()
        }))
    }

    /// Fetches the slots of the current pair again. The selection is cleared.
    pub async fn refresh(&self) -> Result<Vec<TimeSlot>, BookingError> {
        let Some(target) = self.target() else {
            return Err(validation_error("Please select a court"));
        };
        self.load(&target.court_id, target.date).await
    }

    pub fn tap(&self, start_time: ClockTime) -> TapOutcome {
        self.change_selection(|state| state.selector.tap(start_time))
    }

    pub fn clear_selection(&self) {
        self.change_selection(|state| state.selector.clear());
    }

    pub fn selection(&self) -> Option<SlotRange> {
        self.state().selector.range()
    }

    pub fn selected_start_times(&self) -> Vec<ClockTime> {
        self.state().selector.selected_start_times()
    }

    pub fn slots(&self) -> Vec<TimeSlot> {
        self.state().selector.slots().to_vec()
    }

    pub fn target(&self) -> Option<FlowTarget> {
        self.state().target.clone()
    }

    pub fn is_confirmable(&self) -> bool {
        self.state().selector.is_confirmable()
    }

    /// True while a booking or walk-in submission is running.
    pub fn is_booking(&self) -> bool {
        self.booking.is_active()
    }

    /// Price of the selected range at `hourly_rate`.
    pub fn estimated_price(&self, hourly_rate: f64) -> f64 {
        self.selection()
            .map(|range| f64::from(range.duration_minutes()) / 60.0 * hourly_rate)
            .unwrap_or(0.0)
    }

    fn confirmable_range(&self) -> Result<(FlowTarget, Option<SlotRange>), BookingError> {
        let state = self.state();
        let Some(target) = state.target.clone() else {
            return Err(validation_error("Please select a court"));
        };
        let range = if state.selector.is_confirmable() {
            state.selector.range()
        } else {
            None
        };
        Ok((target, range))
    }

    /// Books the selected range for the signed-in player.
    pub async fn confirm(&self) -> Result<Booking, BookingError> {
        let _token = self.booking.try_begin()?;
        let (target, range) = self.confirmable_range()?;
        let Some(range) = range else {
            return Err(validation_error("Please select at least one time slot"));
        };

        let request = CreateBookingRequest {
            court_id: target.court_id.clone(),
            date: target.date,
            start_time: range.start_time,
            end_time: range.end_time,
        };
        let booking = self.backend.create_booking(request).await?;
        info!(
            booking_id = %booking.id,
            court_id = %target.court_id,
            start = %range.start_time,
            end = %range.end_time,
            "court booked"
        );

        self.after_submit().await;
        Ok(booking)
    }

    /// Books the selected range for a walk-in guest.
    pub async fn confirm_walk_in(&self, form: &WalkInForm) -> Result<OwnerBooking, BookingError> {
        let _token = self.booking.try_begin()?;
        let (court_id, date, range) = {
            let state = self.state();
            let range = if state.selector.is_confirmable() {
                state.selector.range()
            } else {
                None
            };
            match &state.target {
                Some(target) => (Some(target.court_id.clone()), target.date, range),
                None => (None, chrono::Local::now().date_naive(), range),
            }
        };

        let request = form.validate(court_id.as_deref(), date, range)?;
        let booking = self.backend.create_walk_in(request).await?;
        info!(booking_id = %booking.booking.id, "walk-in booked");

        self.after_submit().await;
        Ok(booking)
    }

    /// Blocks a time range. The slots are refetched when the blocked range
    /// falls on the loaded pair.
    pub async fn block_slot(&self, form: &BlockSlotForm) -> Result<BlockedSlot, BookingError> {
        let _token = self.blocking.try_begin()?;
        let (court_id, request) = form.validate()?;
        let date = request.date;
        let blocked = self.backend.create_blocked_slot(&court_id, request).await?;
        info!(slot_id = %blocked.id, court_id = %court_id, %date, "time blocked");

        let affected = self
            .target()
            .is_some_and(|t| t.court_id == court_id && t.date == date);
        if affected {
            self.after_submit().await;
        }
        Ok(blocked)
    }

    async fn after_submit(&self) {
        self.clear_selection();
        if let Err(e) = self.refresh().await {
            warn!("could not refresh slots after submission: {}", e);
        }
    }
}

impl std::fmt::Debug for BookingFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("BookingFlow")
            .field("target", &state.target)
            .field("selector", &state.selector)
            .field("is_booking", &self.booking.is_active())
            .finish()
    }
}

/// In-memory [`BookingBackend`] for tests.
#[cfg(test)]
pub mod mock {
    use super::*;
    use bookagame_common::models::{
        BlockedSlotRequest, BookingSource, BookingStatus, SlotStatus, WalkInRequest,
    };
    use bookagame_common::services::BoxFuture;
    use std::collections::HashMap;
    use std::time::Duration;

    #[derive(Default)]
    pub struct MockBookingBackend {
        slots: Mutex<HashMap<(String, NaiveDate), Vec<TimeSlot>>>,
        pub bookings: Mutex<Vec<CreateBookingRequest>>,
        pub walk_ins: Mutex<Vec<WalkInRequest>>,
        pub blocked: Mutex<Vec<(String, BlockedSlotRequest)>>,
        pub slot_fetches: Mutex<u32>,
        pub fail_bookings: Mutex<Option<String>>,
        pub delay: Option<Duration>,
    }

    impl MockBookingBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Hourly slots from `first_hour` to `last_hour` (inclusive start hours).
        pub fn with_open_day(self, court_id: &str, date: NaiveDate, first_hour: u32, last_hour: u32) -> Self {
            let slots = (first_hour..=last_hour)
                .map(|h| TimeSlot {
                    start_time: ClockTime::new(h, 0).unwrap(),
                    end_time: ClockTime::new((h + 1) % 24, 0).unwrap(),
                    status: SlotStatus::Available,
                    booking_id: None,
                })
                .collect();
            self.slots
                .lock()
                .unwrap()
                .insert((court_id.to_string(), date), slots);
            self
        }

        fn mark(&self, court_id: &str, date: NaiveDate, start: ClockTime, end: ClockTime, status: SlotStatus) {
            let mut slots = self.slots.lock().unwrap();
            if let Some(day) = slots.get_mut(&(court_id.to_string(), date)) {
                let length = start.minutes_until(end);
                for slot in day.iter_mut() {
                    let offset = start.minutes_until(slot.start_time);
                    if offset < length && offset + slot.start_time.minutes_until(slot.end_time) <= length {
                        slot.status = status;
                    }
                }
            }
        }

        fn booking(id: String, court_id: &str, date: NaiveDate, start: ClockTime, end: ClockTime, source: BookingSource) -> Booking {
            Booking {
                id,
                user_id: None,
                court_id: court_id.to_string(),
                date,
                start_time: start,
                end_time: end,
                original_price: 0.0,
                final_price: 0.0,
                status: BookingStatus::Confirmed,
                source,
                court: None,
                venue: None,
                created_at: None,
            }
        }
    }

    impl BookingBackend for MockBookingBackend {
        fn court_slots(&self, court_id: &str, date: NaiveDate) -> BoxFuture<'_, Vec<TimeSlot>, BookingError> {
            let key = (court_id.to_string(), date);
            Box::pin(async move {
                *self.slot_fetches.lock().unwrap() += 1;
                let slots = self.slots.lock().unwrap().get(&key).cloned();
                slots.ok_or_else(|| BookingError::Api {
                    status: 404,
                    message: "Court not found".to_string(),
                })
            })
        }

        fn create_booking(&self, request: CreateBookingRequest) -> BoxFuture<'_, Booking, BookingError> {
            Box::pin(async move {
                if let Some(delay) = self.delay {
                    tokio::time::sleep(delay).await;
                }
                if let Some(message) = self.fail_bookings.lock().unwrap().clone() {
                    return Err(BookingError::Api { status: 409, message });
                }
                self.mark(&request.court_id, request.date, request.start_time, request.end_time, SlotStatus::Booked);
                let mut bookings = self.bookings.lock().unwrap();
                bookings.push(request.clone());
                Ok(Self::booking(
                    format!("b{}", bookings.len()),
                    &request.court_id,
                    request.date,
                    request.start_time,
                    request.end_time,
                    BookingSource::Online,
                ))
            })
        }

        fn create_walk_in(&self, request: WalkInRequest) -> BoxFuture<'_, OwnerBooking, BookingError> {
            Box::pin(async move {
                self.mark(&request.court_id, request.date, request.start_time, request.end_time, SlotStatus::Booked);
                let mut walk_ins = self.walk_ins.lock().unwrap();
                walk_ins.push(request.clone());
                Ok(OwnerBooking {
                    booking: Self::booking(
                        format!("w{}", walk_ins.len()),
                        &request.court_id,
                        request.date,
                        request.start_time,
                        request.end_time,
                        BookingSource::WalkIn,
                    ),
                    user_name: None,
                    user_phone: None,
                    guest_name: Some(request.guest_name.clone()),
                    guest_phone: Some(request.guest_phone.clone()),
                })
            })
        }

        fn create_blocked_slot(
            &self,
            court_id: &str,
            request: BlockedSlotRequest,
        ) -> BoxFuture<'_, BlockedSlot, BookingError> {
            let court_id = court_id.to_string();
            Box::pin(async move {
                self.mark(&court_id, request.date, request.start_time, request.end_time, SlotStatus::Blocked);
                let mut blocked = self.blocked.lock().unwrap();
                blocked.push((court_id.clone(), request.clone()));
                Ok(BlockedSlot {
                    id: format!("s{}", blocked.len()),
                    court_id,
                    date: request.date,
                    start_time: request.start_time,
                    end_time: request.end_time,
                    reason: request.reason.clone(),
                })
            })
        }
    }
}
