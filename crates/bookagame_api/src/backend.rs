// --- File: crates/bookagame_api/src/backend.rs ---
use bookagame_common::models::{
    BlockedSlot, BlockedSlotRequest, Booking, CreateBookingRequest, OwnerBooking, TimeSlot,
    WalkInRequest,
};
use bookagame_common::services::{BookingBackend, BoxFuture};
use bookagame_common::BookingError;
use chrono::NaiveDate;

use crate::client::ApiClient;

impl BookingBackend for ApiClient {
    fn court_slots(&self, court_id: &str, date: NaiveDate) -> BoxFuture<'_, Vec<TimeSlot>, BookingError> {
        let court_id = court_id.to_string();
        Box::pin(async move { ApiClient::court_slots(self, &court_id, date).await })
    }

    fn create_booking(&self, request: CreateBookingRequest) -> BoxFuture<'_, Booking, BookingError> {
        Box::pin(async move { ApiClient::create_booking(self, &request).await })
    }

    fn create_walk_in(&self, request: WalkInRequest) -> BoxFuture<'_, OwnerBooking, BookingError> {
        Box::pin(async move { self.owner().create_walk_in(&request).await })
    }

    fn create_blocked_slot(
        &self,
        court_id: &str,
        request: BlockedSlotRequest,
    ) -> BoxFuture<'_, BlockedSlot, BookingError> {
        let court_id = court_id.to_string();
        Box::pin(async move { self.owner().create_blocked_slot(&court_id, &request).await })
    }
}
