// --- File: crates/bookagame_api/src/bookings.rs ---
use bookagame_common::models::{Booking, BookingQuery, CancelBookingRequest, CreateBookingRequest};
use bookagame_common::BookingError;
use tracing::info;

use crate::client::{ApiClient, ApiRequest};

impl ApiClient {
    /// `GET /bookings`
    pub async fn bookings(&self, query: &BookingQuery) -> Result<Vec<Booking>, BookingError> {
        let request = ApiRequest::get(&["bookings"]).query(query)?;
        self.fetch_data(&request).await
    }

    /// `GET /bookings/:id`
    pub async fn booking(&self, id: &str) -> Result<Booking, BookingError> {
        self.fetch_data(&ApiRequest::get(&["bookings", id])).await
    }

    /// `POST /bookings`
    pub async fn create_booking(&self, booking: &CreateBookingRequest) -> Result<Booking, BookingError> {
        let request = ApiRequest::post(&["bookings"]).json(booking)?;
        let created: Booking = self.fetch_data(&request).await?;
        info!(
            booking_id = %created.id,
            court_id = %created.court_id,
            date = %created.date,
            "booking created"
        );
        Ok(created)
    }

    /// `POST /bookings/:id/cancel`
    pub async fn cancel_booking(&self, id: &str, reason: Option<String>) -> Result<(), BookingError> {
        let request = ApiRequest::post(&["bookings", id, "cancel"]).json(&CancelBookingRequest { reason })?;
        self.execute(&request).await?;
        info!(booking_id = id, "booking cancelled");
        Ok(())
    }
}
