// --- File: crates/bookagame_api/src/owner.rs ---
//! Endpoints under `/owner`, reachable through [`ApiClient::owner`].

use bookagame_common::models::{
    BlockedSlot, BlockedSlotRequest, Court, CourtRequest, DashboardStats, EarningsSummary,
    OwnerBooking, OwnerBookingQuery, Venue, VenueRequest, WalkInRequest,
};
use bookagame_common::BookingError;
use tracing::info;

use crate::client::{ApiClient, ApiRequest};

/// Venue-owner view of the API.
#[derive(Debug, Clone, Copy)]
pub struct OwnerApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn owner(&self) -> OwnerApi<'_> {
        OwnerApi { client: self }
    }
}

impl<'a> OwnerApi<'a> {
    /// `GET /owner/venues`
    pub async fn venues(&self) -> Result<Vec<Venue>, BookingError> {
        self.client.fetch_data(&ApiRequest::get(&["owner", "venues"])).await
    }

    /// `POST /owner/venues`
    pub async fn create_venue(&self, venue: &VenueRequest) -> Result<Venue, BookingError> {
        let request = ApiRequest::post(&["owner", "venues"]).json(venue)?;
        let created: Venue = self.client.fetch_data(&request).await?;
        info!(venue_id = %created.id, "venue created");
        Ok(created)
    }

    /// `PUT /owner/venues/:id`
    pub async fn update_venue(&self, id: &str, venue: &VenueRequest) -> Result<Venue, BookingError> {
        let request = ApiRequest::put(&["owner", "venues", id]).json(venue)?;
        self.client.fetch_data(&request).await
    }

    /// `DELETE /owner/venues/:id`
    pub async fn delete_venue(&self, id: &str) -> Result<(), BookingError> {
        self.client.execute(&ApiRequest::delete(&["owner", "venues", id])).await?;
        info!(venue_id = id, "venue deleted");
        Ok(())
    }

    /// `GET /owner/venues/:id/courts`
    pub async fn venue_courts(&self, venue_id: &str) -> Result<Vec<Court>, BookingError> {
        self.client
            .fetch_data(&ApiRequest::get(&["owner", "venues", venue_id, "courts"]))
            .await
    }

    /// `POST /owner/venues/:id/courts`
    pub async fn create_court(&self, venue_id: &str, court: &CourtRequest) -> Result<Court, BookingError> {
        let request = ApiRequest::post(&["owner", "venues", venue_id, "courts"]).json(court)?;
        self.client.fetch_data(&request).await
    }

    /// `GET /owner/bookings`
    pub async fn bookings(&self, query: &OwnerBookingQuery) -> Result<Vec<OwnerBooking>, BookingError> {
        let request = ApiRequest::get(&["owner", "bookings"]).query(query)?;
        self.client.fetch_data(&request).await
    }

    /// `POST /owner/bookings/walk-in`
    pub async fn create_walk_in(&self, walk_in: &WalkInRequest) -> Result<OwnerBooking, BookingError> {
        let request = ApiRequest::post(&["owner", "bookings", "walk-in"]).json(walk_in)?;
        let created: OwnerBooking = self.client.fetch_data(&request).await?;
        info!(booking_id = %created.booking.id, court_id = %walk_in.court_id, "walk-in booked");
        Ok(created)
    }

    /// `GET /owner/earnings/summary`
    pub async fn earnings_summary(&self) -> Result<EarningsSummary, BookingError> {
        self.client
            .fetch_data(&ApiRequest::get(&["owner", "earnings", "summary"]))
            .await
    }

    /// `GET /owner/dashboard/stats`
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, BookingError> {
        self.client
            .fetch_data(&ApiRequest::get(&["owner", "dashboard", "stats"]))
            .await
    }

    /// `GET /owner/courts/:id/blocked-slots`
    pub async fn blocked_slots(&self, court_id: &str) -> Result<Vec<BlockedSlot>, BookingError> {
        self.client
            .fetch_data(&ApiRequest::get(&["owner", "courts", court_id, "blocked-slots"]))
            .await
    }

    /// `POST /owner/courts/:id/blocked-slots`
    pub async fn create_blocked_slot(
        &self,
        court_id: &str,
        slot: &BlockedSlotRequest,
    ) -> Result<BlockedSlot, BookingError> {
        let request = ApiRequest::post(&["owner", "courts", court_id, "blocked-slots"]).json(slot)?;
        let created: BlockedSlot = self.client.fetch_data(&request).await?;
        info!(slot_id = %created.id, court_id, "slot blocked");
        Ok(created)
    }

    /// `DELETE /owner/blocked-slots/:id`
    pub async fn delete_blocked_slot(&self, slot_id: &str) -> Result<(), BookingError> {
        self.client
            .execute(&ApiRequest::delete(&["owner", "blocked-slots", slot_id]))
            .await?;
        info!(slot_id, "slot unblocked");
        Ok(())
    }
}
