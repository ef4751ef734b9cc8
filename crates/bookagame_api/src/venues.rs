// --- File: crates/bookagame_api/src/venues.rs ---
//! Venue browsing and court slots.

use bookagame_common::models::{Review, TimeSlot, Venue, VenueListItem, VenueQuery};
use bookagame_common::BookingError;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::client::{ApiClient, ApiRequest};
use crate::envelope::SlotsResponse;

#[derive(Debug, Serialize)]
struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u32>,
}

#[derive(Debug, Serialize)]
struct DateQuery {
    date: NaiveDate,
}

impl ApiClient {
    /// `GET /venues`
    pub async fn venues(&self, query: &VenueQuery) -> Result<Vec<VenueListItem>, BookingError> {
        let request = ApiRequest::get(&["venues"]).query(query)?;
        self.fetch_data(&request).await
    }

    /// `GET /venues/:id`
    pub async fn venue(&self, id: &str) -> Result<Venue, BookingError> {
        self.fetch_data(&ApiRequest::get(&["venues", id])).await
    }

    /// `GET /venues/:id/availability`
    ///
    /// The payload shape is not fixed by the API, so it is handed back as JSON.
    pub async fn venue_availability(&self, id: &str) -> Result<serde_json::Value, BookingError> {
        self.fetch_data(&ApiRequest::get(&["venues", id, "availability"])).await
    }

    /// `GET /venues/:id/reviews`
    pub async fn venue_reviews(
        &self,
        id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Review>, BookingError> {
        let request = ApiRequest::get(&["venues", id, "reviews"]).query(&PageQuery { limit, offset })?;
        self.fetch_data(&request).await
    }

    /// `GET /venues/sports`
    pub async fn sport_types(&self) -> Result<Vec<String>, BookingError> {
        self.fetch_data(&ApiRequest::get(&["venues", "sports"])).await
    }

    /// `GET /courts/:id/slots?date=YYYY-MM-DD`, sorted by start time.
    pub async fn court_slots(&self, court_id: &str, date: NaiveDate) -> Result<Vec<TimeSlot>, BookingError> {
        let request = ApiRequest::get(&["courts", court_id, "slots"]).query(&DateQuery { date })?;
        let SlotsResponse { mut available_slots } = self.fetch(&request).await?;
        available_slots.sort_by_key(|slot| slot.start_time);
        debug!(court_id, %date, count = available_slots.len(), "court slots fetched");
        Ok(available_slots)
    }
}
