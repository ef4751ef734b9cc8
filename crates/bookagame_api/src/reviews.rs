// --- File: crates/bookagame_api/src/reviews.rs ---
use bookagame_common::models::{CreateReviewRequest, Review};
use bookagame_common::BookingError;

use crate::client::{ApiClient, ApiRequest};

impl ApiClient {
    /// `POST /reviews/bookings/:booking_id/review`
    pub async fn submit_review(&self, booking_id: &str, review: &CreateReviewRequest) -> Result<Review, BookingError> {
        let request = ApiRequest::post(&["reviews", "bookings", booking_id, "review"]).json(review)?;
        self.fetch_data(&request).await
    }

    /// `GET /reviews/my-reviews`
    pub async fn my_reviews(&self) -> Result<Vec<Review>, BookingError> {
        self.fetch_data(&ApiRequest::get(&["reviews", "my-reviews"])).await
    }
}
