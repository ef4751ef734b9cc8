// --- File: crates/bookagame_api/src/favorites.rs ---
use bookagame_common::models::Favorite;
use bookagame_common::BookingError;

use crate::client::{ApiClient, ApiRequest};

impl ApiClient {
    /// `GET /users/favorites`
    pub async fn favorites(&self) -> Result<Vec<Favorite>, BookingError> {
        self.fetch_data(&ApiRequest::get(&["users", "favorites"])).await
    }

    /// `POST /users/favorites/:venue_id`
    pub async fn add_favorite(&self, venue_id: &str) -> Result<(), BookingError> {
        self.execute(&ApiRequest::post(&["users", "favorites", venue_id])).await
    }

    /// `DELETE /users/favorites/:venue_id`
    pub async fn remove_favorite(&self, venue_id: &str) -> Result<(), BookingError> {
        self.execute(&ApiRequest::delete(&["users", "favorites", venue_id])).await
    }
}
