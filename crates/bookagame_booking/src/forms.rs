// --- File: crates/bookagame_booking/src/forms.rs ---
//! Form input and validation.
//!
//! Each form holds raw user input and turns it into the API request it
//! feeds, or a [`BookingError::Validation`] carrying the message to show.
//! Checks run in a fixed order; the first failure wins.

use bookagame_common::models::{
    BlockedSlotRequest, CourtRequest, CreateReviewRequest, LoginRequest, OperatingHours,
    RegisterRequest, SlotRange, UpdateProfileRequest, VenueRequest, WalkInRequest,
};
use bookagame_common::{validation_error, BookingError, ClockTime};
use chrono::NaiveDate;
use std::collections::HashMap;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, BookingError> {
        if blank(&self.email) || self.password.is_empty() {
            return Err(validation_error("Please enter both email and password"));
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, BookingError> {
        if blank(&self.name) || blank(&self.email) || blank(&self.password) {
            return Err(validation_error("Please fill in all required fields"));
        }
        if self.password != self.confirm_password {
            return Err(validation_error("Passwords do not match"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(validation_error(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: self.name.trim().to_string(),
            phone: non_blank(&self.phone),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<UpdateProfileRequest, BookingError> {
        let Some(name) = non_blank(&self.name) else {
            return Err(validation_error("Name is required"));
        };
        Ok(UpdateProfileRequest {
            name: Some(name),
            phone: non_blank(&self.phone),
            avatar_url: None,
        })
    }
}

/// Court editor. `id` is set when editing an existing court.
#[derive(Debug, Clone, Default)]
pub struct CourtForm {
    pub id: Option<String>,
    pub name: String,
    pub sport_type: String,
    pub hourly_rate: String,
}

impl CourtForm {
    pub fn validate(&self) -> Result<CourtRequest, BookingError> {
        let Some(name) = non_blank(&self.name) else {
            return Err(validation_error("Court name is required"));
        };
        if blank(&self.sport_type) {
            return Err(validation_error("Please select a sport type"));
        }
        let base_price = self
            .hourly_rate
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|rate| rate.is_finite() && *rate >= 0.0)
            .ok_or_else(|| validation_error("Please enter a valid hourly rate"))?;
        Ok(CourtRequest {
            id: self.id.clone(),
            name,
            sport_type: self.sport_type.trim().to_string(),
            base_price,
        })
    }
}

#[derive(Debug, Clone)]
pub struct VenueForm {
    pub name: String,
    pub address: String,
    pub description: String,
    pub sport_types: Vec<String>,
    pub amenities: Vec<String>,
    pub latitude: String,
    pub longitude: String,
    pub opening_time: ClockTime,
    pub closing_time: ClockTime,
}

impl Default for VenueForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            description: String::new(),
            sport_types: Vec::new(),
            amenities: Vec::new(),
            latitude: String::new(),
            longitude: String::new(),
            opening_time: ClockTime::new(6, 0).unwrap_or_default(),
            closing_time: ClockTime::new(22, 0).unwrap_or_default(),
        }
    }
}

impl VenueForm {
    /// Builds the venue payload. The daily opening window applies to every
    /// weekday; coordinates that do not parse are left out.
    pub fn validate(&self) -> Result<VenueRequest, BookingError> {
        let Some(name) = non_blank(&self.name) else {
            return Err(validation_error("Venue name is required"));
        };
        let Some(address) = non_blank(&self.address) else {
            return Err(validation_error("Address is required"));
        };
        if self.sport_types.is_empty() {
            return Err(validation_error("Select at least one sport type"));
        }

        let hours = OperatingHours {
            open: self.opening_time,
            close: self.closing_time,
        };
        let operating_hours: HashMap<String, OperatingHours> = WEEKDAYS
            .iter()
            .map(|day| (day.to_string(), hours.clone()))
            .collect();

        Ok(VenueRequest {
            name,
            address,
            description: non_blank(&self.description),
            latitude: self.latitude.trim().parse().ok(),
            longitude: self.longitude.trim().parse().ok(),
            sport_types: self.sport_types.clone(),
            amenities: self.amenities.clone(),
            operating_hours,
        })
    }
}

/// Walk-in booking entered by a venue owner.
#[derive(Debug, Clone, Default)]
pub struct WalkInForm {
    pub guest_name: String,
    pub guest_phone: String,
}

impl WalkInForm {
    pub fn validate(
        &self,
        court_id: Option<&str>,
        date: NaiveDate,
        range: Option<SlotRange>,
    ) -> Result<WalkInRequest, BookingError> {
        let Some(range) = range else {
            return Err(validation_error("Please select at least one time slot"));
        };
        let Some(guest_name) = non_blank(&self.guest_name) else {
            return Err(validation_error("Please enter guest name"));
        };
        let Some(guest_phone) = non_blank(&self.guest_phone) else {
            return Err(validation_error("Please enter guest phone"));
        };
        let Some(court_id) = court_id.filter(|id| !blank(id)) else {
            return Err(validation_error("Please select a court"));
        };
        Ok(WalkInRequest {
            court_id: court_id.to_string(),
            date,
            start_time: range.start_time,
            end_time: range.end_time,
            guest_name,
            guest_phone,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BlockSlotForm {
    pub court_id: Option<String>,
    pub date: NaiveDate,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub reason: String,
}

impl BlockSlotForm {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            court_id: None,
            date,
            start_time: None,
            end_time: None,
            reason: String::new(),
        }
    }

    /// Returns the court to block and the request body.
    pub fn validate(&self) -> Result<(String, BlockedSlotRequest), BookingError> {
        let Some(court_id) = self.court_id.as_deref().and_then(non_blank) else {
            return Err(validation_error("Please select a court"));
        };
        let (Some(start_time), Some(end_time)) = (self.start_time, self.end_time) else {
            return Err(validation_error("Please select start and end time"));
        };
        // 00:00 as an end time closes the day.
        let ends_at_midnight = end_time == ClockTime::default() && start_time != end_time;
        if start_time >= end_time && !ends_at_midnight {
            return Err(validation_error("End time must be after start time"));
        }
        Ok((
            court_id,
            BlockedSlotRequest {
                date: self.date,
                start_time,
                end_time,
                reason: non_blank(&self.reason),
            },
        ))
    }
}

#[derive(Debug, Clone)]
pub struct ReviewForm {
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            rating: MAX_RATING,
            comment: String::new(),
        }
    }
}

impl ReviewForm {
    pub fn validate(&self) -> Result<CreateReviewRequest, BookingError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(validation_error(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }
        Ok(CreateReviewRequest {
            rating: self.rating,
            comment: non_blank(&self.comment),
        })
    }

    pub fn rating_label(&self) -> &'static str {
        rating_label(self.rating)
    }
}

/// Caption shown under the star picker.
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        5 => "Excellent!",
        _ => "",
    }
}
