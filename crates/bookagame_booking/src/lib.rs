// --- File: crates/bookagame_booking/src/lib.rs ---
pub mod flow;
pub mod forms;
pub mod owner;
pub mod reconcile;

#[cfg(test)]
mod flow_midnight_test;
#[cfg(test)]
mod flow_test;
#[cfg(test)]
mod reconcile_test;

pub use flow::{BookingFlow, FlowTarget};
pub use forms::{
    rating_label, BlockSlotForm, CourtForm, LoginForm, ProfileForm, RegisterForm, ReviewForm,
    VenueForm, WalkInForm,
};
pub use reconcile::{can_cancel, can_review, classify, filter_bookings, BookingFilter};
