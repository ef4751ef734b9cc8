#[cfg(test)]
mod tests {
    use crate::flow::mock::MockBookingBackend;
    use crate::flow::BookingFlow;
    use crate::forms::BlockSlotForm;
    use crate::owner::booked_hours;
    use bookagame_common::models::{
        Booking, BookingSource, BookingStatus, OwnerBooking, SlotRange, SlotStatus,
    };
    use bookagame_common::ClockTime;
    use bookagame_config::BookingConfig;
    use bookagame_slots::{IgnoreReason, TapOutcome};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    /// Court open 22:00 to midnight: slots 22:00-23:00 and 23:00-00:00.
    fn late_flow() -> (BookingFlow, Arc<MockBookingBackend>) {
        let backend = Arc::new(MockBookingBackend::new().with_open_day("c1", day(), 22, 23));
        let settings = BookingConfig {
            max_slots: 4,
            min_slots: 1,
            schedule_days: 7,
        };
        (BookingFlow::new(backend.clone(), &settings), backend)
    }

    #[tokio::test]
    async fn test_range_ending_at_midnight_is_priced() {
        let (flow, _) = late_flow();
        let slots = flow.load("c1", day()).await.unwrap();
        assert_eq!(slots.last().unwrap().end_time, t("00:00"));

        flow.tap(t("22:00"));
        assert_eq!(flow.tap(t("23:00")), TapOutcome::Added);

        let range = flow.selection().unwrap();
        assert_eq!(
            range,
            SlotRange {
                start_time: t("22:00"),
                end_time: t("00:00"),
            }
        );
        assert_eq!(range.duration_minutes(), 120);
        assert_eq!(flow.estimated_price(1000.0), 2000.0);
    }

    #[tokio::test]
    async fn test_booking_last_slot_marks_it_booked() {
        let (flow, backend) = late_flow();
        flow.load("c1", day()).await.unwrap();
        flow.tap(t("23:00"));

        let booking = flow.confirm().await.unwrap();
        assert_eq!(booking.end_time, t("00:00"));
        assert_eq!(backend.bookings.lock().unwrap().len(), 1);

        let late = flow.slots();
        assert_eq!(late[0].status, SlotStatus::Available);
        assert_eq!(late[1].status, SlotStatus::Booked);
    }

    #[tokio::test]
    async fn test_block_until_midnight() {
        let (flow, _) = late_flow();
        flow.load("c1", day()).await.unwrap();

        let mut form = BlockSlotForm::new(day());
        form.court_id = Some("c1".to_string());
        form.start_time = Some(t("23:00"));
        form.end_time = Some("24:00".parse().unwrap());

        let blocked = flow.block_slot(&form).await.unwrap();
        assert_eq!(blocked.end_time, t("00:00"));
        assert_eq!(flow.tap(t("23:00")), TapOutcome::Ignored(IgnoreReason::Unavailable));
        assert_eq!(flow.tap(t("22:00")), TapOutcome::Added);
    }

    #[test]
    fn test_booked_hours_across_midnight() {
        let late = OwnerBooking {
            booking: Booking {
                id: "b1".to_string(),
                user_id: None,
                court_id: "c1".to_string(),
                date: day(),
                start_time: t("22:00"),
                end_time: t("00:00"),
                original_price: 2000.0,
                final_price: 2000.0,
                status: BookingStatus::Confirmed,
                source: BookingSource::WalkIn,
                court: None,
                venue: None,
                created_at: None,
            },
            user_name: None,
            user_phone: None,
            guest_name: Some("Night owl".to_string()),
            guest_phone: None,
        };
        assert_eq!(booked_hours(&[&late]), 2.0);
    }
}
