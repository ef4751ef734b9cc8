#[cfg(test)]
mod tests {
    use crate::flow::mock::MockBookingBackend;
    use crate::flow::BookingFlow;
    use crate::forms::{BlockSlotForm, WalkInForm};
    use bookagame_common::models::{SlotRange, SlotStatus};
    use bookagame_common::{BookingError, ClockTime};
    use bookagame_config::BookingConfig;
    use bookagame_slots::TapOutcome;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn settings() -> BookingConfig {
        BookingConfig {
            max_slots: 4,
            min_slots: 1,
            schedule_days: 7,
        }
    }

    fn flow_with(backend: MockBookingBackend) -> (BookingFlow, Arc<MockBookingBackend>) {
        let backend = Arc::new(backend);
        (BookingFlow::new(backend.clone(), &settings()), backend)
    }

    #[tokio::test]
    async fn test_load_tap_and_confirm() {
        let (flow, backend) = flow_with(MockBookingBackend::new().with_open_day("c1", day(), 8, 12));
        flow.load("c1", day()).await.unwrap();

        assert_eq!(flow.tap(t("10:00")), TapOutcome::Added);
        assert_eq!(flow.tap(t("11:00")), TapOutcome::Added);
        assert_eq!(
            flow.selection(),
            Some(SlotRange {
                start_time: t("10:00"),
                end_time: t("12:00"),
            })
        );
        assert_eq!(flow.estimated_price(800.0), 1600.0);

        let booking = flow.confirm().await.unwrap();
        assert_eq!(booking.start_time, t("10:00"));
        assert_eq!(booking.end_time, t("12:00"));

        let sent = backend.bookings.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].court_id, "c1");

        // selection cleared and slots refetched with the new booking visible
        assert!(flow.selection().is_none());
        assert_eq!(*backend.slot_fetches.lock().unwrap(), 2);
        let booked: Vec<ClockTime> = flow
            .slots()
            .iter()
            .filter(|s| s.status == SlotStatus::Booked)
            .map(|s| s.start_time)
            .collect();
        assert_eq!(booked, vec![t("10:00"), t("11:00")]);
        assert!(!flow.is_booking());
    }

    #[tokio::test]
    async fn test_confirm_without_selection_is_rejected() {
        let (flow, backend) = flow_with(MockBookingBackend::new().with_open_day("c1", day(), 8, 12));
        flow.load("c1", day()).await.unwrap();

        let err = flow.confirm().await.unwrap_err();
        assert_eq!(err.to_string(), "Please select at least one time slot");
        assert!(backend.bookings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_confirm_is_rejected() {
        let backend = MockBookingBackend::new()
            .with_open_day("c1", day(), 8, 12)
            .with_delay(Duration::from_millis(50));
        let (flow, backend) = flow_with(backend);
        flow.load("c1", day()).await.unwrap();
        flow.tap(t("09:00"));

        let (first, second) = tokio::join!(flow.confirm(), flow.confirm());
        assert!(first.is_ok());
        assert!(matches!(second, Err(BookingError::InProgress(_))));
        assert_eq!(backend.bookings.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_booking_keeps_selection() {
        let (flow, backend) = flow_with(MockBookingBackend::new().with_open_day("c1", day(), 8, 12));
        *backend.fail_bookings.lock().unwrap() = Some("Slot already booked".to_string());
        flow.load("c1", day()).await.unwrap();
        flow.tap(t("08:00"));

        let err = flow.confirm().await.unwrap_err();
        assert_eq!(err.user_message(), "Slot already booked");
        assert_eq!(flow.selected_start_times(), vec![t("08:00")]);
    }

    #[tokio::test]
    async fn test_listener_sees_changes() {
        let (flow, _) = flow_with(MockBookingBackend::new().with_open_day("c1", day(), 8, 12));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        flow.on_selection_change(move |range| sink.lock().unwrap().push(range));

        flow.load("c1", day()).await.unwrap();
        flow.tap(t("09:00"));
        flow.tap(t("09:00"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_some());
        assert!(seen[1].is_none());
    }

    #[tokio::test]
    async fn test_listener_can_read_the_flow() {
        let (flow, _) = flow_with(MockBookingBackend::new().with_open_day("c1", day(), 8, 12));
        let flow = Arc::new(flow);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handle = Arc::downgrade(&flow);
        flow.on_selection_change(move |range| {
            let current = handle.upgrade().and_then(|f| f.selection());
            assert_eq!(current, range);
            sink.lock().unwrap().push(current);
        });

        flow.load("c1", day()).await.unwrap();
        flow.tap(t("10:00"));
        flow.tap(t("11:00"));
        flow.clear_selection();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[1],
            Some(SlotRange {
                start_time: t("10:00"),
                end_time: t("12:00"),
            })
        );
        assert_eq!(seen[2], None);
    }

    #[tokio::test]
    async fn test_walk_in_uses_selection() {
        let (flow, backend) = flow_with(MockBookingBackend::new().with_open_day("c1", day(), 8, 12));
        flow.load("c1", day()).await.unwrap();
        flow.tap(t("12:00"));

        let form = WalkInForm {
            guest_name: "  Ravi ".to_string(),
            guest_phone: "0917 555 0101".to_string(),
        };
        let booking = flow.confirm_walk_in(&form).await.unwrap();
        assert_eq!(booking.customer_name(), Some("Ravi"));

        let sent = backend.walk_ins.lock().unwrap().clone();
        assert_eq!(sent[0].start_time, t("12:00"));
        assert_eq!(sent[0].end_time, t("13:00"));
    }

    #[tokio::test]
    async fn test_walk_in_without_slots_fails_first_check() {
        let (flow, _) = flow_with(MockBookingBackend::new().with_open_day("c1", day(), 8, 12));
        flow.load("c1", day()).await.unwrap();
        let err = flow.confirm_walk_in(&WalkInForm::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Please select at least one time slot");
    }

    #[tokio::test]
    async fn test_blocking_loaded_court_refreshes_slots() {
        let (flow, backend) = flow_with(MockBookingBackend::new().with_open_day("c1", day(), 8, 12));
        flow.load("c1", day()).await.unwrap();

        let mut form = BlockSlotForm::new(day());
        form.court_id = Some("c1".to_string());
        form.start_time = Some(t("08:00"));
        form.end_time = Some(t("10:00"));
        form.reason = "Maintenance".to_string();

        let blocked = flow.block_slot(&form).await.unwrap();
        assert_eq!(blocked.reason.as_deref(), Some("Maintenance"));
        assert_eq!(*backend.slot_fetches.lock().unwrap(), 2);
        assert_eq!(flow.tap(t("08:00")), TapOutcome::Ignored(bookagame_slots::IgnoreReason::Unavailable));
    }

    #[tokio::test]
    async fn test_refresh_requires_loaded_court() {
        let (flow, _) = flow_with(MockBookingBackend::new());
        assert!(matches!(flow.refresh().await, Err(BookingError::Validation(_))));
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_slots() {
        let (flow, _) = flow_with(MockBookingBackend::new().with_open_day("c1", day(), 8, 9));
        flow.load("c1", day()).await.unwrap();
        assert!(flow.load("missing", day()).await.is_err());
        assert_eq!(flow.slots().len(), 2);
        assert_eq!(flow.target().unwrap().court_id, "c1");
    }
}
