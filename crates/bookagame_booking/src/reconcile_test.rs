#[cfg(test)]
mod tests {
    use crate::owner::{booked_hours, bookings_on, dashboard_stats, schedule_days};
    use crate::reconcile::*;
    use bookagame_common::models::{
        Booking, BookingSource, BookingStatus, OwnerBooking, Venue, VenueStatus,
    };
    use chrono::{NaiveDate, NaiveDateTime};
    use std::collections::HashMap;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    /// Wednesday 11 March 2026, 12:00.
    fn now() -> NaiveDateTime {
        date(11).and_hms_opt(12, 0, 0).unwrap()
    }

    fn booking(id: &str, day: u32, start: &str, status: BookingStatus, price: f64) -> Booking {
        let start_time: bookagame_common::ClockTime = start.parse().unwrap();
        Booking {
            id: id.to_string(),
            user_id: Some("u1".to_string()),
            court_id: "c1".to_string(),
            date: date(day),
            start_time,
            end_time: start_time.add_hours(1).unwrap(),
            original_price: price,
            final_price: price,
            status,
            source: BookingSource::Online,
            court: None,
            venue: None,
            created_at: None,
        }
    }

    fn owner_booking(booking: Booking) -> OwnerBooking {
        OwnerBooking {
            booking,
            user_name: None,
            user_phone: None,
            guest_name: Some("Guest".to_string()),
            guest_phone: None,
        }
    }

    fn venue(id: &str, status: VenueStatus) -> Venue {
        Venue {
            id: id.to_string(),
            name: id.to_string(),
            address: "Somewhere".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            photos: Vec::new(),
            description: None,
            operating_hours: HashMap::new(),
            amenities: Vec::new(),
            sport_types: Vec::new(),
            rating: 0.0,
            review_count: 0,
            courts: Vec::new(),
            owner_id: "o1".to_string(),
            status,
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(&booking("a", 11, "13:00", BookingStatus::Confirmed, 0.0), now()),
            BookingFilter::Upcoming
        );
        assert_eq!(
            classify(&booking("b", 11, "11:00", BookingStatus::Confirmed, 0.0), now()),
            BookingFilter::Past
        );
        assert_eq!(
            classify(&booking("c", 20, "09:00", BookingStatus::Cancelled, 0.0), now()),
            BookingFilter::Cancelled
        );
        assert_eq!(
            classify(&booking("d", 2, "09:00", BookingStatus::Completed, 0.0), now()),
            BookingFilter::Past
        );
    }

    #[test]
    fn test_cancel_and_review_rules() {
        let future = booking("a", 12, "08:00", BookingStatus::Confirmed, 0.0);
        let started = booking("b", 11, "12:00", BookingStatus::Confirmed, 0.0);
        let completed = booking("c", 1, "08:00", BookingStatus::Completed, 0.0);

        assert!(can_cancel(&future, now()));
        assert!(!can_cancel(&started, now()));
        assert!(!can_cancel(&completed, now()));
        assert!(can_review(&completed));
        assert!(!can_review(&future));
    }

    #[test]
    fn test_filter_bookings_ordering() {
        let all = vec![
            booking("late", 14, "18:00", BookingStatus::Confirmed, 0.0),
            booking("old", 1, "09:00", BookingStatus::Completed, 0.0),
            booking("soon", 11, "15:00", BookingStatus::Confirmed, 0.0),
            booking("recent", 10, "09:00", BookingStatus::Completed, 0.0),
            booking("dropped", 12, "09:00", BookingStatus::Cancelled, 0.0),
        ];

        let ids = |filter| -> Vec<String> {
            filter_bookings(&all, filter, now())
                .into_iter()
                .map(|b| b.id)
                .collect()
        };
        assert_eq!(ids(BookingFilter::Upcoming), vec!["soon", "late"]);
        assert_eq!(ids(BookingFilter::Past), vec!["recent", "old"]);
        assert_eq!(ids(BookingFilter::Cancelled), vec!["dropped"]);
    }

    #[test]
    fn test_filter_parsing_and_query() {
        assert_eq!("Past".parse::<BookingFilter>().unwrap(), BookingFilter::Past);
        assert!("later".parse::<BookingFilter>().is_err());

        let query = BookingFilter::Upcoming.query();
        assert_eq!(query.status, Some(BookingStatus::Confirmed));
        assert_eq!(query.upcoming, Some(true));
        assert_eq!(BookingFilter::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_dashboard_stats() {
        let bookings: Vec<OwnerBooking> = vec![
            // today, still ahead
            booking("a", 11, "18:00", BookingStatus::Confirmed, 1000.0),
            // today, already played
            booking("b", 11, "08:00", BookingStatus::Completed, 800.0),
            // same ISO week (Monday 9th)
            booking("c", 9, "10:00", BookingStatus::Completed, 500.0),
            // next week, pending
            booking("d", 16, "10:00", BookingStatus::Confirmed, 700.0),
            // cancelled today
            booking("e", 11, "20:00", BookingStatus::Cancelled, 900.0),
        ]
        .into_iter()
        .map(owner_booking)
        .collect();
        let venues = vec![
            venue("v1", VenueStatus::Approved),
            venue("v2", VenueStatus::Pending),
        ];

        let stats = dashboard_stats(&bookings, &venues, now());
        assert_eq!(stats.today_bookings, 2);
        assert_eq!(stats.week_earnings, 2300.0);
        assert_eq!(stats.pending_bookings, 2);
        assert_eq!(stats.active_venues, 1);
    }

    #[test]
    fn test_schedule_days() {
        let days = schedule_days(date(30), 7);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(30));
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2026, 4, 5).unwrap());
        assert!(schedule_days(date(30), 0).is_empty());
    }

    #[test]
    fn test_bookings_on_day() {
        let bookings: Vec<OwnerBooking> = vec![
            booking("late", 11, "19:00", BookingStatus::Confirmed, 0.0),
            booking("early", 11, "07:00", BookingStatus::Completed, 0.0),
            booking("gone", 11, "09:00", BookingStatus::Cancelled, 0.0),
            booking("other", 12, "07:00", BookingStatus::Confirmed, 0.0),
        ]
        .into_iter()
        .map(owner_booking)
        .collect();

        let day = bookings_on(&bookings, date(11));
        let ids: Vec<&str> = day.iter().map(|b| b.booking.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);
        assert_eq!(booked_hours(&day), 2.0);
    }
}
