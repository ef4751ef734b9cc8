#[cfg(test)]
mod tests {
    use crate::time::ClockTime;

    fn t(s: &str) -> ClockTime {
        s.parse().expect("valid time")
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(t("09:00").to_string(), "09:00");
        assert_eq!(t("9:05").to_string(), "09:05");
        assert_eq!(t("18:30:00").to_string(), "18:30");
        assert_eq!(t("18:30:59").to_string(), "18:30");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_ordering_matches_string_order() {
        let mut times = vec![t("21:00"), t("09:00"), t("10:30"), t("10:00")];
        times.sort();
        let rendered: Vec<String> = times.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["09:00", "10:00", "10:30", "21:00"]);
    }

    #[test]
    fn test_add_hours() {
        assert_eq!(t("09:00").add_hours(1), Some(t("10:00")));
        assert_eq!(t("22:30").add_hours(1), Some(t("23:30")));
        assert_eq!(t("23:00").add_hours(1), None);
    }

    #[test]
    fn test_end_of_day_spelling() {
        assert_eq!(t("24:00"), t("00:00"));
        assert_eq!(t("24:00:00"), t("00:00"));
        assert!("24:30".parse::<ClockTime>().is_err());
        let parsed: ClockTime = serde_json::from_str("\"24:00:00\"").unwrap();
        assert_eq!(parsed.to_string(), "00:00");
    }

    #[test]
    fn test_minutes_until_wraps_past_midnight() {
        assert_eq!(t("09:00").minutes_until(t("11:30")), 150);
        assert_eq!(t("23:00").minutes_until(t("00:00")), 60);
        assert_eq!(t("22:00").minutes_until(t("01:00")), 180);
        assert_eq!(t("10:00").minutes_until(t("10:00")), 0);
    }

    #[test]
    fn test_twelve_hour_format() {
        assert_eq!(t("00:00").to_12h_string(), "12:00 AM");
        assert_eq!(t("09:00").to_12h_string(), "9:00 AM");
        assert_eq!(t("12:30").to_12h_string(), "12:30 PM");
        assert_eq!(t("21:00").to_12h_string(), "9:00 PM");
    }

    #[test]
    fn test_serde_round_trip_shape() {
        let json = serde_json::to_string(&t("07:00")).unwrap();
        assert_eq!(json, "\"07:00\"");
        let parsed: ClockTime = serde_json::from_str("\"07:00:00\"").unwrap();
        assert_eq!(parsed, t("07:00"));
        assert!(serde_json::from_str::<ClockTime>("\"7pm\"").is_err());
    }
}
