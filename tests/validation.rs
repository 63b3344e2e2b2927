#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tama::libs::error::TaskError;
    use tama::libs::task::{parse_due_date, validate_title, Priority, Status};

    #[test]
    fn test_priority_parses_all_members_and_rejects_others() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        // Tolerant of case and padding
        assert_eq!(" HIGH ".parse::<Priority>().unwrap(), Priority::High);

        let err = "urgent".parse::<Priority>().unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[test]
    fn test_status_parses_all_members_and_rejects_others() {
        assert_eq!("todo".parse::<Status>().unwrap(), Status::Todo);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("done".parse::<Status>().unwrap(), Status::Done);

        assert!(matches!("started".parse::<Status>().unwrap_err(), TaskError::Validation(_)));
        assert!(matches!("".parse::<Status>().unwrap_err(), TaskError::Validation(_)));
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(priority.to_string().parse::<Priority>().unwrap(), priority);
        }
        for status in [Status::Todo, Status::InProgress, Status::Done] {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_validate_title_trims_and_rejects_blank() {
        assert_eq!(validate_title("  Buy milk ").unwrap(), "Buy milk");

        assert!(matches!(validate_title("").unwrap_err(), TaskError::Validation(_)));
        assert!(matches!(validate_title("   ").unwrap_err(), TaskError::Validation(_)));
    }

    #[test]
    fn test_parse_due_date_accepts_iso_and_clears_on_empty() {
        assert_eq!(
            parse_due_date("2026-11-20").unwrap(),
            Some(NaiveDate::from_ymd_opt(2026, 11, 20).unwrap())
        );
        assert_eq!(parse_due_date("").unwrap(), None);
        assert_eq!(parse_due_date("  ").unwrap(), None);

        assert!(matches!(parse_due_date("20.11.2026").unwrap_err(), TaskError::Validation(_)));
        assert!(matches!(parse_due_date("2026-13-40").unwrap_err(), TaskError::Validation(_)));
    }
}
