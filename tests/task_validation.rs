#[cfg(test)]
mod tests {
    use frond::libs::plant::{Plant, PlantError};
    use frond::libs::task::{NewTask, Priority, TaskKind, ValidationError, MAX_NOTE_LEN};

    fn valid_input() -> NewTask {
        NewTask {
            plant_id: 1,
            kind: "WATER".to_string(),
            date: "2024-05-24".to_string(),
            note: None,
            priority: None,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let (kind, date, priority) = valid_input().validate().unwrap();
        assert_eq!(kind, TaskKind::Water);
        assert_eq!(date.to_string(), "2024-05-24");
        assert_eq!(priority, None);
    }

    #[test]
    fn test_note_at_limit_is_accepted() {
        let mut input = valid_input();
        input.note = Some("x".repeat(MAX_NOTE_LEN));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_note_over_limit_is_rejected() {
        let mut input = valid_input();
        input.note = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert_eq!(input.validate().unwrap_err(), ValidationError::NoteTooLong(501));
    }

    #[test]
    fn test_note_limit_counts_characters_not_bytes() {
        let mut input = valid_input();
        // 500 multi-byte characters stay within the limit
        input.note = Some("ä".repeat(MAX_NOTE_LEN));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let mut input = valid_input();
        input.kind = "POLISH".to_string();
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::UnknownKind("POLISH".to_string())
        );
    }

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        let mut input = valid_input();
        input.kind = "fertilize".to_string();
        let (kind, _, _) = input.validate().unwrap();
        assert_eq!(kind, TaskKind::Fertilize);
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let mut input = valid_input();
        input.priority = Some("URGENT".to_string());
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::UnknownPriority("URGENT".to_string())
        );
    }

    #[test]
    fn test_priority_parsing_is_case_insensitive() {
        let mut input = valid_input();
        input.priority = Some("high".to_string());
        let (_, _, priority) = input.validate().unwrap();
        assert_eq!(priority, Some(Priority::High));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        for raw in ["2024-13-01", "2024-02-30", "05/24/2024", "tomorrow", ""] {
            let mut input = valid_input();
            input.date = raw.to_string();
            assert_eq!(
                input.validate().unwrap_err(),
                ValidationError::InvalidDate(raw.trim().to_string()),
                "'{}' should not parse as a calendar date",
                raw
            );
        }
    }

    #[test]
    fn test_missing_plant_id_is_rejected() {
        let mut input = valid_input();
        input.plant_id = 0;
        assert_eq!(input.validate().unwrap_err(), ValidationError::MissingPlantId);
    }

    #[test]
    fn test_plant_interval_below_one_is_rejected() {
        for interval in [0, -1, -30] {
            let result = Plant::new("Monstera", None, None, interval, None);
            assert_eq!(result.unwrap_err(), PlantError::InvalidInterval(interval));
        }
    }

    #[test]
    fn test_plant_empty_name_is_rejected() {
        assert_eq!(Plant::new("", None, None, 7, None).unwrap_err(), PlantError::EmptyName);
        assert_eq!(Plant::new("   ", None, None, 7, None).unwrap_err(), PlantError::EmptyName);
    }

    #[test]
    fn test_plant_construction_trims_and_keeps_fields() {
        let plant = Plant::new(
            "  Monstera Deliciosa ",
            Some("Swiss Cheese Plant".to_string()),
            Some("Living Room".to_string()),
            7,
            None,
        )
        .unwrap();
        assert_eq!(plant.name, "Monstera Deliciosa");
        assert_eq!(plant.watering_interval_days, 7);
        assert!(plant.last_watered.is_none());
    }
}
