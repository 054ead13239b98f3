#[cfg(test)]
mod tests {
    use frond::db::care_logs::{CareLog, CareLogs};
    use frond::libs::care_date::CareDate;
    use frond::libs::task::TaskKind;
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct LogTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for LogTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            LogTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> CareDate {
        CareDate::from_ymd(y, m, d).unwrap()
    }

    #[test_context(LogTestContext)]
    #[test]
    #[serial]
    fn test_insert_and_fetch_all_newest_first(_ctx: &mut LogTestContext) {
        let mut logs = CareLogs::new().unwrap();
        logs.insert(&CareLog::new(1, date(2024, 5, 20), TaskKind::Water, None)).unwrap();
        logs.insert(&CareLog::new(2, date(2024, 5, 24), TaskKind::Prune, Some("Yellow leaves".to_string())))
            .unwrap();
        logs.insert(&CareLog::new(1, date(2024, 5, 22), TaskKind::Fertilize, None)).unwrap();

        let all = logs.fetch_all().unwrap();
        assert_eq!(all.len(), 3);
        let dates: Vec<CareDate> = all.iter().map(|l| l.date).collect();
        assert_eq!(dates, vec![date(2024, 5, 24), date(2024, 5, 22), date(2024, 5, 20)]);
        assert_eq!(all[0].note.as_deref(), Some("Yellow leaves"));
    }

    #[test_context(LogTestContext)]
    #[test]
    #[serial]
    fn test_fetch_by_plant(_ctx: &mut LogTestContext) {
        let mut logs = CareLogs::new().unwrap();
        logs.insert(&CareLog::new(1, date(2024, 5, 20), TaskKind::Water, None)).unwrap();
        logs.insert(&CareLog::new(2, date(2024, 5, 21), TaskKind::Mist, None)).unwrap();
        logs.insert(&CareLog::new(1, date(2024, 5, 22), TaskKind::Repot, None)).unwrap();

        let for_plant = logs.fetch_by_plant(1).unwrap();
        assert_eq!(for_plant.len(), 2);
        assert!(for_plant.iter().all(|l| l.plant_id == 1));
        assert_eq!(for_plant[0].action, TaskKind::Repot);

        assert!(logs.fetch_by_plant(99).unwrap().is_empty());
    }

    #[test_context(LogTestContext)]
    #[test]
    #[serial]
    fn test_same_day_entries_keep_insertion_order_newest_first(_ctx: &mut LogTestContext) {
        let mut logs = CareLogs::new().unwrap();
        logs.insert(&CareLog::new(1, date(2024, 5, 24), TaskKind::Water, None)).unwrap();
        logs.insert(&CareLog::new(1, date(2024, 5, 24), TaskKind::Mist, None)).unwrap();

        let all = logs.fetch_all().unwrap();
        assert_eq!(all[0].action, TaskKind::Mist);
        assert_eq!(all[1].action, TaskKind::Water);
    }

    #[test_context(LogTestContext)]
    #[test]
    #[serial]
    fn test_unparseable_history_rows_are_skipped(_ctx: &mut LogTestContext) {
        let mut logs = CareLogs::new().unwrap();
        logs.insert(&CareLog::new(1, date(2024, 5, 24), TaskKind::Water, None)).unwrap();

        let db = frond::db::db::Db::new().unwrap();
        db.conn
            .execute(
                "INSERT INTO care_logs (plant_id, date, action) VALUES (1, '2024-05-25', 'SEALED')",
                [],
            )
            .unwrap();

        let all = logs.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].action, TaskKind::Water);
    }
}
