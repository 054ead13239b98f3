#[cfg(test)]
mod tests {
    use frond::db::db::Db;
    use frond::db::tasks::Tasks;
    use frond::libs::care_date::CareDate;
    use frond::libs::task::NewTask;
    use frond::libs::task_service::{TaskService, TaskStore};
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext { _temp_dir: temp_dir }
        }
    }

    fn new_task(plant_id: i64, date: &str, note: Option<&str>) -> NewTask {
        NewTask {
            plant_id,
            kind: "WATER".to_string(),
            date: date.to_string(),
            note: note.map(str::to_string),
            priority: Some("HIGH".to_string()),
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_tasks_survive_service_restart(_ctx: &mut StoreTestContext) {
        let mut service = TaskService::new(Tasks::new().unwrap()).unwrap();
        let created = service.add_task(&new_task(1, "2024-05-24", Some("500ml"))).unwrap();
        service.add_task(&new_task(2, "2024-05-25", None)).unwrap();

        // A fresh service over a fresh connection sees the same snapshot
        let service = TaskService::new(Tasks::new().unwrap()).unwrap();
        assert_eq!(service.all_tasks().len(), 2);
        let reloaded = &service.all_tasks()[0];
        assert_eq!(reloaded.id, created.id);
        assert_eq!(reloaded.note.as_deref(), Some("500ml"));
        assert_eq!(reloaded.date, CareDate::from_ymd(2024, 5, 24).unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_completion_survives_service_restart(_ctx: &mut StoreTestContext) {
        let mut service = TaskService::new(Tasks::new().unwrap()).unwrap();
        let task = service.add_task(&new_task(1, "2024-05-24", None)).unwrap();
        service.toggle_complete(task.id).unwrap();

        let service = TaskService::new(Tasks::new().unwrap()).unwrap();
        assert!(service.all_tasks()[0].completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_corrupt_rows_are_skipped_not_fatal(_ctx: &mut StoreTestContext) {
        let mut service = TaskService::new(Tasks::new().unwrap()).unwrap();
        service.add_task(&new_task(1, "2024-05-24", None)).unwrap();

        // Corrupt rows written behind the service's back
        let db = Db::new().unwrap();
        db.conn
            .execute(
                "INSERT INTO tasks (id, plant_id, kind, date, completed) VALUES (90, 1, 'WATER', 'not-a-date', 0)",
                [],
            )
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO tasks (id, plant_id, kind, date, completed) VALUES (91, 1, 'POLISH', '2024-05-24', 0)",
                [],
            )
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO tasks (id, plant_id, kind, date, completed, priority) VALUES (92, 1, 'MIST', '2024-05-24', 0, 'URGENT')",
                [],
            )
            .unwrap();

        // Startup must not crash, and the valid row still loads
        let service = TaskService::new(Tasks::new().unwrap()).unwrap();
        assert_eq!(service.all_tasks().len(), 1);
        assert_eq!(service.all_tasks()[0].plant_id, 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_load_returns_raw_records(_ctx: &mut StoreTestContext) {
        let mut service = TaskService::new(Tasks::new().unwrap()).unwrap();
        service.add_task(&new_task(1, "2024-05-24", None)).unwrap();

        let mut store = Tasks::new().unwrap();
        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, "WATER");
        assert_eq!(records[0].date, "2024-05-24");
        assert_eq!(records[0].priority.as_deref(), Some("HIGH"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_save_replaces_the_snapshot(_ctx: &mut StoreTestContext) {
        let mut service = TaskService::new(Tasks::new().unwrap()).unwrap();
        for day in ["2024-05-24", "2024-05-25", "2024-05-26"] {
            service.add_task(&new_task(1, day, None)).unwrap();
        }

        let mut store = Tasks::new().unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
