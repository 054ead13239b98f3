#[cfg(test)]
mod tests {
    use frond::db::care_logs::{CareLog, CareLogs};
    use frond::db::tasks::Tasks;
    use frond::libs::care_date::CareDate;
    use frond::libs::export::{ExportFormat, ExportTarget, Exporter};
    use frond::libs::task::{NewTask, TaskKind};
    use frond::libs::task_service::TaskService;
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { _temp_dir: temp_dir }
        }
    }

    fn seed_task() {
        let mut service = TaskService::new(Tasks::new().unwrap()).unwrap();
        service
            .add_task(&NewTask {
                plant_id: 1,
                kind: "WATER".to_string(),
                date: "2024-05-24".to_string(),
                note: Some("Needs approx 500ml".to_string()),
                priority: Some("MEDIUM".to_string()),
            })
            .unwrap();
    }

    #[test_context(ExportTestContext)]
    #[test]
    #[serial]
    fn test_export_tasks_csv(ctx: &mut ExportTestContext) {
        seed_task();
        let output = ctx._temp_dir.path().join("tasks.csv");

        Exporter::new(ExportFormat::Csv, ExportTarget::Tasks, Some(output.clone()))
            .export(ExportTarget::Tasks)
            .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "id,plant_id,kind,date,completed,priority,note");
        let row = lines.next().unwrap();
        assert!(row.contains("WATER"));
        assert!(row.contains("2024-05-24"));
        assert!(row.contains("Needs approx 500ml"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    #[serial]
    fn test_export_tasks_json(ctx: &mut ExportTestContext) {
        seed_task();
        let output = ctx._temp_dir.path().join("tasks.json");

        Exporter::new(ExportFormat::Json, ExportTarget::Tasks, Some(output.clone()))
            .export(ExportTarget::Tasks)
            .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 1);
        assert_eq!(rows[0]["kind"], "WATER");
        assert_eq!(rows[0]["date"], "2024-05-24");
        assert_eq!(rows[0]["completed"], false);
    }

    #[test_context(ExportTestContext)]
    #[test]
    #[serial]
    fn test_export_logs_csv(ctx: &mut ExportTestContext) {
        CareLogs::new()
            .unwrap()
            .insert(&CareLog::new(
                3,
                CareDate::from_ymd(2024, 5, 24).unwrap(),
                TaskKind::Fertilize,
                Some("Half strength".to_string()),
            ))
            .unwrap();
        let output = ctx._temp_dir.path().join("logs.csv");

        Exporter::new(ExportFormat::Csv, ExportTarget::Logs, Some(output.clone()))
            .export(ExportTarget::Logs)
            .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("date,plant_id,action,note"));
        assert!(content.contains("FERTILIZE"));
        assert!(content.contains("Half strength"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    #[serial]
    fn test_export_with_nothing_to_export_writes_no_file(ctx: &mut ExportTestContext) {
        let output = ctx._temp_dir.path().join("empty.csv");

        Exporter::new(ExportFormat::Csv, ExportTarget::Tasks, Some(output.clone()))
            .export(ExportTarget::Tasks)
            .unwrap();

        assert!(!output.exists());
    }
}
