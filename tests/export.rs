#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tama::db::tasks::Tasks;
    use tama::libs::export::{ExportFormat, ExportTask, Exporter};
    use tama::libs::task::{Priority, Status, Task, TaskFilter, TaskSort};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl ExportTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("tama.db")
        }

        fn out_path(&self, name: &str) -> PathBuf {
            self.temp_dir.path().join(name)
        }
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn seed(tasks: &mut Tasks) -> Vec<Task> {
        let due = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        tasks.create(&Task::new("Pack boxes", "garage first", Priority::High, Some(due))).unwrap();
        let done = tasks.create(&Task::new("Order labels", "", Priority::Low, None)).unwrap();
        tasks.set_status(done.id.unwrap(), Status::Done).unwrap();

        tasks.list(&TaskFilter::default(), TaskSort::default(), None).unwrap()
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export_writes_header_and_rows(ctx: &mut ExportTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        let all = seed(&mut tasks);

        let out = ctx.out_path("tasks.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(out.clone()));
        let written = exporter.export(&all).unwrap();
        assert_eq!(written, out);

        let contents = std::fs::read_to_string(&out).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,title,description,priority,status,due_date,created_at,completed_at"
        );
        assert_eq!(lines.clone().count(), 2);
        assert!(contents.contains("Pack boxes"));
        assert!(contents.contains("garage first"));
        assert!(contents.contains("2026-04-01"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_roundtrips(ctx: &mut ExportTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        let all = seed(&mut tasks);

        let out = ctx.out_path("tasks.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(out.clone()));
        exporter.export(&all).unwrap();

        let contents = std::fs::read_to_string(&out).unwrap();
        let records: Vec<ExportTask> = serde_json::from_str(&contents).unwrap();

        assert_eq!(records.len(), 2);
        let labels = records.iter().find(|r| r.title == "Order labels").unwrap();
        assert_eq!(labels.status, "done");
        assert_eq!(labels.due_date, "");
        assert!(!labels.completed_at.is_empty());
    }
}
