#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tama::db::tasks::Tasks;
    use tama::libs::task::{Priority, SortKey, SortOrder, Status, Task, TaskFilter, TaskSort};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FilterTestContext {
        temp_dir: TempDir,
    }

    impl FilterTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("tama.db")
        }
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            FilterTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Five tasks with distinct priorities, due dates and statuses:
    /// 1 Pay rent        high    due 2026-01-05
    /// 2 Buy groceries   medium  due 2026-01-10
    /// 3 Call dentist    low     due 2026-02-01  (done)
    /// 4 Read book       low     no due date
    /// 5 Plan trip       medium  no due date     (done)
    fn seed(tasks: &mut Tasks) {
        tasks.create(&Task::new("Pay rent", "transfer before the 5th", Priority::High, Some(date(2026, 1, 5)))).unwrap();
        tasks.create(&Task::new("Buy groceries", "milk and bread", Priority::Medium, Some(date(2026, 1, 10)))).unwrap();
        let done = tasks.create(&Task::new("Call dentist", "", Priority::Low, Some(date(2026, 2, 1)))).unwrap();
        tasks.set_status(done.id.unwrap(), Status::Done).unwrap();
        tasks.create(&Task::new("Read book", "the Rust one", Priority::Low, None)).unwrap();
        let planned = tasks.create(&Task::new("Plan trip", "BOOK hotel", Priority::Medium, None)).unwrap();
        tasks.set_status(planned.id.unwrap(), Status::Done).unwrap();
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_status_filter_is_exact(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        seed(&mut tasks);

        let filter = TaskFilter {
            status: Some(Status::Done),
            ..Default::default()
        };
        let done = tasks.list(&filter, TaskSort::default(), None).unwrap();

        assert_eq!(done.len(), 2);
        assert!(done.iter().all(|t| t.status == Status::Done));

        let filter = TaskFilter {
            status: Some(Status::Todo),
            ..Default::default()
        };
        let todo = tasks.list(&filter, TaskSort::default(), None).unwrap();

        assert_eq!(todo.len(), 3);
        assert!(todo.iter().all(|t| t.status == Status::Todo));
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_priority_filter(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        seed(&mut tasks);

        let filter = TaskFilter {
            priority: Some(Priority::Low),
            ..Default::default()
        };
        let low = tasks.list(&filter, TaskSort::default(), None).unwrap();

        assert_eq!(low.len(), 2);
        assert!(low.iter().all(|t| t.priority == Priority::Low));
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_due_date_bounds_are_inclusive(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        seed(&mut tasks);

        let filter = TaskFilter {
            due_before: Some(date(2026, 1, 10)),
            ..Default::default()
        };
        let due_soon = tasks.list(&filter, TaskSort::new(SortKey::Due), None).unwrap();
        assert_eq!(titles(&due_soon), vec!["Pay rent", "Buy groceries"]);

        let filter = TaskFilter {
            due_after: Some(date(2026, 1, 10)),
            ..Default::default()
        };
        let due_later = tasks.list(&filter, TaskSort::new(SortKey::Due), None).unwrap();
        assert_eq!(titles(&due_later), vec!["Buy groceries", "Call dentist"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_is_case_insensitive_across_title_and_description(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        seed(&mut tasks);

        // "book" appears in a title ("Read book") and a description ("BOOK hotel")
        let filter = TaskFilter {
            search: Some("book".to_string()),
            ..Default::default()
        };
        let found = tasks.list(&filter, TaskSort::with_order(SortKey::Created, SortOrder::Asc), None).unwrap();

        assert_eq!(titles(&found), vec!["Read book", "Plan trip"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filters_combine_as_conjunction(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        seed(&mut tasks);

        let filter = TaskFilter {
            status: Some(Status::Done),
            priority: Some(Priority::Medium),
            ..Default::default()
        };
        let found = tasks.list(&filter, TaskSort::default(), None).unwrap();

        assert_eq!(titles(&found), vec!["Plan trip"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_due_sort_places_dateless_tasks_last_in_both_directions(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        seed(&mut tasks);

        let asc = tasks.list(&TaskFilter::default(), TaskSort::with_order(SortKey::Due, SortOrder::Asc), None).unwrap();
        assert_eq!(titles(&asc), vec!["Pay rent", "Buy groceries", "Call dentist", "Read book", "Plan trip"]);

        let desc = tasks.list(&TaskFilter::default(), TaskSort::with_order(SortKey::Due, SortOrder::Desc), None).unwrap();
        assert_eq!(titles(&desc), vec!["Call dentist", "Buy groceries", "Pay rent", "Plan trip", "Read book"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_priority_sort_runs_high_to_low_ascending(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        seed(&mut tasks);

        let asc = tasks.list(&TaskFilter::default(), TaskSort::with_order(SortKey::Priority, SortOrder::Asc), None).unwrap();
        let priorities: Vec<Priority> = asc.iter().map(|t| t.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Medium, Priority::Low, Priority::Low]
        );

        let desc = tasks.list(&TaskFilter::default(), TaskSort::with_order(SortKey::Priority, SortOrder::Desc), None).unwrap();
        assert_eq!(desc.first().unwrap().priority, Priority::Low);
        assert_eq!(desc.last().unwrap().priority, Priority::High);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_default_sort_is_newest_first(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        seed(&mut tasks);

        let found = tasks.list(&TaskFilter::default(), TaskSort::default(), None).unwrap();

        let ids: Vec<i64> = found.iter().map(|t| t.id.unwrap()).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_limit_caps_the_result(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();
        seed(&mut tasks);

        let found = tasks.list(&TaskFilter::default(), TaskSort::with_order(SortKey::Created, SortOrder::Asc), Some(2)).unwrap();

        assert_eq!(titles(&found), vec!["Pay rent", "Buy groceries"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_list_on_empty_store_is_empty(ctx: &mut FilterTestContext) {
        let mut tasks = Tasks::new(&ctx.db_path()).unwrap();

        let found = tasks.list(&TaskFilter::default(), TaskSort::default(), None).unwrap();

        assert!(found.is_empty());
    }
}
