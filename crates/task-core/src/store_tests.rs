//! Task Store Scenario Tests
//!
//! Ordering, identity and finality properties of the store.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io;
    use std::sync::{Arc, Mutex};

    use rstest::rstest;

    use crate::domain::{Priority, TaskDraft, TaskId};
    use crate::store::TaskStore;

    fn titles(store: &TaskStore) -> Vec<&str> {
        store.list().iter().map(|t| t.title.as_str()).collect()
    }

    fn assert_sorted(store: &TaskStore) {
        let ranks: Vec<u8> = store.list().iter().map(|t| t.priority.rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", ranks);
    }

    #[test]
    fn test_high_sorts_before_low() {
        let mut store = TaskStore::new();
        store.create(TaskDraft::new("Buy milk", "", Priority::Low)).unwrap();
        store.create(TaskDraft::new("Fix bug", "", Priority::High)).unwrap();

        assert_eq!(titles(&store), vec!["Fix bug", "Buy milk"]);
        assert_eq!(store.list()[0].priority, Priority::High);
        assert_eq!(store.list()[1].priority, Priority::Low);
    }

    #[test]
    fn test_equal_priority_keeps_insertion_order() {
        let mut store = TaskStore::new();
        store.create(TaskDraft::new("A", "", Priority::Medium)).unwrap();
        store.create(TaskDraft::new("B", "", Priority::Medium)).unwrap();

        assert_eq!(titles(&store), vec!["A", "B"]);
    }

    #[test]
    fn test_update_replaces_all_fields_but_id() {
        let mut store = TaskStore::new();
        let x = store.create(TaskDraft::new("A", "old", Priority::High)).unwrap();

        let mut task = store.get(x).cloned().unwrap();
        task.title = "A2".to_string();
        task.description = String::new();
        task.priority = Priority::Low;
        assert!(store.update(task));

        assert_eq!(store.len(), 1);
        let only = &store.list()[0];
        assert_eq!(only.id, x);
        assert_eq!(only.title, "A2");
        assert_eq!(only.priority, Priority::Low);
    }

    #[test]
    fn test_update_resorts() {
        let mut store = TaskStore::new();
        let a = store.create(TaskDraft::new("A", "", Priority::High)).unwrap();
        store.create(TaskDraft::new("B", "", Priority::Medium)).unwrap();
        store.create(TaskDraft::new("C", "", Priority::Low)).unwrap();

        let mut task = store.get(a).cloned().unwrap();
        task.priority = Priority::Low;
        store.update(task);

        // A keeps its slot ahead of C among the Low tasks
        assert_eq!(titles(&store), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        let id = store.create(TaskDraft::new("A", "", Priority::High)).unwrap();
        let mut ghost = store.get(id).cloned().unwrap();
        ghost.id = TaskId::new(999);
        ghost.title = "Ghost".to_string();

        let before = store.clone();
        assert!(!store.update(ghost));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_twice_same_as_once() {
        let mut store = TaskStore::new();
        let a = store.create(TaskDraft::new("A", "", Priority::High)).unwrap();
        store.create(TaskDraft::new("B", "", Priority::Medium)).unwrap();

        let mut task = store.get(a).cloned().unwrap();
        task.priority = Priority::Medium;

        store.update(task.clone());
        let once = store.clone();
        store.update(task);
        assert_eq!(store, once);
    }

    #[test]
    fn test_delete_is_final() {
        let mut store = TaskStore::new();
        let a = store.create(TaskDraft::new("A", "", Priority::High)).unwrap();
        store.create(TaskDraft::new("B", "", Priority::Low)).unwrap();

        assert!(store.delete(a));
        assert!(store.list().iter().all(|t| t.id != a));
        assert!(!store.delete(a));
        assert_eq!(titles(&store), vec!["B"]);
    }

    #[test]
    fn test_delete_nonexistent_leaves_list_unchanged() {
        let mut store = TaskStore::new();
        store.create(TaskDraft::new("A", "", Priority::High)).unwrap();
        store.create(TaskDraft::new("B", "", Priority::Low)).unwrap();

        let before = store.list().to_vec();
        assert!(!store.delete(TaskId::new(999)));
        assert_eq!(store.list(), before.as_slice());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_title_rejected(#[case] title: &str) {
        let mut store = TaskStore::new();
        let result = store.create(TaskDraft::new(title, "some text", Priority::High));
        assert_eq!(result, Err(crate::domain::DomainError::EmptyTitle));
        assert!(store.is_empty());
    }

    #[test]
    fn test_rapid_creation_yields_unique_ids() {
        let mut store = TaskStore::new();
        let ids: HashSet<TaskId> = (0..1000)
            .map(|i| store.create(TaskDraft::new(format!("t{}", i), "", Priority::Medium)).unwrap())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_sorted_after_mixed_operations() {
        let mut store = TaskStore::new();
        let mut ids = Vec::new();
        for i in 0..30 {
            let priority = Priority::ALL[(i * 7) % 3];
            ids.push(store.create(TaskDraft::new(format!("t{}", i), "", priority)).unwrap());
            assert_sorted(&store);
        }
        for (i, id) in ids.iter().enumerate().step_by(4) {
            let mut task = store.get(*id).cloned().unwrap();
            task.priority = Priority::ALL[i % 3];
            store.update(task);
            assert_sorted(&store);
        }
        for id in ids.iter().step_by(5) {
            store.delete(*id);
            assert_sorted(&store);
        }
    }

    #[test]
    fn test_ties_follow_creation_order_across_priorities() {
        let mut store = TaskStore::new();
        store.create(TaskDraft::new("L1", "", Priority::Low)).unwrap();
        store.create(TaskDraft::new("M1", "", Priority::Medium)).unwrap();
        store.create(TaskDraft::new("L2", "", Priority::Low)).unwrap();
        store.create(TaskDraft::new("H1", "", Priority::High)).unwrap();
        store.create(TaskDraft::new("M2", "", Priority::Medium)).unwrap();

        assert_eq!(titles(&store), vec!["H1", "M1", "M2", "L1", "L2"]);
    }

    #[test]
    fn test_task_serializes_for_host() {
        let mut store = TaskStore::new();
        let id = store.create(TaskDraft::new("Ship", "v1", Priority::High)).unwrap();
        let json = serde_json::to_value(store.get(id).unwrap()).unwrap();
        assert_eq!(json["title"], "Ship");
        assert_eq!(json["priority"], "High");
        assert_eq!(json["id"], id.get());
    }

    /// Collects formatted tracing output in memory
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_mutations_emit_tracing_events() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut store = TaskStore::new();
            let id = store.create(TaskDraft::new("Logged", "", Priority::Low)).unwrap();
            let _ = store.create(TaskDraft::new("  ", "", Priority::Low));
            store.delete(id);
        });

        let text = log.text();
        assert!(text.contains("task created"), "missing create event: {}", text);
        assert!(text.contains("WARN"), "missing warning: {}", text);
        assert!(text.contains("rejected task with blank title"), "{}", text);
        assert!(text.contains("task deleted"), "{}", text);
    }
}
