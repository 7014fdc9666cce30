use ticklist_core::{MemoryTaskStore, Task, TaskId, TaskRegistry, TaskStore};

fn fixture(id: i64, title: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        checked: false,
        created_at: "Mon Aug 24 2026".to_string(),
        completed_at: None,
    }
}

fn seeded_registry(tasks: &[Task]) -> TaskRegistry<MemoryTaskStore> {
    let registry = TaskRegistry::new(MemoryTaskStore::new());
    registry.store().save(tasks).unwrap();
    registry
}

fn ids(registry: &TaskRegistry<MemoryTaskStore>) -> Vec<TaskId> {
    registry
        .tasks()
        .unwrap()
        .iter()
        .map(|task| task.id)
        .collect()
}

#[test]
fn reorder_applies_the_given_id_order() {
    let registry = seeded_registry(&[fixture(1, "a"), fixture(2, "b"), fixture(3, "c")]);

    registry.reorder(&[3, 1, 2]).unwrap();

    assert_eq!(ids(&registry), vec![3, 1, 2]);
    let tasks = registry.tasks().unwrap();
    assert_eq!(tasks[0].title, "c");
    assert_eq!(tasks[1].title, "a");
    assert_eq!(tasks[2].title, "b");
}

#[test]
fn reorder_silently_drops_unknown_ids() {
    let registry = seeded_registry(&[fixture(1, "a"), fixture(2, "b"), fixture(3, "c")]);

    registry.reorder(&[2, 99, 3, 1]).unwrap();

    assert_eq!(ids(&registry), vec![2, 3, 1]);
}

#[test]
fn reorder_drops_tasks_missing_from_the_order() {
    let registry = seeded_registry(&[fixture(1, "a"), fixture(2, "b"), fixture(3, "c")]);

    registry.reorder(&[3, 1]).unwrap();

    assert_eq!(ids(&registry), vec![3, 1]);
}

#[test]
fn reorder_ignores_duplicate_id_mentions() {
    let registry = seeded_registry(&[fixture(1, "a"), fixture(2, "b")]);

    registry.reorder(&[2, 2, 1]).unwrap();

    assert_eq!(ids(&registry), vec![2, 1]);
}

#[test]
fn reorder_of_empty_order_empties_the_collection() {
    let registry = seeded_registry(&[fixture(1, "a")]);

    registry.reorder(&[]).unwrap();

    assert!(registry.tasks().unwrap().is_empty());
}
