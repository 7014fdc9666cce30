use ticklist_core::{
    MemoryTaskStore, RegistryError, Task, TaskRegistry, TaskStore, TaskView, CHECKED_MARKER,
};

fn fixture(id: i64, title: &str, checked: bool) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        checked,
        created_at: "Mon Aug 24 2026".to_string(),
        completed_at: checked.then(|| "Tue Aug 25 2026".to_string()),
    }
}

fn seeded_view(tasks: &[Task]) -> TaskView<MemoryTaskStore> {
    let registry = TaskRegistry::new(MemoryTaskStore::new());
    registry.store().save(tasks).unwrap();
    TaskView::new(registry)
}

#[test]
fn render_all_builds_one_row_per_task_in_collection_order() {
    let mut view = seeded_view(&[fixture(1, "open", false), fixture(2, "done", true)]);

    view.render_all().unwrap();

    let rows = view.rows();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].title, "open");
    assert_eq!(rows[0].created_label, "Created at: Mon Aug 24 2026");
    assert_eq!(rows[0].completed_label, None);
    assert_eq!(rows[0].marker_class(), None);

    assert_eq!(rows[1].id, 2);
    assert_eq!(
        rows[1].completed_label.as_deref(),
        Some("Completed at: Tue Aug 25 2026")
    );
    assert_eq!(rows[1].marker_class(), Some(CHECKED_MARKER));
}

#[test]
fn render_all_releases_the_previous_reorder_binding() {
    let mut view = seeded_view(&[fixture(1, "a", false)]);

    view.render_all().unwrap();
    let first = view.binding_generation().unwrap();

    view.render_all().unwrap();
    let second = view.binding_generation().unwrap();

    // A fresh binding per render; the old generation is gone.
    assert_ne!(first, second);
}

#[test]
fn create_task_re_renders_with_the_new_row() {
    let mut view = seeded_view(&[]);
    view.render_all().unwrap();
    assert!(view.rows().is_empty());

    view.create_task("Buy milk", "2%").unwrap();

    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.rows()[0].title, "Buy milk");
}

#[test]
fn create_task_with_empty_input_leaves_rows_untouched() {
    let mut view = seeded_view(&[fixture(1, "kept", false)]);
    view.render_all().unwrap();

    let err = view.create_task("", "desc").unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));

    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.registry().tasks().unwrap().len(), 1);
}

#[test]
fn toggle_checked_re_renders_with_marker_applied() {
    let mut view = seeded_view(&[fixture(1, "toggle", false)]);
    view.render_all().unwrap();

    view.toggle_checked(1, true).unwrap();
    assert_eq!(view.rows()[0].marker_class(), Some(CHECKED_MARKER));
    assert!(view.rows()[0].completed_label.is_some());

    view.toggle_checked(1, false).unwrap();
    assert_eq!(view.rows()[0].marker_class(), None);
    assert_eq!(view.rows()[0].completed_label, None);
}

#[test]
fn delete_handlers_re_render_the_remaining_rows() {
    let mut view = seeded_view(&[
        fixture(1, "a", false),
        fixture(2, "b", true),
        fixture(3, "c", true),
    ]);
    view.render_all().unwrap();

    view.delete_task(1).unwrap();
    assert_eq!(view.rows().len(), 2);

    view.delete_checked().unwrap();
    assert!(view.rows().is_empty());
}

#[test]
fn complete_drop_persists_order_without_a_re_render() {
    let mut view = seeded_view(&[fixture(1, "a", false), fixture(2, "b", false), fixture(3, "c", false)]);
    view.render_all().unwrap();
    let binding_before = view.binding_generation();

    view.complete_drop(&[3, 1, 2]).unwrap();

    // Rows resequenced in place, binding untouched: no re-render happened.
    let row_ids: Vec<i64> = view.rows().iter().map(|row| row.id).collect();
    assert_eq!(row_ids, vec![3, 1, 2]);
    assert_eq!(view.binding_generation(), binding_before);

    let stored_ids: Vec<i64> = view
        .registry()
        .tasks()
        .unwrap()
        .iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(stored_ids, vec![3, 1, 2]);
}

#[test]
fn complete_drop_filters_ids_no_longer_present() {
    let mut view = seeded_view(&[fixture(1, "a", false), fixture(2, "b", false)]);
    view.render_all().unwrap();

    // Id 7 vanished between render and drop; it is dropped from both the
    // persisted collection and the rows.
    view.complete_drop(&[2, 7, 1]).unwrap();

    let row_ids: Vec<i64> = view.rows().iter().map(|row| row.id).collect();
    assert_eq!(row_ids, vec![2, 1]);
    assert_eq!(view.registry().tasks().unwrap().len(), 2);
}
