//! Integration tests for list model mutations, selection and reordering.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use listbox::error::{CodecError, ListBoxError};
use listbox::model::{ChangeKind, ClickAction, FnCodec, ListBox};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn list(items: &[&str]) -> ListBox<String> {
    init_tracing();
    ListBox::builder()
        .initial_items(items.iter().map(|s| s.to_string()).collect())
        .build()
        .unwrap()
}

fn select_all_of(list: &mut ListBox<String>, positions: &[usize]) {
    for &pos in positions {
        list.select(pos);
    }
}

fn record_changes(list: &ListBox<String>) -> Arc<Mutex<Vec<ChangeKind>>> {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let changes_clone = changes.clone();
    list.signals().changed.connect(move |kind| {
        changes_clone.lock().push(*kind);
    });
    changes
}

// =========================================================================
// Insertion
// =========================================================================

#[test]
fn test_insert_appends_and_encodes() {
    let mut list = list(&["A", "B"]);
    assert_eq!(list.insert("C".into()).unwrap(), 3);
    assert_eq!(list.items(), ["A", "B", "C"]);
    assert_eq!(list.encoded_value(), r#"["A","B","C"]"#);
    assert_eq!(list.target_value().unwrap(), list.encoded_value());
}

#[test]
fn test_insert_at_shifts_selection() {
    let mut list = list(&["A", "B", "C"]);
    list.select(1);

    list.insert_at("X".into(), 1).unwrap();

    assert_eq!(list.items(), ["A", "X", "B", "C"]);
    assert_eq!(list.selected(), vec![2]);
    assert_eq!(list.selected_items(), vec!["B".to_string()]);
}

#[test]
fn test_insert_at_past_end_appends() {
    let mut list = list(&["A"]);
    list.insert_at("B".into(), 10).unwrap();
    assert_eq!(list.items(), ["A", "B"]);
}

#[test]
fn test_insert_at_negative_counts_from_end() {
    let mut list = list(&["A", "B", "C"]);

    list.insert_at("X".into(), -1).unwrap();
    assert_eq!(list.items(), ["A", "B", "X", "C"]);

    list.insert_at("Y".into(), -10).unwrap();
    assert_eq!(list.items(), ["Y", "A", "B", "X", "C"]);

    list.insert_multi_at(vec!["P".into(), "Q".into()], -2).unwrap();
    assert_eq!(list.items(), ["Y", "A", "B", "P", "Q", "X", "C"]);
}

#[test]
fn test_insert_multi_at() {
    let mut list = list(&["A", "D"]);
    list.select(1);

    let len = list.insert_multi_at(vec!["B".into(), "C".into()], 1).unwrap();

    assert_eq!(len, 4);
    assert_eq!(list.items(), ["A", "B", "C", "D"]);
    assert_eq!(list.selected(), vec![3]);
}

#[test]
fn test_insert_multi_empty_batch_is_noop() {
    let mut list = list(&["A"]);
    let changes = record_changes(&list);
    assert_eq!(list.insert_multi(Vec::new()).unwrap(), 1);
    assert!(changes.lock().is_empty());
}

#[test]
fn test_insert_then_remove_by_index_restores_state() {
    let mut list = list(&["A", "B", "C"]);
    select_all_of(&mut list, &[0, 2]);
    let items_before = list.to_vec();
    let selected_before = list.selected();

    list.insert_at("X".into(), 1).unwrap();
    list.remove_by_index(1).unwrap();

    assert_eq!(list.items(), items_before.as_slice());
    assert_eq!(list.selected(), selected_before);
}

// =========================================================================
// Update
// =========================================================================

#[test]
fn test_update_replaces_every_selected_item() {
    let mut list = list(&["A", "B", "C"]);
    select_all_of(&mut list, &[0, 2]);

    assert_eq!(list.update("Z".into()).unwrap(), 2);
    assert_eq!(list.items(), ["Z", "B", "Z"]);
    assert_eq!(list.selected(), vec![0, 2]);
}

#[test]
fn test_update_without_selection_is_noop() {
    let mut list = list(&["A"]);
    assert_eq!(list.update("Z".into()).unwrap(), 0);
    assert_eq!(list.items(), ["A"]);
}

#[test]
fn test_update_multi_cycles_replacements() {
    let mut list = list(&["A", "B", "C", "D"]);
    select_all_of(&mut list, &[0, 1, 3]);

    assert_eq!(list.update_multi(vec!["x".into(), "y".into()]).unwrap(), 3);
    assert_eq!(list.items(), ["x", "y", "C", "x"]);
}

#[test]
fn test_update_at_negative_and_out_of_range() {
    let mut list = list(&["A", "B", "C"]);

    assert_eq!(list.update_at("Z".into(), -1).unwrap(), Some("Z".to_string()));
    assert_eq!(list.items(), ["A", "B", "Z"]);

    assert_eq!(list.update_at("Q".into(), 3).unwrap(), None);
    assert_eq!(list.update_at("Q".into(), -4).unwrap(), None);
    assert_eq!(list.items(), ["A", "B", "Z"]);
}

// =========================================================================
// Removal
// =========================================================================

#[test]
fn test_remove_selected_items() {
    let mut list = list(&["A", "B", "C", "D"]);
    select_all_of(&mut list, &[1, 3]);

    assert_eq!(list.remove().unwrap(), 2);
    assert_eq!(list.items(), ["A", "C"]);
    assert!(list.selected().is_empty());
}

#[test]
fn test_remove_without_selection_is_noop() {
    let mut list = list(&["A", "B"]);
    let changes = record_changes(&list);
    assert_eq!(list.remove().unwrap(), 2);
    assert!(changes.lock().is_empty());
}

#[test]
fn test_remove_by_index_renumbers_selection() {
    let mut list = list(&["A", "B", "C"]);
    list.select(2);

    assert_eq!(list.remove_by_index(0).unwrap(), 2);
    assert_eq!(list.items(), ["B", "C"]);
    assert_eq!(list.selected(), vec![1]);
    assert!(list.selected().iter().all(|&pos| pos < list.len()));
}

#[test]
fn test_remove_by_index_out_of_range() {
    let mut list = list(&["A"]);
    assert_eq!(list.remove_by_index(5).unwrap(), 1);
    assert_eq!(list.remove_by_index(-2).unwrap(), 1);
    assert_eq!(list.items(), ["A"]);
}

#[test]
fn test_remove_by_index_negative_counts_from_end() {
    let mut list = list(&["A", "B", "C"]);
    list.select(2);

    assert_eq!(list.remove_by_index(-1).unwrap(), 2);
    assert_eq!(list.items(), ["A", "B"]);
    assert!(list.selected().is_empty());

    assert_eq!(list.remove_by_index(-2).unwrap(), 1);
    assert_eq!(list.items(), ["B"]);
}

#[test]
fn test_clear_and_reset() {
    let mut list = list(&["A", "B"]);
    list.insert("C".into()).unwrap();
    list.select(0);

    assert!(list.clear().unwrap());
    assert!(list.is_empty());
    assert_eq!(list.count_selected(), 0);
    assert_eq!(list.encoded_value(), "[]");

    list.insert("Q".into()).unwrap();
    assert!(list.reset().unwrap());
    assert_eq!(list.items(), ["A", "B"]);
    assert_eq!(list.encoded_value(), r#"["A","B"]"#);
}

// =========================================================================
// Reordering
// =========================================================================

#[test]
fn test_move_up_swaps_with_neighbour() {
    let mut list = list(&["A", "B", "C"]);
    list.select(1);

    assert!(list.move_up().unwrap());
    assert_eq!(list.items(), ["B", "A", "C"]);
    assert_eq!(list.selected(), vec![0]);
}

#[test]
fn test_move_up_at_front_rotates() {
    let mut list = list(&["A", "B", "C"]);
    list.select(0);

    assert!(list.move_up().unwrap());
    assert_eq!(list.items(), ["B", "C", "A"]);
    assert_eq!(list.selected(), vec![2]);
}

#[test]
fn test_move_down_at_back_rotates() {
    let mut list = list(&["A", "B", "C"]);
    list.select(2);

    assert!(list.move_down().unwrap());
    assert_eq!(list.items(), ["C", "A", "B"]);
    assert_eq!(list.selected(), vec![0]);
}

#[test]
fn test_move_adjacent_selection_as_a_block() {
    let mut list = list(&["A", "B", "C", "D"]);
    select_all_of(&mut list, &[1, 2]);

    list.move_up().unwrap();
    assert_eq!(list.items(), ["B", "C", "A", "D"]);
    assert_eq!(list.selected(), vec![0, 1]);

    list.move_down().unwrap();
    assert_eq!(list.items(), ["A", "B", "C", "D"]);
    assert_eq!(list.selected(), vec![1, 2]);
}

#[test]
fn test_move_without_selection_is_noop() {
    let mut list = list(&["A", "B"]);
    let changes = record_changes(&list);

    assert!(!list.move_up().unwrap());
    assert!(!list.move_down().unwrap());
    assert!(changes.lock().is_empty());
}

#[test]
fn test_move_up_by_index_zero_rotates_left() {
    let mut list = list(&["A", "B", "C", "D"]);
    list.select(0);

    assert!(list.move_up_by_index(0).unwrap());
    assert_eq!(list.items(), ["B", "C", "D", "A"]);
    assert_eq!(list.selected(), vec![3]);
}

#[test]
fn test_move_by_index_ignores_selection() {
    let mut list = list(&["A", "B", "C"]);
    list.select(0);

    assert!(list.move_down_by_index(1).unwrap());
    assert_eq!(list.items(), ["A", "C", "B"]);
    assert_eq!(list.selected(), vec![0]);

    assert!(!list.move_down_by_index(3).unwrap());
}

#[test]
fn test_moved_item_carries_selection() {
    let mut list = list(&["A", "B", "C"]);
    list.select(2);

    list.move_up_by_index(1).unwrap();

    assert_eq!(list.items(), ["B", "A", "C"]);
    assert_eq!(list.selected(), vec![2]);
}

// =========================================================================
// Selection
// =========================================================================

#[test]
fn test_single_select_keeps_one_position() {
    init_tracing();
    let mut list = ListBox::<String>::builder()
        .initial_items(vec!["A".into(), "B".into(), "C".into()])
        .multiselect(false)
        .build()
        .unwrap();

    list.select(0);
    list.select(2);
    assert_eq!(list.selected(), vec![2]);

    assert!(!list.select_all());
    assert!(list.count_selected() <= 1);
}

#[test]
fn test_select_bounds_and_duplicates() {
    let mut list = list(&["A", "B"]);
    assert!(list.select(1));
    assert!(!list.select(1));
    assert!(!list.select(2));
    assert!(list.deselect(1));
    assert!(!list.deselect(1));
}

#[test]
fn test_select_all_and_deselect_all() {
    let mut list = list(&["A", "B", "C"]);
    assert!(list.select_all());
    assert_eq!(list.selected(), vec![0, 1, 2]);

    list.deselect_all();
    assert_eq!(list.count_selected(), 0);
}

#[test]
fn test_disabling_multiselect_trims_selection() {
    let mut list = list(&["A", "B", "C"]);
    select_all_of(&mut list, &[1, 2]);

    list.set_multiselect(false);

    assert!(!list.is_multiselect());
    assert_eq!(list.selected(), vec![1]);
}

#[test]
fn test_selection_does_not_fire_changed() {
    let mut list = list(&["A", "B"]);
    let changes = record_changes(&list);

    list.select(0);
    list.deselect(0);
    list.select_all();

    assert!(changes.lock().is_empty());
}

#[test]
fn test_walks_visit_positions() {
    let mut list = list(&["A", "B", "C"]);
    select_all_of(&mut list, &[0, 2]);

    let mut all = Vec::new();
    list.item_walk(|item, pos| all.push(format!("{pos}:{item}")));
    assert_eq!(all, vec!["0:A", "1:B", "2:C"]);

    let mut selected = Vec::new();
    list.selected_walk(|item, pos| selected.push(format!("{pos}:{item}")));
    assert_eq!(selected, vec!["0:A", "2:C"]);
}

#[test]
fn test_click_toggles_selection() {
    let mut list = list(&["A", "B"]);

    assert_eq!(list.click(1), Some(ClickAction::Selected));
    assert!(list.is_selected(1));
    assert_eq!(list.click(1), Some(ClickAction::Deselected));
    assert!(!list.is_selected(1));
    assert_eq!(list.click(9), None);

    list.set_auto_select_on_click(false);
    assert_eq!(list.click(0), None);
    assert!(!list.is_selected(0));
}

// =========================================================================
// Encoding
// =========================================================================

#[test]
fn test_set_from_encoded_replaces_items() {
    let mut list = list(&["A"]);
    list.select(0);

    assert_eq!(list.set_from_encoded(r#"["x","y"]"#).unwrap(), 2);
    assert_eq!(list.items(), ["x", "y"]);
    assert!(list.selected().is_empty());

    assert_eq!(list.set_from_encoded("   ").unwrap(), 0);
}

#[test]
fn test_set_from_encoded_malformed() {
    let mut list = list(&["A"]);
    let err = list.set_from_encoded("[not json").unwrap_err();
    assert!(matches!(err, ListBoxError::Codec(CodecError::Json(_))));
    assert_eq!(list.items(), ["A"]);
}

#[test]
fn test_encode_failure_leaves_model_untouched() {
    init_tracing();
    let codec = FnCodec::new(
        |items: &[String]| {
            if items.iter().any(|item| item == "bad") {
                Err(CodecError::custom("unencodable item"))
            } else {
                Ok(items.join("|"))
            }
        },
        |encoded: &str| Ok(encoded.split('|').map(String::from).collect()),
    );
    let mut list = ListBox::builder_with_codec(codec)
        .initial_items(vec!["A".to_string(), "B".to_string()])
        .build()
        .unwrap();
    list.select(1);
    let changes = record_changes(&list);

    assert!(list.insert_at("bad".into(), 0).is_err());

    assert_eq!(list.items(), ["A", "B"]);
    assert_eq!(list.selected(), vec![1]);
    assert_eq!(list.encoded_value(), "A|B");
    assert!(changes.lock().is_empty());
}

#[test]
fn test_reset_encode_failure_leaves_model_untouched() {
    init_tracing();
    let failing = Arc::new(AtomicBool::new(false));
    let failing_clone = failing.clone();
    let codec = FnCodec::new(
        move |items: &[String]| {
            if failing_clone.load(Ordering::SeqCst) {
                Err(CodecError::custom("codec offline"))
            } else {
                Ok(items.join("|"))
            }
        },
        |encoded: &str| Ok(encoded.split('|').map(String::from).collect()),
    );
    let mut list = ListBox::builder_with_codec(codec)
        .initial_items(vec!["A".to_string()])
        .build()
        .unwrap();
    list.insert("B".into()).unwrap();
    list.select(1);
    let changes = record_changes(&list);

    failing.store(true, Ordering::SeqCst);
    assert!(list.reset().is_err());

    assert_eq!(list.items(), ["A", "B"]);
    assert_eq!(list.selected(), vec![1]);
    assert_eq!(list.encoded_value(), "A|B");
    assert!(changes.lock().is_empty());

    failing.store(false, Ordering::SeqCst);
    assert!(list.reset().unwrap());
    assert_eq!(list.items(), ["A"]);
    assert_eq!(*changes.lock(), vec![ChangeKind::Clear]);
}

#[test]
fn test_changed_reports_each_mutation() {
    let mut list = list(&["A", "B"]);
    let changes = record_changes(&list);

    list.insert("C".into()).unwrap();
    list.select(0);
    list.update("Z".into()).unwrap();
    list.move_down().unwrap();
    list.move_up().unwrap();
    list.remove().unwrap();
    list.clear().unwrap();

    assert_eq!(
        *changes.lock(),
        vec![
            ChangeKind::Insert,
            ChangeKind::Update,
            ChangeKind::MoveDown,
            ChangeKind::MoveUp,
            ChangeKind::Remove,
            ChangeKind::Clear,
        ]
    );
}
