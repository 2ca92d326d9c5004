use super::*;

fn items() -> Vec<PickerItem> {
    [("i1", "Fintech"), ("i2", "Healthcare"), ("i3", "Fintech Infra")]
        .into_iter()
        .map(|(id, name)| PickerItem { id: id.to_owned(), name: name.to_owned() })
        .collect()
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_sets_and_closes() {
    let mut picker = PickerState { open: true, query: "fin".to_owned(), ..PickerState::default() };
    picker.select("i1");
    assert_eq!(picker.selected.as_deref(), Some("i1"));
    assert!(!picker.open);
    assert!(picker.query.is_empty());
}

#[test]
fn reselecting_clears_selection() {
    let mut picker = PickerState::default();
    picker.select("i1");
    picker.select("i1");
    assert!(picker.selected.is_none());
}

#[test]
fn selecting_another_replaces() {
    let mut picker = PickerState::default();
    picker.select("i1");
    picker.select("i2");
    assert_eq!(picker.selected.as_deref(), Some("i2"));
}

#[test]
fn label_derives_from_selection() {
    let mut picker = PickerState::default();
    let list = items();
    assert_eq!(picker.label(Some(&list)), None);
    picker.select("i2");
    assert_eq!(picker.label(Some(&list)).as_deref(), Some("Healthcare"));
    assert_eq!(picker.label(None), None);
}

// =============================================================
// Views
// =============================================================

#[test]
fn unloaded_list_is_loading() {
    assert_eq!(PickerState::default().view(None, ListStatus::Loading), PickerView::Loading);
}

#[test]
fn list_that_never_loaded_shows_failure() {
    let mut catalog = CatalogState::default();
    let seq = catalog.begin(ListKey::Metrics);
    catalog.finish(ListKey::Metrics, seq, Err("boom".to_owned()));

    let source = PickerSource::Metrics;
    let items = source.items(&catalog);
    assert_eq!(source.status(&catalog), ListStatus::Failed);
    assert_eq!(PickerState::default().view(items.as_deref(), source.status(&catalog)), PickerView::Failed);
    assert!(catalog.needs_fetch(source.key()));

    catalog.begin(ListKey::Metrics);
    assert_eq!(PickerState::default().view(None, source.status(&catalog)), PickerView::Loading);
}

#[test]
fn empty_list_is_empty() {
    assert_eq!(PickerState::default().view(Some(&[]), ListStatus::Ready), PickerView::Empty);
}

#[test]
fn query_filters_case_insensitively() {
    let picker = PickerState { query: "FINTECH".to_owned(), ..PickerState::default() };
    match picker.view(Some(&items()), ListStatus::Ready) {
        PickerView::Items(found) => {
            let ids: Vec<&str> = found.iter().map(|i| i.id.as_str()).collect();
            assert_eq!(ids, vec!["i1", "i3"]);
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn query_without_matches_is_empty() {
    let picker = PickerState { query: "mining".to_owned(), ..PickerState::default() };
    assert_eq!(picker.view(Some(&items()), ListStatus::Ready), PickerView::Empty);
}

#[test]
fn source_texts() {
    assert_eq!(PickerSource::Locations.empty_text(), "No location found.");
    assert_eq!(PickerSource::Metrics.placeholder(), "Select metric");
    assert_eq!(PickerSource::Industries.error_text(), "There was an error fetching the industries.");
    assert_eq!(PickerSource::Industries.key(), ListKey::Industries);
}

#[test]
fn source_items_follow_catalog() {
    let mut catalog = CatalogState::default();
    assert!(PickerSource::Industries.items(&catalog).is_none());
    let seq = catalog.begin(ListKey::Industries);
    let payload = schema::ListPayload::decode(ListKey::Industries, r#"[{"id":"i9","name":"Energy"}]"#)
        .expect("decode");
    catalog.finish(ListKey::Industries, seq, Ok(payload));
    let found = PickerSource::Industries.items(&catalog).expect("loaded");
    assert_eq!(found, vec![PickerItem { id: "i9".to_owned(), name: "Energy".to_owned() }]);
}
