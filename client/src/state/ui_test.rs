use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(state.open_sheet.is_none());
    assert!(state.selected_company.is_none());
    assert!(!state.snapshot_dialog_open);
    assert_eq!(state.home_tab, HomeTab::Login);
}

#[test]
fn open_replaces_current_sheet() {
    let mut state = UiState::default();
    state.open(Sheet::Company);
    state.open(Sheet::Industry);
    assert_eq!(state.open_sheet, Some(Sheet::Industry));
    state.close_sheet();
    assert!(state.open_sheet.is_none());
}

#[test]
fn selecting_other_company_closes_snapshot_dialog() {
    let mut state = UiState::default();
    state.select_company("c1");
    state.snapshot_dialog_open = true;
    state.select_company("c1");
    assert!(state.snapshot_dialog_open);
    state.select_company("c2");
    assert!(!state.snapshot_dialog_open);
    assert_eq!(state.selected_company.as_deref(), Some("c2"));
}

#[test]
fn logout_reset_keeps_home_tab() {
    let mut state = UiState { home_tab: HomeTab::Register, ..UiState::default() };
    state.open(Sheet::Location);
    state.select_company("c1");
    state.reset_for_logout();
    assert!(state.open_sheet.is_none());
    assert!(state.selected_company.is_none());
    assert_eq!(state.home_tab, HomeTab::Register);
}

#[test]
fn sheet_texts() {
    assert_eq!(Sheet::Company.title(), "Add a new Company");
    assert_eq!(Sheet::ALL.map(Sheet::label), ["Company", "Location", "Industry"]);
}
