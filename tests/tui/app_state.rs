//! Integration tests for App state transitions driven by input events.

use autoleadgen::model::{demo_drafts, Tab};
use autoleadgen::tui::app::App;
use autoleadgen::tui::events::{apply_event, translate_key, InputEvent};
use autoleadgen::{StoreEvent, ViewStateStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut App, code: KeyCode) {
    let ev = translate_key(KeyEvent::new(code, KeyModifiers::NONE));
    let _ = apply_event(app, ev);
}

#[test]
fn test_number_keys_visit_every_tab() {
    let mut app = App::new(ViewStateStore::seeded());
    for (i, c) in ['1', '2', '3', '4', '5'].into_iter().enumerate() {
        press(&mut app, KeyCode::Char(c));
        assert_eq!(app.store.active_tab(), Tab::ALL[i]);
    }
}

#[test]
fn test_tab_key_cycles_and_wraps() {
    let mut app = App::new(ViewStateStore::seeded());
    for _ in 0..Tab::ALL.len() {
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(app.store.active_tab(), Tab::Dashboard);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.store.active_tab(), Tab::Settings);
}

#[test]
fn test_tab_selection_leaves_data_untouched() {
    let mut app = App::new(ViewStateStore::seeded());
    let leads_before = app.store.leads().to_vec();
    let clients_before = app.store.clients().to_vec();

    for tab in Tab::ALL {
        app.select_tab(tab);
    }

    assert_eq!(app.store.leads(), leads_before.as_slice());
    assert_eq!(app.store.clients(), clients_before.as_slice());
    assert!(!app.store.is_generating());
}

#[test]
fn test_selecting_same_tab_is_idempotent() {
    let mut app = App::new(ViewStateStore::seeded());
    app.select_tab(Tab::Analytics);
    app.select_tab(Tab::Analytics);
    assert_eq!(app.store.active_tab(), Tab::Analytics);
}

#[test]
fn test_popup_swallows_next_key() {
    let mut app = App::new(ViewStateStore::seeded());
    let ticket = app.request_generation().expect("test: ticket");
    app.finish_generation(ticket, demo_drafts());
    app.drain_events();
    assert!(app.notification.is_some());

    // The key that closes the popup does not also switch tabs.
    press(&mut app, KeyCode::Char('3'));
    assert!(app.notification.is_none());
    assert_eq!(app.store.active_tab(), Tab::Dashboard);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.store.active_tab(), Tab::Clients);
}

#[test]
fn test_ctrl_c_quits_through_popup() {
    let mut app = App::new(ViewStateStore::seeded());
    app.show_help = true;
    let ev = translate_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(ev, InputEvent::ForceQuit);
    apply_event(&mut app, ev);
    assert!(app.should_quit);
}

#[test]
fn test_lead_selection_tracks_row_after_generation() {
    let mut app = App::new(ViewStateStore::seeded());
    app.select_tab(Tab::Leads);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.lead_selected, 2);
    let highlighted = app.store.leads()[2].id;

    let ticket = app.request_generation().expect("test: ticket");
    app.finish_generation(ticket, demo_drafts());

    assert_eq!(app.store.leads()[app.lead_selected].id, highlighted);
}

#[test]
fn test_lead_selection_clamped_to_table() {
    let mut app = App::new(ViewStateStore::seeded());
    for _ in 0..20 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.lead_selected, 4);
    for _ in 0..20 {
        press(&mut app, KeyCode::Up);
    }
    assert_eq!(app.lead_selected, 0);
}

#[test]
fn test_store_events_visible_to_extra_subscribers() {
    let mut app = App::new(ViewStateStore::seeded());
    let mut rx = app.store.subscribe();

    press(&mut app, KeyCode::Char('2'));
    let ticket = app.request_generation().expect("test: ticket");
    app.finish_generation(ticket, demo_drafts());

    assert_eq!(rx.try_recv().ok(), Some(StoreEvent::TabSelected(Tab::Leads)));
    assert_eq!(rx.try_recv().ok(), Some(StoreEvent::GenerationStarted));
    assert_eq!(
        rx.try_recv().ok(),
        Some(StoreEvent::LeadsGenerated { count: 2 })
    );
}
