//! End-to-end generation round trip under paused tokio time.
//!
//! Drives the same path as the binary: key press -> ticket -> spawned lead
//! fetch -> `finish_generation` -> notification.

use std::sync::Arc;
use std::time::Duration;

use autoleadgen::model::Tab;
use autoleadgen::tui::app::App;
use autoleadgen::tui::events::{apply_event, InputEvent};
use autoleadgen::{DemoLeadSource, LeadSource, ViewStateStore};

use super::buffer_text;

#[tokio::test(start_paused = true)]
async fn test_generation_window_then_completion() {
    let source: Arc<dyn LeadSource> = Arc::new(DemoLeadSource::new());
    let mut app = App::new(ViewStateStore::seeded());

    let ticket = apply_event(&mut app, InputEvent::Generate).expect("test: ticket issued");
    assert!(app.store.is_generating());

    let fetch = {
        let source = Arc::clone(&source);
        tokio::spawn(async move { source.fetch_leads().await })
    };

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(!fetch.is_finished());
    assert!(app.store.is_generating());
    assert_eq!(app.store.leads().len(), 5);

    let drafts = fetch.await.expect("test: fetch task");
    app.finish_generation(ticket, drafts);
    app.drain_events();

    assert!(!app.store.is_generating());
    let leads = app.store.leads();
    assert_eq!(leads.len(), 7);
    assert_eq!(leads[0].name, "BuildCorp");
    assert_eq!(leads[0].id, 6);
    assert_eq!(leads[1].name, "HealthTech Pro");
    assert_eq!(leads[1].id, 7);
    assert_eq!(leads[2].name, "TechStart Inc");
    assert_eq!(app.store.leads_this_week(), 1);

    let notification = app.notification.as_ref().expect("test: notification");
    assert!(notification.message.contains("2 new high-quality leads generated!"));
}

#[tokio::test(start_paused = true)]
async fn test_generate_ignored_while_in_flight() {
    let mut app = App::new(ViewStateStore::seeded());

    let first = apply_event(&mut app, InputEvent::Generate);
    assert!(first.is_some());
    let second = apply_event(&mut app, InputEvent::Generate);
    assert!(second.is_none());
    assert_eq!(app.store.leads().len(), 5);

    let drafts = DemoLeadSource::with_delay(Duration::from_millis(10))
        .fetch_leads()
        .await;
    app.finish_generation(first.expect("test: first ticket"), drafts);
    assert_eq!(app.store.leads().len(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_repeated_rounds_assign_unique_ids() {
    let source = DemoLeadSource::with_delay(Duration::from_millis(5));
    let mut app = App::new(ViewStateStore::seeded());

    for _ in 0..4 {
        let ticket = app.request_generation().expect("test: ticket");
        let drafts = source.fetch_leads().await;
        app.finish_generation(ticket, drafts);
        app.drain_events();
        app.dismiss();
    }

    let mut ids: Vec<u64> = app.store.leads().iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), 13);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 13);
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_shows_generating_label_during_round() {
    let mut app = App::new(ViewStateStore::seeded());
    app.select_tab(Tab::Dashboard);
    let ticket = app.request_generation().expect("test: ticket");

    let text = buffer_text(&app, 120, 40);
    assert!(text.contains("Generating..."));

    let drafts = DemoLeadSource::with_delay(Duration::from_millis(1))
        .fetch_leads()
        .await;
    app.finish_generation(ticket, drafts);
    app.dismiss();

    let text = buffer_text(&app, 120, 40);
    assert!(!text.contains("Generating..."));
    assert!(text.contains("+1 this week"));
}

#[tokio::test(start_paused = true)]
async fn test_tab_switch_during_round_keeps_result() {
    let mut app = App::new(ViewStateStore::seeded());
    let ticket = apply_event(&mut app, InputEvent::Generate).expect("test: ticket");

    apply_event(&mut app, InputEvent::SelectTab(Tab::Clients));
    assert_eq!(app.store.active_tab(), Tab::Clients);

    let drafts = DemoLeadSource::new().fetch_leads().await;
    app.finish_generation(ticket, drafts);
    app.drain_events();

    assert_eq!(app.store.active_tab(), Tab::Clients);
    assert_eq!(app.store.leads().len(), 7);
    assert!(app.notification.is_some());
    assert_eq!(app.store.clients().len(), 3);
}
