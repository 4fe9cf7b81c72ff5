//! Full-frame rendering tests: one section per tab, popups on top.

use autoleadgen::config::DisplayConfig;
use autoleadgen::model::{demo_drafts, Tab};
use autoleadgen::tui::app::{App, MIN_COLS, MIN_ROWS};
use autoleadgen::tui::widgets::settings::NEXT_STEPS;
use autoleadgen::tui::events::{apply_event, InputEvent};
use autoleadgen::ViewStateStore;

use super::buffer_text;

const HEADINGS: [(Tab, &str); 5] = [
    (Tab::Dashboard, "Revenue Dashboard"),
    (Tab::Leads, "Lead Pipeline"),
    (Tab::Clients, "Client Management"),
    (Tab::Analytics, "Revenue Analytics"),
    (Tab::Settings, "Platform Settings"),
];

fn app_on(tab: Tab) -> App {
    let mut app = App::new(ViewStateStore::seeded());
    app.select_tab(tab);
    app
}

#[test]
fn test_exactly_one_section_rendered_per_tab() {
    for (tab, heading) in HEADINGS {
        let text = buffer_text(&app_on(tab), 120, 40);
        assert!(text.contains(heading), "{tab:?} should show {heading}");
        for (other, other_heading) in HEADINGS {
            if other != tab {
                assert!(
                    !text.contains(other_heading),
                    "{tab:?} must not show {other_heading}"
                );
            }
        }
    }
}

#[test]
fn test_tab_bar_lists_all_tabs_in_order() {
    let text = buffer_text(&app_on(Tab::Dashboard), 120, 40);
    let positions: Vec<usize> = Tab::ALL
        .iter()
        .map(|t| text.find(t.title()).expect("test: tab title visible"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_dashboard_metric_cards() {
    let text = buffer_text(&app_on(Tab::Dashboard), 120, 40);
    assert!(text.contains("$4,200"));
    assert!(text.contains("+23% this month"));
    assert!(text.contains("+0 this week"));
    assert!(text.contains("12.5%"));
    assert!(text.contains("All paying clients"));
    assert!(text.contains("Generate New Leads"));
}

#[test]
fn test_monthly_revenue_card_shows_client_mrr() {
    let display = DisplayConfig {
        total_revenue: 9800,
        ..DisplayConfig::default()
    };
    let app = App::new(ViewStateStore::with_display(display));
    let text = buffer_text(&app, 120, 40);
    assert!(text.contains("$4,200"));
    assert!(!text.contains("$9,800"));
}

#[test]
fn test_leads_table_shows_seeded_rows() {
    let text = buffer_text(&app_on(Tab::Leads), 120, 40);
    for name in ["TechStart Inc", "GrowthCorp", "InnovateLabs", "NextGen Solutions", "Digital Dynamics"] {
        assert!(text.contains(name), "missing lead {name}");
    }
    assert!(text.contains("Est. Value"));
    assert!(text.contains("$7,500"));
    assert!(!text.contains("BuildCorp"));
}

#[test]
fn test_leads_table_shows_generated_rows_first() {
    let mut app = app_on(Tab::Leads);
    let ticket = app.request_generation().expect("test: ticket");
    app.finish_generation(ticket, demo_drafts());

    let text = buffer_text(&app, 120, 40);
    let build = text.find("BuildCorp").expect("test: BuildCorp row");
    let health = text.find("HealthTech Pro").expect("test: HealthTech row");
    let tech = text.find("TechStart Inc").expect("test: TechStart row");
    assert!(build < health);
    assert!(health < tech);
}

#[test]
fn test_clients_cards_show_mrr_and_plan() {
    let text = buffer_text(&app_on(Tab::Clients), 120, 40);
    for label in ["$500/mo", "$1200/mo", "$2500/mo"] {
        assert!(text.contains(label), "missing {label}");
    }
    for plan in ["Starter Plan", "Growth Plan", "Pro Plan"] {
        assert!(text.contains(plan), "missing {plan}");
    }
    assert!(text.contains("Local Dental Practice"));
    assert!(text.contains("Onboard New Client"));
}

#[test]
fn test_analytics_tiles() {
    let text = buffer_text(&app_on(Tab::Analytics), 120, 40);
    assert!(text.contains("Revenue Growth"));
    assert!(text.contains("+127% Growth"));
    assert!(text.contains("Lead Quality Score"));
    assert!(text.contains("4.8/5.0"));
}

#[test]
fn test_settings_lists_next_steps() {
    let text = buffer_text(&app_on(Tab::Settings), 120, 40);
    assert!(text.contains("Demo Mode Active"));
    assert!(text.contains("Next Steps:"));
    for service in ["Supabase", "Apollo.io", "Stripe", "SendGrid"] {
        assert!(text.contains(service), "missing {service}");
    }
    assert!(text.contains("Upgrade to Production"));
}

#[test]
fn test_notification_popup_drawn_and_dismissed() {
    let mut app = app_on(Tab::Dashboard);
    let ticket = app.request_generation().expect("test: ticket");
    app.finish_generation(ticket, demo_drafts());
    app.drain_events();

    let text = buffer_text(&app, 120, 40);
    assert!(text.contains("new high-quality leads generated!"));
    assert!(text.contains("Press any key to continue"));

    apply_event(&mut app, InputEvent::OtherKey);
    let text = buffer_text(&app, 120, 40);
    assert!(!text.contains("new high-quality leads generated!"));
}

#[test]
fn test_help_overlay_lists_keybindings() {
    let mut app = app_on(Tab::Dashboard);
    apply_event(&mut app, InputEvent::Help);
    let text = buffer_text(&app, 120, 40);
    assert!(text.contains("Keybindings:"));
    assert!(text.contains("Generate leads"));
}

#[test]
fn test_tiny_terminal_never_panics() {
    for (w, h) in [(1, 1), (10, 5), (79, 24), (80, 23)] {
        let text = buffer_text(&app_on(Tab::Leads), w, h);
        assert!(!text.contains("Lead Pipeline"), "{w}x{h} should not render body");
    }
}

/// Strings each tab must show in full at the smallest supported terminal.
fn required_at_min_size(tab: Tab) -> Vec<&'static str> {
    match tab {
        Tab::Dashboard => vec![
            "Revenue Dashboard",
            "$4,200",
            "12.5%",
            "+23% this month",
            "Quick Actions",
            "Generate New Leads",
        ],
        Tab::Leads => vec![
            "Lead Pipeline",
            "TechStart Inc",
            "GrowthCorp",
            "InnovateLabs",
            "NextGen Solutions",
            "Digital Dynamics",
            "Est. Value",
        ],
        Tab::Clients => vec![
            "Client Management",
            "Starter Plan",
            "Growth Plan",
            "Pro Plan",
            "$500/mo",
            "$1200/mo",
            "$2500/mo",
            "120 leads \u{2022} 8% conversion",
            "Onboard New Client",
        ],
        Tab::Analytics => vec!["Revenue Analytics", "+127% Growth", "4.8/5.0"],
        Tab::Settings => {
            let mut v = vec!["Platform Settings", "Next Steps:", "Upgrade to Production"];
            v.extend(NEXT_STEPS);
            v
        }
    }
}

#[test]
fn test_every_tab_complete_at_minimum_size() {
    for tab in Tab::ALL {
        let text = buffer_text(&app_on(tab), MIN_COLS, MIN_ROWS);
        for needle in required_at_min_size(tab) {
            assert!(
                text.contains(needle),
                "{tab:?} at {MIN_COLS}x{MIN_ROWS} is missing {needle:?}"
            );
        }
    }
}

#[test]
fn test_clients_cards_keep_both_lines_at_minimum_size() {
    let text = buffer_text(&app_on(Tab::Clients), MIN_COLS, MIN_ROWS);
    for line in ["Local Dental Practice", "Real Estate Agency"] {
        assert!(text.contains(line), "missing {line}");
    }
    for stats in ["45 leads", "120 leads", "conversion"] {
        assert!(text.contains(stats), "missing {stats}");
    }
}

#[test]
fn test_generated_leads_fit_at_minimum_size() {
    let mut app = app_on(Tab::Leads);
    let ticket = app.request_generation().expect("test: ticket");
    app.finish_generation(ticket, demo_drafts());
    let text = buffer_text(&app, MIN_COLS, MIN_ROWS);
    for name in ["BuildCorp", "HealthTech Pro", "TechStart Inc", "Digital Dynamics"] {
        assert!(text.contains(name), "missing lead {name}");
    }
}
