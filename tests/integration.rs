// SPDX-License-Identifier: MPL-2.0
use iced_dashkit::app::Route;
use iced_dashkit::config::{self, Config, GeneralConfig, LayoutConfig, NotificationsConfig};
use iced_dashkit::i18n::fluent::I18n;
use iced_dashkit::ui::dashboard::{self, Field};
use iced_dashkit::ui::layout;
use iced_dashkit::ui::notifications::{
    Manager, ManualScheduler, NotificationMessage, Severity, ToastId,
};
use iced_dashkit::ui::sidebar::{self, ItemPath};
use iced_dashkit::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");
}

#[test]
fn test_configured_duration_drives_dashboard_toasts() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let config = Config {
        notifications: NotificationsConfig {
            duration_ms: Some(2000),
        },
        layout: LayoutConfig {
            sidebar_open: Some(false),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.notifications.duration(), ms(2000));

    let i18n = english();
    let mut page = dashboard::State::new(ManualScheduler::new(), loaded.notifications.duration());
    page.update(dashboard::Message::Save, &i18n);

    page.notifications_mut().advance(ms(1999));
    assert_eq!(page.notifications().len(), 1);
    page.notifications_mut().advance(ms(1));
    assert!(page.notifications().is_empty());
}

#[test]
fn test_unreadable_config_yields_warning_key() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "general = [broken")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    assert!(!english().tr("notification-config-load-error").starts_with("MISSING"));
}

#[test]
fn test_error_then_success_expire_together() {
    let mut queue: Manager<ManualScheduler> = Manager::default();
    queue.enqueue(Severity::Error, "Failed to connect", Some(ms(3000)));
    queue.enqueue(Severity::Success, "Saved", Some(ms(3000)));

    let order: Vec<(Severity, &str)> = queue
        .iter()
        .map(|t| (t.notification().severity(), t.notification().message()))
        .collect();
    assert_eq!(
        order,
        vec![(Severity::Error, "Failed to connect"), (Severity::Success, "Saved")]
    );

    queue.advance(ms(3000));
    assert!(queue.is_empty());
}

#[test]
fn test_manual_close_then_expiry_leaves_queue_empty() {
    let mut queue: Manager<ManualScheduler> = Manager::default();
    let error = queue.enqueue(Severity::Error, "Failed to connect", Some(ms(3000)));
    queue.enqueue(Severity::Success, "Saved", Some(ms(3000)));

    queue.advance(ms(100));
    queue.handle_message(NotificationMessage::Close(error.clone()));
    queue.advance(ms(2900));

    assert!(queue.is_empty());
    let expired_error = queue
        .scheduler()
        .fired()
        .iter()
        .any(|m| *m == NotificationMessage::Expired(error.clone()));
    assert!(!expired_error);
}

#[test]
fn test_removals_are_idempotent() {
    let mut queue: Manager<ManualScheduler> = Manager::default();
    let id = queue.enqueue(Severity::Info, "once", None);

    assert!(queue.dismiss(&id));
    assert!(!queue.dismiss(&id));
    queue.handle_message(NotificationMessage::Expired(id.clone()));
    queue.handle_message(NotificationMessage::Close(id));
    assert!(!queue.dismiss(&ToastId::from("never-enqueued")));
    assert!(queue.is_empty());
}

#[test]
fn test_severity_names_fail_fast() {
    assert_eq!("warning".parse::<Severity>().ok(), Some(Severity::Warning));
    let err = "fatal".parse::<Severity>().expect_err("unknown severity");
    assert_eq!(err.to_string(), "Unknown severity: fatal");
}

#[test]
fn test_sidebar_navigation_to_profile() {
    let i18n = english();
    let mut state = layout::State::new(&i18n, true);

    let rows = state.sidebar().visible_rows();
    let labels: Vec<&str> = rows.iter().map(|row| row.item.text()).collect();
    assert_eq!(labels, vec!["Dashboard", "Settings"]);

    layout::update(
        &mut state,
        layout::Message::Sidebar(sidebar::Message::Toggle(ItemPath::root(1))),
    );
    let rows = state.sidebar().visible_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].item.text(), "Profile");
    assert_eq!(rows[2].indent(), 28.0);

    let event = layout::update(
        &mut state,
        layout::Message::Sidebar(sidebar::Message::Navigate("/profile".to_string())),
    );
    assert_eq!(event, layout::Event::Navigate(Route::Profile));

    layout::update(&mut state, layout::Message::ToggleSidebar);
    assert_eq!(state.sidebar().visible_rows().len(), 2);
}

#[test]
fn test_dashboard_form_round() {
    let i18n = english();
    let mut page = dashboard::State::new(ManualScheduler::new(), ms(3000));

    page.update(
        dashboard::Message::Input(Field::Username, iced_dashkit::ui::input::Message::Clear),
        &i18n,
    );
    page.update(
        dashboard::Message::Input(
            Field::Username,
            iced_dashkit::ui::input::Message::Changed("jane".to_string()),
        ),
        &i18n,
    );
    page.update(
        dashboard::Message::Input(Field::Username, iced_dashkit::ui::input::Message::Submit),
        &i18n,
    );

    assert_eq!(page.field(Field::Username).value, "jane");
    let toast = page.notifications().iter().next().expect("success toast");
    assert_eq!(toast.notification().severity(), Severity::Success);
    assert_eq!(toast.notification().message(), "Profile updated successfully!");
}
