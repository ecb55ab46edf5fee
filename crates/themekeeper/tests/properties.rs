//! Property tests over arbitrary sequences of page events.

use proptest::prelude::*;
use themekeeper::{
    Document, ManualPreference, MemoryDocument, MemoryStore, Session, SystemPreference, Theme,
    ThemeConfig, ThemeController,
};

#[derive(Debug, Clone)]
enum Event {
    Toggle,
    System(Theme),
}

fn theme() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![Just(Event::Toggle), theme().prop_map(Event::System)]
}

fn stored() -> impl Strategy<Value = Option<Theme>> {
    prop::option::of(theme())
}

fn load(persisted: Option<Theme>, system: &ManualPreference) -> Session<MemoryStore, MemoryDocument> {
    let store = match persisted {
        Some(theme) => MemoryStore::with_entry("theme", theme.as_str()),
        None => MemoryStore::new(),
    };
    let page = MemoryDocument::new().with_element("theme-icon");
    Session::start(ThemeController::new(store, page, ThemeConfig::default()), system)
}

fn icon(session: &Session<MemoryStore, MemoryDocument>) -> String {
    session
        .controller()
        .document()
        .element_class("theme-icon")
        .unwrap_or_default()
        .to_string()
}

proptest! {
    #[test]
    fn double_toggle_restores_display_and_preference(
        persisted in theme(),
        system_theme in theme(),
    ) {
        let system = ManualPreference::new(system_theme);
        let session = load(Some(persisted), &system);
        let before = (session.display(), session.persisted());

        session.toggle();
        session.toggle();

        prop_assert_eq!((session.display(), session.persisted()), before);
    }

    #[test]
    fn double_toggle_without_preference_persists_original(system_theme in theme()) {
        let system = ManualPreference::new(system_theme);
        let session = load(None, &system);
        prop_assert_eq!(session.persisted(), None);

        session.toggle();
        session.toggle();

        prop_assert_eq!(session.display(), Some(system_theme));
        prop_assert_eq!(session.persisted(), Some(system_theme));
    }

    #[test]
    fn toggle_persists_displayed_theme(
        persisted in stored(),
        system_theme in theme(),
        events in prop::collection::vec(event(), 0..12),
    ) {
        let system = ManualPreference::new(system_theme);
        let session = load(persisted, &system);
        for event in events {
            match event {
                Event::Toggle => {
                    let applied = session.toggle();
                    prop_assert_eq!(session.display(), Some(applied));
                    prop_assert_eq!(session.persisted(), Some(applied));
                }
                Event::System(theme) => system.emit(theme),
            }
        }
    }

    #[test]
    fn display_follows_preference_else_system(
        persisted in stored(),
        system_theme in theme(),
        events in prop::collection::vec(event(), 0..12),
    ) {
        let system = ManualPreference::new(system_theme);
        let session = load(persisted, &system);
        for event in events {
            match event {
                Event::Toggle => {
                    session.toggle();
                }
                Event::System(theme) => system.emit(theme),
            }
            let expected = session.persisted().unwrap_or_else(|| system.current());
            prop_assert_eq!(session.display(), Some(expected));
        }
    }

    #[test]
    fn icon_matches_display(
        persisted in stored(),
        system_theme in theme(),
        events in prop::collection::vec(event(), 0..12),
    ) {
        let system = ManualPreference::new(system_theme);
        let session = load(persisted, &system);
        for event in events {
            match event {
                Event::Toggle => {
                    session.toggle();
                }
                Event::System(theme) => system.emit(theme),
            }
            let expected = match session.display() {
                Some(Theme::Dark) => "ti-moon",
                Some(Theme::Light) => "ti-sun",
                None => unreachable!("display is always set after load"),
            };
            prop_assert_eq!(icon(&session), expected);
        }
    }
}

#[test]
fn root_attribute_is_always_a_theme_literal() {
    let system = ManualPreference::new(Theme::Light);
    let session = load(None, &system);
    for _ in 0..4 {
        session.toggle();
        let value = session
            .controller()
            .document()
            .root_attribute("data-theme")
            .unwrap();
        assert!(value == "light" || value == "dark");
    }
}
