use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, SearchFocus, Tab};
use crate::content::TIPS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Re-run the location filter for the current criteria
    Refilter,
    /// Jump to the map with the highlighted search result selected
    ShowResultOnMap,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Char, Tab as TabKey};

    // Global shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    match key.code {
        TabKey => {
            app.switch_tab(app.tab.next());
            return Action::None;
        }
        BackTab => {
            app.switch_tab(app.tab.previous());
            return Action::None;
        }
        _ => {}
    }

    // Digits and `q` belong to the search box while it has focus
    if !app.is_typing() && key.modifiers.is_empty() {
        if key.code == Char('q') {
            return Action::Quit;
        }
        if let Char(digit) = key.code
            && let Some(tab) = Tab::from_digit(digit)
        {
            app.switch_tab(tab);
            return Action::None;
        }
    }

    match app.tab {
        Tab::Map => {
            let count = app.service.locations().len();
            move_cursor(key.code, &mut app.map_index, count);
            Action::None
        }
        Tab::Search => handle_search_key(key, app),
        Tab::Scanner => {
            if matches!(key.code, KeyCode::Enter | Char(' ')) {
                app.start_scan();
            }
            Action::None
        }
        Tab::Awareness => {
            move_cursor(key.code, &mut app.tip_index, TIPS.len());
            Action::None
        }
        Tab::Profile => {
            if matches!(key.code, KeyCode::Enter | Char(' ')) {
                app.activate_setting();
            } else {
                let count = app.settings.len();
                move_cursor(key.code, &mut app.setting_index, count);
            }
            Action::None
        }
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Left, Right, Up};

    if key.code == Esc {
        app.clear_filters();
        return Action::Refilter;
    }

    let mut action = Action::None;

    match app.focus {
        SearchFocus::Query => match key.code {
            Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    app.criteria.query.push(character);
                    action = Action::Refilter;
                }
            }
            Backspace => {
                if app.criteria.query.pop().is_some() {
                    action = Action::Refilter;
                }
            }
            Down | Enter => {
                app.focus = app.focus.down();
            }
            _ => {}
        },

        SearchFocus::Services | SearchFocus::Items => {
            let Some(facet) = app.focus.facet() else {
                return Action::None;
            };
            match key.code {
                Left | Char('h') => app.move_chip(facet, false),
                Right | Char('l') => app.move_chip(facet, true),
                Enter | Char(' ') => {
                    if app.toggle_focused_chip() {
                        action = Action::Refilter;
                    }
                }
                Up | Char('k') => app.focus = app.focus.up(),
                Down | Char('j') => app.focus = app.focus.down(),
                _ => {}
            }
        }

        SearchFocus::Results => match key.code {
            Up | Char('k') => {
                if app.result_index > 0 {
                    app.result_index -= 1;
                } else {
                    app.focus = app.focus.up();
                }
            }
            Down | Char('j') => {
                if app.result_index + 1 < app.results.len() {
                    app.result_index += 1;
                }
            }
            Enter => {
                action = Action::ShowResultOnMap;
            }
            _ => {}
        },
    }
    action
}

fn move_cursor(code: KeyCode, index: &mut usize, count: usize) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            *index = index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if *index + 1 < count {
                *index += 1;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{result_ids, sample_app};
    use crate::content::{SCANNER_NOTICE, SettingKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        let action = handle_key_event(key(code), app);
        app.apply(action);
        action
    }

    fn type_text(app: &mut App, text: &str) {
        for character in text.chars() {
            press(app, KeyCode::Char(character));
        }
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = sample_app(Tab::Search);
        let action = handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert_eq!(action, Action::Quit, "ctrl-c");
    }

    #[test]
    fn q_quits_outside_the_search_box() {
        let mut app = sample_app(Tab::Map);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit, "map tab");
    }

    #[test]
    fn q_and_digits_are_typed_into_the_search_box() {
        let mut app = sample_app(Tab::Search);
        type_text(&mut app, "q1");
        assert_eq!(app.criteria.query, "q1", "typed");
        assert_eq!(app.tab, Tab::Search, "still on search");
    }

    #[test]
    fn tab_keys_and_digits_switch_tabs() {
        let mut app = sample_app(Tab::Map);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Search, "tab");
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tab, Tab::Map, "shift-tab");
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tab, Tab::Awareness, "digit");
    }

    #[test]
    fn typing_refilters_on_every_key() {
        let mut app = sample_app(Tab::Search);
        type_text(&mut app, "tech");
        assert_eq!(result_ids(&app), vec!["greentech", "techrepair"], "query applied");

        type_text(&mut app, "r");
        assert_eq!(result_ids(&app), vec!["techrepair"], "narrowed");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(result_ids(&app), vec!["greentech", "techrepair"], "widened again");
    }

    #[test]
    fn chips_toggle_facet_selections() {
        let mut app = sample_app(Tab::Search);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, SearchFocus::Services, "service row");
        press(&mut app, KeyCode::Enter);
        assert!(app.criteria.services.contains("Recycling"), "first chip selected");
        assert_eq!(result_ids(&app), vec!["greentech", "techrepair"], "recycling centers");

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.criteria.items.contains("Batteries"), "batteries chip");
        assert_eq!(result_ids(&app), vec!["greentech"], "both facets");

        press(&mut app, KeyCode::Char(' '));
        assert!(app.criteria.items.is_empty(), "toggled off");
        assert_eq!(result_ids(&app), vec!["greentech", "techrepair"], "item filter gone");
    }

    #[test]
    fn escape_clears_every_criterion() {
        let mut app = sample_app(Tab::Search);
        type_text(&mut app, "zzz-nomatch");
        assert!(app.results.is_empty(), "nothing matches");

        press(&mut app, KeyCode::Esc);
        assert!(app.criteria.is_empty(), "criteria cleared");
        assert_eq!(app.results.len(), 3, "all results back");
    }

    #[test]
    fn enter_on_a_result_opens_the_map() {
        let mut app = sample_app(Tab::Search);
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.focus, SearchFocus::Results, "results focused");
        press(&mut app, KeyCode::Down);
        assert_eq!(press(&mut app, KeyCode::Enter), Action::ShowResultOnMap, "action");
        assert_eq!(app.tab, Tab::Map, "map tab");
        assert_eq!(app.map_index, 1, "ecodrop selected");
    }

    #[test]
    fn map_cursor_is_bounded() {
        let mut app = sample_app(Tab::Map);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.map_index, 0, "lower bound");
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.map_index, 2, "upper bound");
    }

    #[test]
    fn scanner_only_shows_a_notice() {
        let mut app = sample_app(Tab::Scanner);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice.as_deref(), Some(SCANNER_NOTICE), "stub notice");

        press(&mut app, KeyCode::Tab);
        assert!(app.notice.is_none(), "cleared on tab switch");
    }

    #[test]
    fn profile_switches_toggle() {
        let mut app = sample_app(Tab::Profile);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.settings.get(1).map(|setting| setting.kind),
            Some(SettingKind::Switch(false)),
            "location sharing off"
        );
    }
}
