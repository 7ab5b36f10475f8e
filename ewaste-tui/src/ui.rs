use ewaste_core::model::{Facet, Location};
use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap,
        canvas::{Canvas, Points},
    },
};

use crate::app::{App, SearchFocus, Tab};
use crate::content::{PROFILE, SCANNER_PROMPT, SCANNER_STEPS, TIPS};

const ACCENT: Color = Color::Green;

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: tab bar, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(idx, tab)| format!("{} {}", idx + 1, tab.title()));
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("E-Waste Locator"),
        )
        .select(app.tab.index())
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, *header_area);

    match app.tab {
        Tab::Map => draw_map(frame, app, *content_area),
        Tab::Search => draw_search(frame, app, *content_area),
        Tab::Scanner => draw_scanner(frame, *content_area),
        Tab::Awareness => draw_awareness(frame, app, *content_area),
        Tab::Profile => draw_profile(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = match app.tab {
        Tab::Map => "↑/↓ select center · Tab/1-5 switch screen · q/Ctrl-C quit",
        Tab::Search => match app.focus {
            SearchFocus::Query => "Type to search · ↓/Enter filters · Esc clear · Tab switch · Ctrl-C quit",
            SearchFocus::Services | SearchFocus::Items => {
                "←/→ move · Space/Enter toggle · ↑/↓ focus · Esc clear · q quit"
            }
            SearchFocus::Results => "↑/↓ move · Enter show on map · Esc clear · q quit",
        },
        Tab::Scanner => "Enter/Space start scanning · Tab/1-5 switch screen · q quit",
        Tab::Awareness => "↑/↓ browse tips · Tab/1-5 switch screen · q quit",
        Tab::Profile => "↑/↓ select · Enter/Space toggle · Tab/1-5 switch screen · q quit",
    };

    let (status_text, status_style) = if let Some(msg) = &app.error_message {
        (format!("{msg} · {nav_hint}"), Style::default().fg(Color::Red))
    } else if let Some(msg) = &app.notice {
        (format!("{msg} · {nav_hint}"), Style::default().fg(Color::Yellow))
    } else {
        (nav_hint.to_owned(), Style::default())
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_map(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [map_area, list_area] = chunks else {
        return;
    };

    let region = app.service.map_region();
    let locations = app.service.locations();
    let selected = app.map_index;

    let selected_location = app.selected_map_location();
    let title = match selected_location {
        Some(location) => format!("E-Waste Collection Centers · {}", location.name),
        None => format!("E-Waste Collection Centers · {}", app.service.source_name()),
    };
    let description = selected_location.map(marker_description).unwrap_or_default();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(Line::from(description).fg(Color::Gray)),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds(region.longitude_bounds())
        .y_bounds(region.latitude_bounds())
        .paint(move |ctx| {
            for (idx, location) in locations.iter().enumerate() {
                let x = location.coordinates.longitude;
                let y = location.coordinates.latitude;
                let color = if idx == selected { Color::Yellow } else { ACCENT };
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color,
                });
                ctx.print(
                    x,
                    y,
                    Line::styled(format!("● {}", location.name), Style::default().fg(color)),
                );
            }
        });
    frame.render_widget(canvas, *map_area);

    let items = locations
        .iter()
        .map(|location| {
            ListItem::new(location_card(
                location,
                vec![Line::from(location.distance.clone()).fg(ACCENT)],
            ))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Centers (↑/↓)"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !locations.is_empty() {
        state.select(Some(app.map_index));
    }
    frame.render_stateful_widget(list, *list_area, &mut state);
}

fn draw_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // query
            Constraint::Length(3), // service chips
            Constraint::Length(3), // item chips
            Constraint::Min(0),    // results
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [query_area, services_area, items_area, results_area] = chunks else {
        return;
    };

    let query_focused = app.focus == SearchFocus::Query;
    let input = Paragraph::new(app.criteria.query.as_str())
        .block(focus_block(
            "Search by name, address, service or item",
            query_focused,
        ))
        .wrap(Wrap { trim: true });
    frame.render_widget(input, *query_area);
    if query_focused {
        let column = cursor_column(&app.criteria.query, query_area.width);
        frame.set_cursor_position(Position::new(
            query_area.x.saturating_add(1).saturating_add(column),
            query_area.y.saturating_add(1),
        ));
    }

    draw_chip_row(frame, app, Facet::Service, *services_area);
    draw_chip_row(frame, app, Facet::AcceptedItem, *items_area);

    let items = if app.results.is_empty() {
        vec![ListItem::new("No centers match the current filters.")]
    } else {
        app.results
            .iter()
            .map(|location| {
                let chips = location
                    .accepted_items
                    .iter()
                    .map(|item| Span::styled(format!("[{item}] "), Style::default().fg(Color::Cyan)))
                    .collect::<Vec<Span<'_>>>();
                ListItem::new(location_card(
                    location,
                    vec![
                        Line::from(location.distance.clone()).fg(ACCENT),
                        Line::from(chips),
                    ],
                ))
            })
            .collect()
    };

    let results_focused = app.focus == SearchFocus::Results;
    let list = List::new(items)
        .block(focus_block(
            &format!("Results ({}) · Enter to show on map", app.results.len()),
            results_focused,
        ))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if results_focused && !app.results.is_empty() {
        state.select(Some(app.result_index));
    }
    frame.render_stateful_widget(list, *results_area, &mut state);
}

fn draw_chip_row(frame: &mut Frame<'_>, app: &App, facet: Facet, area: Rect) {
    let focused = app.focus.facet() == Some(facet);
    let cursor = app.chip_index(facet);
    let selection = app.criteria.selection(facet);

    let spans = facet
        .candidates()
        .iter()
        .enumerate()
        .flat_map(|(idx, label)| {
            let selected = selection.contains(label);
            let marker = if selected { "●" } else { "○" };
            let mut style = if selected {
                Style::default().fg(Color::Black).bg(ACCENT)
            } else {
                Style::default()
            };
            if focused && idx == cursor {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            [
                Span::styled(format!(" {marker} {label} "), style),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<Span<'_>>>();

    let row = Paragraph::new(Line::from(spans)).block(focus_block(&facet.to_string(), focused));
    frame.render_widget(row, area);
}

fn draw_scanner(frame: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(format!("[ {SCANNER_PROMPT} ]")).centered(),
        Line::from(""),
        Line::from(" Start Scanning ")
            .centered()
            .style(Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("How it works:").bold(),
    ];
    lines.extend(SCANNER_STEPS.iter().map(|step| Line::from(format!("• {step}"))));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("QR Code Scanner"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_awareness(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let constraints = TIPS.iter().map(|_| Constraint::Ratio(1, 4));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for ((idx, tip), row) in TIPS.iter().enumerate().zip(rows.iter()) {
        let focused = idx == app.tip_index;
        let paragraph = Paragraph::new(tip.body)
            .block(focus_block(tip.title, focused))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *row);
    }
}

fn draw_profile(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [card_area, settings_area] = chunks else {
        return;
    };

    let stats = PROFILE
        .stats
        .iter()
        .flat_map(|(value, label)| {
            [
                Span::styled(format!("{value} "), Style::default().fg(ACCENT).bold()),
                Span::raw(format!("{label}   ")),
            ]
        })
        .collect::<Vec<Span<'_>>>();

    let card = Paragraph::new(vec![
        Line::from(PROFILE.name).bold(),
        Line::from(PROFILE.email).fg(Color::Gray),
        Line::from(""),
        Line::from(stats),
    ])
    .block(Block::default().borders(Borders::ALL).title("Profile"));
    frame.render_widget(card, *card_area);

    let items = app
        .settings
        .iter()
        .map(|setting| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", setting.label)),
                Span::styled(setting.value_label(), Style::default().fg(ACCENT)),
            ]))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Settings"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.setting_index));
    frame.render_stateful_widget(list, *settings_area, &mut state);
}

/// Name, address and services lines followed by screen-specific extras.
fn location_card<'a>(location: &'a Location, extra: Vec<Line<'a>>) -> Text<'a> {
    let mut lines = vec![
        Line::from(location.name.as_str()).bold(),
        Line::from(location.address.as_str()).fg(Color::Gray),
        Line::from(format!("Services: {}", location.services)),
    ];
    lines.extend(extra);
    lines.push(Line::from(""));
    Text::from(lines)
}

/// Marker detail line: address and services, as shown in a map popup.
fn marker_description(location: &Location) -> String {
    format!("{} • {}", location.address, location.services)
}

/// Cursor offset inside a bordered input box, kept within its inner width.
fn cursor_column(query: &str, box_width: u16) -> u16 {
    let typed = u16::try_from(Line::from(query).width()).unwrap_or(u16::MAX);
    let last_inner = box_width.saturating_sub(2).saturating_sub(1);
    typed.min(last_inner)
}

fn focus_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title.to_owned())
}
