//! Terminal UI for finding e-waste collection centers: map, search, scanner, tips and profile.

mod app;
mod cli;
mod content;
mod input;
mod logging;
mod ui;

use std::{
    io::{self, Write},
    sync::Arc,
    time::Duration as StdDuration,
};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ewaste_core::{catalog::LocationCatalog, model::Location, service::LocatorService};
use ewaste_provider_sample as sample;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::cli::{Cli, Command, SearchArgs};
use crate::input::Action;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let one_shot = cli.command.is_some();
    logging::init(cli.debug, cli.log_file.as_deref(), one_shot)?;

    // Data + service setup
    let source = sample::source();
    let catalog = Arc::new(LocationCatalog::new(source.as_ref())?);
    let service = Arc::new(LocatorService::new(catalog));

    if let Some(Command::Search(args)) = &cli.command {
        return print_search(&service, args);
    }

    // App state
    let app = App::new(service, cli.tab);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                action => app.apply(action),
            }
        }
    }

    Ok(())
}

fn print_search(service: &LocatorService, args: &SearchArgs) -> Result<()> {
    let hits = service.search(&args.criteria());
    let mut out = io::stdout().lock();
    write_search(&mut out, &hits, args.json)
}

fn write_search(out: &mut impl Write, hits: &[&Location], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, hits)?;
        writeln!(out)?;
        return Ok(());
    }

    if hits.is_empty() {
        writeln!(out, "No centers match.")?;
        return Ok(());
    }

    for location in hits {
        writeln!(out, "{} ({})", location.name, location.id)?;
        writeln!(out, "  {}", location.address)?;
        writeln!(out, "  Services: {}", location.services)?;
        writeln!(out, "  Accepts: {}", location.accepted_items.join(", "))?;
        writeln!(out, "  {}", location.distance)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewaste_core::filter::{FacetSelection, FilterCriteria};

    fn service() -> LocatorService {
        let source = sample::source();
        let catalog = LocationCatalog::new(source.as_ref()).expect("sample data is valid");
        LocatorService::new(Arc::new(catalog))
    }

    fn render(criteria: &FilterCriteria, json: bool) -> String {
        let svc = service();
        let hits = svc.search(criteria);
        let mut buffer = Vec::new();
        write_search(&mut buffer, &hits, json).expect("writing to memory");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    fn recycling() -> FilterCriteria {
        FilterCriteria {
            services: FacetSelection::from_labels(["Recycling"]),
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn json_output_uses_snake_case_and_nested_coordinates() {
        let output = render(&recycling(), true);
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        let records = value.as_array().expect("array of records");
        assert_eq!(records.len(), 2, "greentech and techrepair");

        let first = records.first().expect("first record");
        assert_eq!(first["id"], "greentech", "id");
        assert_eq!(first["name"], "GreenTech Recycling Center", "name");
        assert_eq!(first["services"], "Recycling, Donation, Buy Back", "services");
        assert_eq!(first["distance"], "2.3 km away", "distance");
        assert_eq!(
            first["accepted_items"],
            serde_json::json!(["Mobile Phones", "Laptops", "Batteries", "Monitors"]),
            "accepted items"
        );
        assert_eq!(first["coordinates"]["latitude"], 37.779_26, "latitude");
        assert_eq!(first["coordinates"]["longitude"], -122.419_2, "longitude");
        assert!(first.get("acceptedItems").is_none(), "no camelCase keys");

        let second = records.get(1).expect("second record");
        assert_eq!(second["id"], "techrepair", "order kept");
    }

    #[test]
    fn text_output_prints_cards() {
        let output = render(&recycling(), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines.get(..5),
            Some(
                &[
                    "GreenTech Recycling Center (greentech)",
                    "  1234 Environmental Ave, San Francisco, CA",
                    "  Services: Recycling, Donation, Buy Back",
                    "  Accepts: Mobile Phones, Laptops, Batteries, Monitors",
                    "  2.3 km away",
                ][..]
            ),
            "first card"
        );
        assert_eq!(lines.len(), 10, "two cards of five lines");
        assert_eq!(lines.get(5).copied(), Some("TechRepair Plus (techrepair)"), "second card");
    }

    #[test]
    fn empty_result_prints_message() {
        let criteria = FilterCriteria::with_query("zzz-nomatch");
        assert_eq!(render(&criteria, false), "No centers match.\n", "text message");
        assert_eq!(render(&criteria, true).trim(), "[]", "empty json array");
    }
}
