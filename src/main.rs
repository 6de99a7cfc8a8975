//! cat-breeds-tui - A terminal catalog of cat breeds
//!
//! Fetches the breed list once at startup, then lets the user filter, delete,
//! view and edit breeds in memory. Nothing is written back to the server.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::components::draw_loading_screen;
use crate::config::Config;
use crate::model::Catalog;
use crate::services::fetch_breeds;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    logging::init_logging();
    let config = Config::load_or_default();
    tracing::info!(endpoint = %config.endpoint, "starting");

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    let result = load_catalog(&mut tui, &config).and_then(|catalog| {
        let mut app = App::new(catalog);
        app.init()?;
        run_app(&mut tui, &mut app)
    });

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = %format!("{:#}", err), "exiting with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("exiting");
    Ok(())
}

/// Show the loading screen and fetch the breed list
fn load_catalog(tui: &mut Tui, config: &Config) -> Result<Catalog> {
    tui.draw(|frame| {
        let area = frame.area();
        draw_loading_screen(frame, area, &config.endpoint)
    })?;

    let breeds = fetch_breeds(config).context("failed to load the breed list")?;
    let catalog = Catalog::from_breeds(breeds);
    if catalog.is_empty() {
        tracing::warn!(endpoint = %config.endpoint, "breed list is empty");
    }
    Ok(catalog)
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            let area = frame.area();
            draw_result = app.draw(frame, area);
        })?;
        if let Err(e) = draw_result {
            tracing::warn!(error = %e, "draw failed");
        }

        match tui.next_event()? {
            Some(event) => {
                let action = match event {
                    Event::Key(key) => app.handle_key_event(key)?,
                    Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                    Event::Resize(w, h) => Some(Action::Resize(w, h)),
                    _ => None,
                };
                if let Some(action) = action {
                    app.dispatch(action)?;
                }
            }
            None => app.dispatch(Action::Tick)?,
        }
    }

    Ok(())
}
