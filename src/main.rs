//! A draggable range slider, played with in the terminal.
//!
//! Run the binary to launch the interactive slider; drag handles with the
//! mouse or step them with the keyboard.  Run with `--html` to print the
//! slider's markup for the given configuration and exit.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr, Stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::core::{drag::ChangeKind, props::SliderProps, slider::Slider};
use crate::ui::{layout::AppLayout, markup, slider_widget::SliderWidget, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Draggable range slider playground")]
struct Cli {
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    min: f64,

    #[arg(long, default_value_t = 20.0, allow_hyphen_values = true)]
    max: f64,

    /// Increment values snap to (0 disables snapping).
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Start value of the primary (upper) handle.
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    start: f64,

    /// Start value of the lower handle; makes this a range slider.
    #[arg(long, allow_hyphen_values = true)]
    double_start: Option<f64>,

    /// Put `min` on the right.
    #[arg(long)]
    reversed: bool,

    /// Show raw positions while dragging.
    #[arg(long)]
    smooth: bool,

    #[arg(long)]
    disabled: bool,

    #[arg(long)]
    label: Option<String>,

    #[arg(long)]
    id: Option<String>,

    #[arg(long)]
    name: Option<String>,

    /// Root element tag for `--html`.
    #[arg(long = "as", default_value = "div")]
    element: String,

    /// Extra root attribute, `key=value` (repeatable).
    #[arg(long = "attr", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,

    /// Decimal places kept in rendered percentages.
    #[arg(long, default_value_t = 1)]
    precision: u32,

    /// Let the app own the value and write every change back.
    #[arg(long)]
    controlled: bool,

    /// Only notify on release, not on every drag move.
    #[arg(long)]
    no_move_events: bool,

    /// Print the slider markup and exit.
    #[arg(long)]
    html: bool,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {s:?}"))?;
    let key = key.trim();
    if !markup::is_valid_attr_name(key) {
        return Err(format!("{key:?} is not a valid attribute name"));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    fn props(&self) -> SliderProps {
        SliderProps {
            min: self.min,
            max: self.max,
            step: self.step,
            start: Some(self.start),
            double_start: self.double_start,
            reversed: self.reversed,
            smooth: self.smooth,
            disabled: self.disabled,
            fitted: false,
            precision: self.precision,
            notify_on_move: !self.no_move_events,
            label: self.label.clone(),
            element: self.element.clone(),
            class_name: None,
            id: self.id.clone(),
            name: self.name.clone(),
            tab_index: Some(0),
            attrs: self.attrs.iter().cloned().collect(),
        }
    }

    fn build_slider(&self) -> Result<Slider> {
        let props = self.props();
        let slider = if self.controlled {
            let value = props
                .initial_bounds()
                .to_value()
                .context("controlled slider needs a start value")?;
            Slider::controlled(props, value)
        } else {
            Slider::new(props)
        };
        slider.map_err(|err| {
            tracing::warn!("rejected slider configuration: {err}");
            err
        })
        .context("invalid slider configuration")
    }
}

// ───────────────────────────────────────── drawing ───────────

fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area());

    let mode = if state.slider.source().is_controlled() {
        "controlled"
    } else {
        "uncontrolled"
    };
    let slider_block = Block::default()
        .title(format!(" slider ({mode}) "))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    let widget = SliderWidget::new(&state.slider)
        .block(slider_block)
        .focused(Some(state.focused));
    frame.render_stateful_widget(widget, layout.slider_area, &mut state.widget_state);

    let log_block = Block::default()
        .title(" changes ")
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    let visible = layout.log_area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = state
        .log
        .iter()
        .skip(state.log.len().saturating_sub(visible))
        .map(|entry| {
            let style = match entry.kind {
                ChangeKind::Move => Theme::move_event_style(),
                ChangeKind::Commit => Theme::commit_event_style(),
            };
            Line::styled(entry.text.clone(), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(log_block), layout.log_area);

    let hint = state.config.status_bar_hint();
    let (status_text, status_style) = match state.status_message.as_deref() {
        Some(msg) => (msg, Theme::status_bar_style()),
        None if state.slider.props().disabled => ("slider is disabled", Theme::error_style()),
        None => (hint.as_str(), Theme::status_bar_style()),
    };
    frame.render_widget(Paragraph::new(status_text).style(status_style), layout.status_area);
}

// ───────────────────────────────────────── main ─────────────

async fn run(terminal: &mut Terminal<CrosstermBackend<Stderr>>, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| draw(frame, state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => {
                state.status_message = None;
                handler::handle_key(state, k);
            }
            AppEvent::Mouse(m) => handler::handle_mouse(state, m),
            AppEvent::FocusLost => state.slider.cancel_drag(),
            AppEvent::Resize | AppEvent::Tick => {}
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let slider = cli.build_slider()?;

    // ── markup mode ───────────────────────────────────────────
    if cli.html {
        println!("{}", markup::render_markup(&slider).to_html());
        return Ok(());
    }

    let config = config::AppConfig::load();
    let mut state = AppState::new(slider, config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stderr(), EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown (also after an error in the loop) ────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;
    result?;

    if let Some(value) = state.slider.resolve().to_value() {
        println!("{value}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_flags_split_on_the_first_equals() {
        assert_eq!(
            parse_attr("data-note=a=b"),
            Ok(("data-note".to_string(), "a=b".to_string()))
        );
        assert!(parse_attr("novalue").is_err());
    }

    #[test]
    fn attr_flags_reject_names_that_break_markup() {
        assert!(parse_attr("x\" onclick=y").is_err());
        assert!(parse_attr("a b=1").is_err());
        assert!(parse_attr("a>=1").is_err());
        assert!(parse_attr(" =1").is_err());
    }
}
