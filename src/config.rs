//! User configuration: keybindings and playground settings.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/range-slider/config.toml` (default
//! `~/.config/range-slider/config.toml`).  Unknown keys and unparsable values
//! are ignored and fall back to the defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const DEFAULT_LOG_CAPACITY: usize = 50;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Decrease,
    Increase,
    SwitchHandle,
    ToggleReversed,
    ToggleSmooth,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::Decrease,
        Action::Increase,
        Action::SwitchHandle,
        Action::ToggleReversed,
        Action::ToggleSmooth,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::Decrease => "decrease",
            Action::Increase => "increase",
            Action::SwitchHandle => "switch_handle",
            Action::ToggleReversed => "toggle_reversed",
            Action::ToggleSmooth => "toggle_smooth",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared; platform modifiers are ignored.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Config-file / status-bar form, e.g. `"Alt+Left"`, `"r"`.
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Left"`, `"q"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => KeyCode::F(s[1..].parse().ok()?),
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Playground configuration: keybindings and change-log size.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// How many change notifications the log pane keeps.
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(Decrease, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(Increase, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(SwitchHandle, vec![KeyBind::new(Tab, n)]);
        m.insert(ToggleReversed, vec![KeyBind::new(Char('r'), n)]);
        m.insert(ToggleSmooth, vec![KeyBind::new(Char('s'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Action bound to a key event.  The binding with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, bind)| bind.matches(event))
            .max_by_key(|(_, bind)| bind.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: step | {}: handle | {}: reverse | {}: smooth | {}: quit | drag with mouse",
            self.short_binding(Action::Decrease),
            self.short_binding(Action::Increase),
            self.short_binding(Action::SwitchHandle),
            self.short_binding(Action::ToggleReversed),
            self.short_binding(Action::ToggleSmooth),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.  On first run the
    /// defaults are written out so there is a file to edit.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                match config.save_to(path) {
                    Ok(()) => tracing::debug!("wrote default config to {}", path.display()),
                    Err(err) => tracing::warn!("could not write default config: {err:#}"),
                }
                config
            }
            Err(err) => {
                tracing::warn!("could not read config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Persist config to `path`, creating parent directories.
    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, self.serialise())
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            if key == "log_capacity" {
                if let Ok(v) = value.parse::<usize>() {
                    config.log_capacity = v.clamp(5, 500);
                }
                continue;
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!("unknown config key {key:?}");
                continue;
            };
            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# range-slider configuration".to_string(),
            String::new(),
            format!("log_capacity = {}", self.log_capacity),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(KeyBind::display).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/range-slider/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("range-slider").join("config.toml")
}
