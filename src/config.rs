//! User configuration — keybindings, deck options and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/glowdeck/config.toml` (default `~/.config/glowdeck/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NextSlide,
    PrevSlide,
    FocusNext,
    FocusPrev,
    Increment,
    Decrement,
    Submit,
    ToggleHelp,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the help popup).
    pub const ALL: &[Action] = &[
        Action::NextSlide,
        Action::PrevSlide,
        Action::FocusNext,
        Action::FocusPrev,
        Action::Increment,
        Action::Decrement,
        Action::Submit,
        Action::ToggleHelp,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::NextSlide => "Next Slide",
            Action::PrevSlide => "Previous Slide",
            Action::FocusNext => "Next Field",
            Action::FocusPrev => "Previous Field",
            Action::Increment => "Increase Value",
            Action::Decrement => "Decrease Value",
            Action::Submit => "Submit / Confirm",
            Action::ToggleHelp => "Show Controls",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::NextSlide => "next_slide",
            Action::PrevSlide => "prev_slide",
            Action::FocusNext => "focus_next",
            Action::FocusPrev => "focus_prev",
            Action::Increment => "increment",
            Action::Decrement => "decrement",
            Action::Submit => "submit",
            Action::ToggleHelp => "toggle_help",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Modifiers that take part in matching.  SHIFT is already folded into the
/// character for `Char` keys (and into the code for `BackTab`), so it is
/// dropped there.
fn significant_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    let mask = match code {
        KeyCode::Char(_) | KeyCode::BackTab => KeyModifiers::CONTROL | KeyModifiers::ALT,
        _ => KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT,
    };
    modifiers & mask
}

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers: significant_modifiers(code, modifiers),
        }
    }

    /// Does this binding match a key event?
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code
            && self.modifiers == significant_modifiers(event.code, event.modifiers)
    }

    fn key_name(&self, pretty: bool) -> String {
        match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up if pretty => "↑".into(),
            KeyCode::Down if pretty => "↓".into(),
            KeyCode::Left if pretty => "←".into(),
            KeyCode::Right if pretty => "→".into(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::BackTab if pretty => "Shift+Tab".into(),
            KeyCode::BackTab => "BackTab".into(),
            KeyCode::Backspace => "Backspace".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp if pretty => "PgUp".into(),
            KeyCode::PageDown if pretty => "PgDn".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }

    fn modifier_prefix(&self) -> String {
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
        s
    }

    /// User-friendly display string (e.g. `"Alt+→"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        format!("{}{}", self.modifier_prefix(), self.key_name(true))
    }

    /// Serialise to config-file format (e.g. `"Alt+Right"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        format!("{}{}", self.modifier_prefix(), self.key_name(false))
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        // A lone "+" is the plus key, not a modifier separator.
        let (mod_part, key_part) = match s.rsplit_once('+') {
            Some((mods, "")) => (mods.strip_suffix('+'), "+"),
            Some((mods, key)) => (Some(mods), key),
            None => (None, s),
        };

        if let Some(mods) = mod_part.filter(|m| !m.is_empty()) {
            for part in mods.split('+') {
                match part.to_lowercase().as_str() {
                    "ctrl" => modifiers |= KeyModifiers::CONTROL,
                    "alt" => modifiers |= KeyModifiers::ALT,
                    "shift" => modifiers |= KeyModifiers::SHIFT,
                    _ => return None,
                }
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => {
                let n: u8 = k[1..].parse().ok()?;
                KeyCode::F(n)
            }
            // Keep the original case so `Q` and `q` stay distinct.
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind::new(code, modifiers))
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings and deck options.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Include the interactive scoring slide in the deck.
    pub include_demo: bool,
    /// Clamp typed demo inputs into each field's nominal range.
    pub clamp_inputs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            include_demo: true,
            clamp_inputs: false,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(
            NextSlide,
            vec![KeyBind::new(Right, n), KeyBind::new(PageDown, n), KeyBind::new(Char('l'), n)],
        );
        m.insert(
            PrevSlide,
            vec![KeyBind::new(Left, n), KeyBind::new(PageUp, n), KeyBind::new(Char('h'), n)],
        );
        m.insert(FocusNext, vec![KeyBind::new(Tab, n), KeyBind::new(Down, n)]);
        m.insert(FocusPrev, vec![KeyBind::new(BackTab, n), KeyBind::new(Up, n)]);
        // `-` is left free: on a form field it starts typing a negative number.
        m.insert(
            Increment,
            vec![KeyBind::new(Char('+'), n), KeyBind::new(Char('='), n), KeyBind::new(Char(']'), n)],
        );
        m.insert(Decrement, vec![KeyBind::new(Char('['), n)]);
        m.insert(Submit, vec![KeyBind::new(Enter, n)]);
        m.insert(ToggleHelp, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for &action in Action::ALL {
            let Some(binds) = self.bindings.get(&action) else {
                continue;
            };
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Format the binding list for a given action (e.g. `"→/PgDn/l"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
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
            "{}/{}: slides | {}: controls | {}: quit",
            self.short_binding(Action::PrevSlide),
            self.short_binding(Action::NextSlide),
            self.short_binding(Action::ToggleHelp),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&config_path())
    }

    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let result = (|| -> anyhow::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, self.serialise())?;
            Ok(())
        })();
        if let Err(err) = &result {
            tracing::warn!(path = %path.display(), %err, "could not save config");
        }
        result
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
            let key = key.trim();
            let value = value.trim();

            match key {
                "include_demo" => {
                    match value.parse::<bool>() {
                        Ok(b) => config.include_demo = b,
                        Err(_) => tracing::warn!(value, "include_demo: expected true/false, keeping default"),
                    }
                    continue;
                }
                "clamp_inputs" => {
                    match value.parse::<bool>() {
                        Ok(b) => config.clamp_inputs = b,
                        Err(_) => tracing::warn!(value, "clamp_inputs: expected true/false, keeping default"),
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::debug!(key, "ignoring unknown config key");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .map(|part| part.trim().trim_matches('"'))
                .filter_map(KeyBind::parse)
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# glowdeck configuration".to_string(),
            String::new(),
            "# Deck".to_string(),
            format!("include_demo = {}", self.include_demo),
            format!("clamp_inputs = {}", self.clamp_inputs),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab, BackTab,".to_string(),
            "#   Backspace, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/glowdeck/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("glowdeck").join("config.toml")
}
