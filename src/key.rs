/// Key codes representing individual keys on the keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes,
/// or pass a web-style key name through [`KeyCode::from_key_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key, as typed (case preserved).
    Char(char),
    Backspace,
    Tab,
    /// The Escape key.
    Esc,
    End,
    Home,
    Left,
    Right,
    Up,
    Down,
    Delete,
    Enter,
    /// A named key the mask has no use for (function keys, modifiers alone, ...).
    Other,
}

impl KeyCode {
    /// Maps a web-style key name (`"ArrowLeft"`, `"Escape"`, `"7"`) to a key code.
    ///
    /// Single-character names become [`KeyCode::Char`]. Unknown multi-character
    /// names map to [`KeyCode::Other`]. An empty name yields `None`, which means
    /// "no direct key signal" and lets [`KeyEvent::identity`] fall back to the
    /// legacy code.
    pub fn from_key_name(name: &str) -> Option<KeyCode> {
        let mut chars = name.chars();
        let first = chars.next()?;
        if chars.next().is_none() {
            return Some(KeyCode::Char(first));
        }
        Some(match name {
            "Backspace" => KeyCode::Backspace,
            "Tab" => KeyCode::Tab,
            "Escape" | "Esc" => KeyCode::Esc,
            "End" => KeyCode::End,
            "Home" => KeyCode::Home,
            "ArrowLeft" | "Left" => KeyCode::Left,
            "ArrowRight" | "Right" => KeyCode::Right,
            "ArrowUp" | "Up" => KeyCode::Up,
            "ArrowDown" | "Down" => KeyCode::Down,
            "Delete" | "Del" => KeyCode::Delete,
            "Enter" => KeyCode::Enter,
            _ => KeyCode::Other,
        })
    }

    /// Keys that keep their default editing/navigation behavior regardless of
    /// the field content.
    pub fn is_navigation(self) -> bool {
        NAVIGATION_KEYS.contains(&self)
    }
}

/// Editing and navigation keys that are always allowed through.
pub const NAVIGATION_KEYS: [KeyCode; 8] = [
    KeyCode::Backspace,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Esc,
    KeyCode::Tab,
    KeyCode::Delete,
    KeyCode::Home,
    KeyCode::End,
];

/// Select-all, cut, copy and paste shortcut letters (caps lock on or off).
pub const CLIPBOARD_SHORTCUT_KEYS: [char; 8] = ['a', 'x', 'c', 'v', 'A', 'X', 'C', 'V'];

/// Key names for the deprecated numeric `keyCode` some older hosts still report.
///
/// Only consulted when an event carries no direct key name.
pub const LEGACY_KEY_CODES: [(u32, &str); 13] = [
    (8, "Backspace"),
    (9, "Tab"),
    (27, "Escape"),
    (35, "End"),
    (36, "Home"),
    (37, "ArrowLeft"),
    (39, "ArrowRight"),
    (46, "Delete"),
    (188, ","),
    (190, "."),
    (109, "-"), // numpad minus
    (173, "-"), // minus, firefox
    (189, "-"), // minus, chrome
];

/// Looks up a legacy numeric key code.
pub fn legacy_key_name(code: u32) -> Option<&'static str> {
    LEGACY_KEY_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    pub fn is_command(self) -> bool {
        self.intersects(Modifiers::CTRL | Modifiers::META)
    }
}

/// A key press event with optional modifiers.
///
/// `code` is the direct key signal. Hosts that only know the deprecated numeric
/// key code leave `code` empty and fill `legacy_code` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed, if the host could name it.
    pub code: Option<KeyCode>,
    /// Numeric key code for hosts without key names.
    pub legacy_code: Option<u32>,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self {
            code: Some(code),
            legacy_code: None,
            mods,
        }
    }

    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), Modifiers::empty())
    }

    pub fn legacy(code: u32, mods: Modifiers) -> Self {
        Self {
            code: None,
            legacy_code: Some(code),
            mods,
        }
    }

    /// Resolves which key this event stands for.
    ///
    /// The direct key wins. Otherwise the legacy table is consulted, and a code
    /// missing from the table is read as a character code.
    pub fn identity(&self) -> Option<KeyCode> {
        if let Some(code) = self.code {
            return Some(code);
        }
        let legacy = self.legacy_code?;
        match legacy_key_name(legacy) {
            Some(name) => KeyCode::from_key_name(name),
            None => char::from_u32(legacy).map(KeyCode::Char),
        }
    }
}

/// Input events the mask reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key is about to be processed by the field.
    KeyDown(KeyEvent),
    /// Text pasted into the field.
    Paste(String),
    /// The field was committed (blur, change) with its current content.
    Change,
}
