//! Per-keystroke decision: may this key reach the field?

use crate::field::FieldState;
use crate::key::{CLIPBOARD_SHORTCUT_KEYS, KeyCode, KeyEvent};
use crate::pattern::PatternKind;
use crate::resolver::ResolvedConfig;

/// Decides whether `key` may run its default behavior on `field`.
///
/// Navigation and editing keys always pass. A digit passes when it matches the
/// unsigned-integer pattern. The decimal separator and the minus sign pass only
/// where they keep the content a well-formed number, and clipboard shortcuts
/// pass only with Ctrl or Command held. Everything else is rejected.
pub fn should_accept(key: &KeyEvent, field: &FieldState<'_>, resolved: &ResolvedConfig) -> bool {
    let Some(code) = key.identity() else {
        return false;
    };
    if code.is_navigation() {
        return true;
    }
    let KeyCode::Char(c) = code else {
        return false;
    };

    let active = resolved.active();
    let has_negative = field.contains('-');
    let separator = resolved.config().decimal_sign().as_char();

    if c == separator
        && active.is_decimal()
        && !field.contains(separator)
        && !(has_negative && field.cursor <= 1)
    {
        return true;
    }

    if c == '-' && active.is_signed() && !has_negative && field.cursor == 0 {
        return true;
    }

    if CLIPBOARD_SHORTCUT_KEYS.contains(&c) && key.mods.is_command() {
        return true;
    }

    let mut buf = [0u8; 4];
    resolved
        .patterns()
        .is_match(PatternKind::UnsignedInteger, c.encode_utf8(&mut buf))
}
