//! Field state as seen by the filter, and an in-memory single-line field.

use unicode_segmentation::UnicodeSegmentation;

use crate::key::{KeyCode, KeyEvent};
use crate::resolver::Validation;
use crate::traits::FieldHost;

/// A read-only view of a text field at the moment a key arrives.
///
/// `cursor` is the caret offset in characters from the start of `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState<'a> {
    pub text: &'a str,
    pub cursor: usize,
}

impl<'a> FieldState<'a> {
    pub fn new(text: &'a str, cursor: usize) -> Self {
        Self {
            text,
            cursor: cursor.min(text.chars().count()),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.text.contains(c)
    }
}

/// A single-line text field kept in memory.
///
/// It plays the host role for tests, benches and demos: it applies the default
/// editing behavior of keys the mask let through and records every validation
/// message it receives.
#[derive(Debug, Clone)]
pub struct TextField {
    value: String,
    /// Caret offset in characters.
    cursor: usize,
    accepts_text: bool,
    validations: Vec<Validation>,
}

impl TextField {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            accepts_text: true,
            validations: Vec::new(),
        }
    }

    /// A host control that cannot hold free text (a checkbox, a select, ...).
    pub fn non_text() -> Self {
        Self {
            accepts_text: false,
            ..Self::new("")
        }
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.set_cursor(cursor);
        self
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.value.chars().count());
    }

    pub fn validations(&self) -> &[Validation] {
        &self.validations
    }

    pub fn last_validation(&self) -> Option<&Validation> {
        self.validations.last()
    }

    /// Runs the default behavior for a key the mask allowed.
    pub fn apply_key(&mut self, key: &KeyEvent) {
        let Some(code) = key.identity() else {
            return;
        };
        match code {
            KeyCode::Char(c) if !key.mods.is_command() => self.insert(c),
            KeyCode::Backspace => {
                let start = self.prev_boundary(self.cursor);
                self.remove_chars(start, self.cursor);
                self.cursor = start;
            }
            KeyCode::Delete => {
                let end = self.next_boundary(self.cursor);
                self.remove_chars(self.cursor, end);
            }
            KeyCode::Left => self.cursor = self.prev_boundary(self.cursor),
            KeyCode::Right => self.cursor = self.next_boundary(self.cursor),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => {}
        }
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn remove_chars(&mut self, start: usize, end: usize) {
        let (start, end) = (self.byte_offset(start), self.byte_offset(end));
        self.value.replace_range(start..end, "");
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Char offsets of every grapheme boundary, including both ends.
    fn boundaries(&self) -> Vec<usize> {
        let mut offsets = vec![0];
        let mut acc = 0;
        for g in self.value.graphemes(true) {
            acc += g.chars().count();
            offsets.push(acc);
        }
        offsets
    }

    fn prev_boundary(&self, cursor: usize) -> usize {
        self.boundaries()
            .into_iter()
            .rev()
            .find(|&b| b < cursor)
            .unwrap_or(0)
    }

    fn next_boundary(&self, cursor: usize) -> usize {
        let len = self.value.chars().count();
        self.boundaries()
            .into_iter()
            .find(|&b| b > cursor)
            .unwrap_or(len)
    }
}

impl FieldHost for TextField {
    fn value(&self) -> &str {
        &self.value
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_value(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.value = value;
    }

    fn emit_validation(&mut self, validation: &Validation) {
        self.validations.push(validation.clone());
    }

    fn accepts_text(&self) -> bool {
        self.accepts_text
    }
}
