use crate::field::FieldState;
use crate::resolver::Validation;

/// The text control a mask is attached to.
///
/// The host owns the field content; the mask reads it on every event and
/// replaces it wholesale on commit.
pub trait FieldHost {
    /// Current field content.
    fn value(&self) -> &str;
    /// Caret offset in characters.
    fn cursor(&self) -> usize;

    /// Replaces the whole field content.
    fn set_value(&mut self, value: String);

    /// Receives the result of a configuration or host check.
    fn emit_validation(&mut self, validation: &Validation);

    /// Whether the control holds free single-line text.
    fn accepts_text(&self) -> bool {
        true
    }

    fn field_state(&self) -> FieldState<'_> {
        FieldState::new(self.value(), self.cursor())
    }
}

/// Source of pasted text.
pub trait Clipboard {
    fn get(&mut self) -> Option<String>;
}

/// The operating system clipboard.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, arboard::Error> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn get(&mut self) -> Option<String> {
        match self.inner.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                log::debug!("clipboard read failed: {err}");
                None
            }
        }
    }
}
