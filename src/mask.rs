use crate::config::Config;
use crate::error::MaskError;
use crate::filter::should_accept;
use crate::key::{InputEvent, KeyEvent};
use crate::normalize::normalize;
use crate::pattern::PatternKind;
use crate::resolver::{ResolvedConfig, Validation};
use crate::traits::{Clipboard, FieldHost};

/// What the host should do with the event's default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Let the host insert the character / perform the edit.
    Allow,
    /// Suppress the host's default handling.
    Prevent,
}

/// A numeric input mask bound to one text field at a time.
///
/// The host forwards its events here, one method per event kind, and applies
/// the returned [`Verdict`]. Commit events write the canonical value back
/// through [`FieldHost::set_value`].
#[derive(Debug, Clone)]
pub struct NumberMask {
    resolved: ResolvedConfig,
    validation: Validation,
}

#[derive(Debug, Clone)]
pub struct MaskSnapshot {
    pub config: Config,
    pub active: PatternKind,
    pub validation: Validation,
}

#[derive(Debug, Clone, Default)]
pub struct NumberMaskBuilder {
    config: Config,
}

impl NumberMaskBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<NumberMask, MaskError> {
        let resolved = ResolvedConfig::resolve(self.config)?;
        Ok(NumberMask {
            validation: resolved.validation(),
            resolved,
        })
    }
}

impl NumberMask {
    pub fn new(config: Config) -> Result<Self, MaskError> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> NumberMaskBuilder {
        NumberMaskBuilder::default()
    }

    pub fn snapshot(&self) -> MaskSnapshot {
        MaskSnapshot {
            config: *self.resolved.config(),
            active: self.resolved.active(),
            validation: self.validation.clone(),
        }
    }

    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }

    pub fn config(&self) -> &Config {
        self.resolved.config()
    }

    /// Binds the mask to `host`.
    ///
    /// A host that cannot hold free text is refused and told so. Otherwise the
    /// bounds check is reported and, when it passes, the field starts from the
    /// empty value.
    pub fn attach<H: FieldHost>(&mut self, host: &mut H) -> Result<(), MaskError> {
        if !host.accepts_text() {
            let err = MaskError::InvalidHostKind;
            log::warn!("{err}");
            self.validation = Validation::Invalid(err.clone());
            host.emit_validation(&self.validation);
            return Err(err);
        }
        self.validation = self.resolved.validation();
        host.emit_validation(&self.validation);
        if self.validation.is_ok() {
            host.set_value(self.reset_value());
        }
        Ok(())
    }

    /// Applies a new configuration.
    ///
    /// Bounds are re-checked and reported when `min` or `max` changed. Any
    /// change resets the field to the empty value, unless the bounds are
    /// invalid, in which case the field is left as it is.
    pub fn configure<H: FieldHost>(&mut self, host: &mut H, config: Config) -> Result<(), MaskError> {
        let previous = *self.resolved.config();
        if previous == config {
            return Ok(());
        }
        self.resolved.update(config)?;
        if previous.min() != config.min() || previous.max() != config.max() {
            self.validation = self.resolved.validation();
            host.emit_validation(&self.validation);
        }
        if self.validation.is_ok() {
            host.set_value(self.reset_value());
        }
        Ok(())
    }

    /// Empty string or the zero sentinel.
    pub fn reset_value(&self) -> String {
        normalize("", &self.resolved)
    }

    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw, &self.resolved)
    }

    pub fn on_key_down<H: FieldHost>(&self, host: &H, key: &KeyEvent) -> Verdict {
        if should_accept(key, &host.field_state(), &self.resolved) {
            Verdict::Allow
        } else {
            log::debug!("suppressed key {:?}", key.identity());
            Verdict::Prevent
        }
    }

    /// Replaces the field with the normalized pasted text.
    ///
    /// Always returns [`Verdict::Prevent`]: the raw text never reaches the field.
    pub fn on_paste<H: FieldHost>(&self, host: &mut H, text: &str) -> Verdict {
        self.commit(host, text);
        Verdict::Prevent
    }

    /// Pastes whatever `clipboard` holds; an empty clipboard pastes "".
    pub fn on_paste_from_clipboard<H: FieldHost, C: Clipboard>(
        &self,
        host: &mut H,
        clipboard: &mut C,
    ) -> Verdict {
        let text = clipboard.get().unwrap_or_default();
        self.on_paste(host, &text)
    }

    /// Normalizes the field's current content in place (blur, change).
    pub fn on_change<H: FieldHost>(&self, host: &mut H) {
        let raw = host.value().to_string();
        self.commit(host, &raw);
    }

    pub fn handle_event<H: FieldHost>(&self, host: &mut H, event: InputEvent) -> Verdict {
        match event {
            InputEvent::KeyDown(key) => self.on_key_down(host, &key),
            InputEvent::Paste(text) => self.on_paste(host, &text),
            InputEvent::Change => {
                self.on_change(host);
                Verdict::Allow
            }
        }
    }

    fn commit<H: FieldHost>(&self, host: &mut H, raw: &str) {
        let canonical = normalize(raw, &self.resolved);
        log::trace!("commit {raw:?} -> {canonical:?}");
        host.set_value(canonical);
    }
}
