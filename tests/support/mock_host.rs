use numeric_mask::resolver::Validation;
use numeric_mask::traits::FieldHost;

/// A host that records every write and validation message it receives.
#[derive(Debug, Clone)]
pub struct MockHost {
    value: String,
    cursor: usize,
    text_input: bool,
    pub writes: Vec<String>,
    pub messages: Vec<String>,
}

impl MockHost {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            text_input: true,
            writes: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn checkbox() -> Self {
        Self {
            text_input: false,
            ..Self::new("")
        }
    }
}

impl FieldHost for MockHost {
    fn value(&self) -> &str {
        &self.value
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_value(&mut self, value: String) {
        self.writes.push(value.clone());
        self.cursor = value.chars().count();
        self.value = value;
    }

    fn emit_validation(&mut self, validation: &Validation) {
        self.messages.push(validation.message());
    }

    fn accepts_text(&self) -> bool {
        self.text_input
    }
}
