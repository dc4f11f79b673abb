use numeric_mask::traits::Clipboard;

#[derive(Default, Debug, Clone)]
pub struct MockClipboard {
    content: Option<String>,
    reads: usize,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            content: Some(text.to_string()),
            reads: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Clipboard for MockClipboard {
    fn get(&mut self) -> Option<String> {
        self.reads += 1;
        self.content.clone()
    }
}
