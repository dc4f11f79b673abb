//! Terminal UI example using crossterm and ratatui.
//!
//! This example demonstrates how to put numeric_mask in front of a terminal text field.
//! Run with: cargo run --example tui_crossterm
//!
//! Enter or Tab commits the field, Ctrl+V pastes from the demo clipboard, Ctrl+Q quits,
//! F2 toggles the decimal sign, F3 toggles negatives, F4 toggles decimals.

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use numeric_mask::{
    Config, DecimalSign, FieldHost, KeyCode, KeyEvent, Modifiers, NumberMask, TextField,
    Validation, Verdict, traits::Clipboard,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

/// Simple clipboard implementation using an internal buffer
struct SimpleClipboard {
    content: Option<String>,
}

impl Clipboard for SimpleClipboard {
    fn get(&mut self) -> Option<String> {
        self.content.clone()
    }
}

struct App {
    mask: NumberMask,
    field: TextField,
    clipboard: SimpleClipboard,
    message: String,
    should_quit: bool,
}

impl App {
    fn new() -> Result<Self, numeric_mask::MaskError> {
        let config = Config::builder()
            .allow_empty(false)
            .bounds(-1000.0, 1000.0)
            .build()?;
        let mut mask = NumberMask::new(config)?;
        let mut field = TextField::new("");
        mask.attach(&mut field)?;
        Ok(Self {
            mask,
            field,
            clipboard: SimpleClipboard {
                content: Some(" 00042,5 ".to_string()),
            },
            message: String::new(),
            should_quit: false,
        })
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        match event.code {
            CKeyCode::Enter | CKeyCode::Tab => {
                self.mask.on_change(&mut self.field);
                self.message = format!("committed {:?}", self.field.value());
                return;
            }
            CKeyCode::Char('v') | CKeyCode::Char('V')
                if event.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.mask
                    .on_paste_from_clipboard(&mut self.field, &mut self.clipboard);
                self.message = format!("pasted {:?}", self.field.value());
                return;
            }
            CKeyCode::Char('q') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            CKeyCode::F(n @ 2..=4) => {
                self.toggle(n);
                return;
            }
            _ => {}
        }

        let Some(key) = convert_crossterm_event(event) else {
            return;
        };
        match self.mask.on_key_down(&self.field, &key) {
            Verdict::Allow => self.field.apply_key(&key),
            Verdict::Prevent => self.message = format!("rejected {:?}", key.identity()),
        }
    }

    fn toggle(&mut self, f_key: u8) {
        let current = *self.mask.config();
        let builder = current.to_builder();
        let builder = match f_key {
            2 => builder.decimal_sign(match current.decimal_sign() {
                DecimalSign::Point => DecimalSign::Comma,
                DecimalSign::Comma => DecimalSign::Point,
            }),
            3 => builder.allow_negative(!current.allow_negative()),
            _ => builder.allow_decimals(!current.allow_decimals()),
        };
        let result = builder
            .build()
            .map(|config| config.with_non_negative_bounds())
            .and_then(|config| self.mask.configure(&mut self.field, config));
        self.message = match result {
            Ok(()) => format!("reconfigured: {:?}", self.mask.snapshot().active),
            Err(err) => err.to_string(),
        };
    }
}

fn convert_crossterm_event(event: CKeyEvent) -> Option<KeyEvent> {
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }

    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        _ => return None,
    };
    Some(KeyEvent::new(code, mods))
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    let input = Paragraph::new(app.field.value()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("numeric_mask demo"),
    );
    f.render_widget(input, chunks[0]);

    let snapshot = app.mask.snapshot();
    let config = snapshot.config;
    let validation = match app.field.last_validation() {
        Some(Validation::Invalid(err)) => Span::styled(
            err.host_message(),
            Style::default().fg(Color::Red),
        ),
        _ => Span::styled("ok", Style::default().fg(Color::Green)),
    };
    let info = Paragraph::new(vec![
        Line::from(format!(
            "pattern {:?} | sign '{}' | places {} | range [{}, {}]",
            snapshot.active,
            config.decimal_sign().as_char(),
            config.decimal_places().get(),
            config.min(),
            config.max(),
        )),
        Line::from(vec![Span::raw("validation: "), validation]),
    ])
    .block(Block::default().borders(Borders::ALL).title("config"));
    f.render_widget(info, chunks[1]);

    let status = Paragraph::new(app.message.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    f.set_cursor(
        chunks[0].x + 1 + app.field.cursor() as u16,
        chunks[0].y + 1,
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut app = App::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            app.handle_crossterm_event(key);

            if app.should_quit {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
