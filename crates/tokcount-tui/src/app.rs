use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokcount_engine::Session;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    pub session: Session,
    pub breakdown_scroll: u16,
    /// Largest useful scroll offset, updated on every draw
    breakdown_max_scroll: u16,
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            breakdown_scroll: 0,
            breakdown_max_scroll: 0,
            show_help: false,
            status_message: None,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Control {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.toggle_help();
            }
            return Control::Continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if ctrl => return Control::Quit,
            KeyCode::Char('e') if ctrl => self.load_example(),
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Up if ctrl => self.scroll_up(1),
            KeyCode::Down if ctrl => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::F(1) => self.toggle_help(),
            KeyCode::Tab => self.next_model(),
            KeyCode::BackTab => self.previous_model(),
            KeyCode::Enter => self.session.newline(),
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Char(c) if !ctrl => self.session.push_char(c),
            _ => {}
        }
        Control::Continue
    }

    /// Append pasted text in one edit instead of one per char
    pub fn paste(&mut self, text: &str) {
        let mut input = self.session.input_text().to_string();
        input.push_str(&text.replace("\r\n", "\n"));
        self.session.edit(input);
    }

    pub fn load_example(&mut self) {
        self.session.load_example();
        self.breakdown_scroll = 0;
        self.status_message = Some("Example loaded".to_string());
    }

    pub fn clear(&mut self) {
        self.session.clear();
        self.breakdown_scroll = 0;
        self.status_message = Some("Cleared".to_string());
    }

    pub fn next_model(&mut self) {
        self.session.next_model();
        self.status_message = None;
    }

    pub fn previous_model(&mut self) {
        self.session.previous_model();
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.breakdown_scroll = self.breakdown_scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.breakdown_scroll = self
            .breakdown_scroll
            .saturating_add(lines)
            .min(self.breakdown_max_scroll);
    }

    pub fn set_max_scroll(&mut self, max: u16) {
        self.breakdown_max_scroll = max;
        self.breakdown_scroll = self.breakdown_scroll.min(max);
    }
}
