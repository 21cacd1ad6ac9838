use crate::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key.code),
            InputMode::NewDirectory | InputMode::NewFile => self.handle_input_key(key.code),
            InputMode::Help => self.handle_help_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.open_selected(),
            KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => self.go_back(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('n') => self.start_create(InputMode::NewDirectory),
            KeyCode::Char('N') => self.start_create(InputMode::NewFile),
            KeyCode::Char('?') => {
                self.help_scroll_position = 0;
                self.input_mode = InputMode::Help;
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.cancel_input(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.help_scroll_position = self.help_scroll_position.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.help_scroll_position = self.help_scroll_position.saturating_sub(1);
            }
            _ => {}
        }
    }
}
