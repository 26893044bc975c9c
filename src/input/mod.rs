//! Input handling
//!
//! Keybinding presets for moving between fields and stepping through units.
//! Letter bindings only apply on unit selectors; text fields take letters
//! as typed input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPreset {
    /// Vim-style (j/k/h/l) + arrow keys (default)
    #[default]
    Vim,
    /// Arrow keys only
    Arrows,
    /// Emacs-style (Ctrl+n/p/f/b) + arrow keys
    Emacs,
}

impl KeyPreset {
    pub const ALL: [KeyPreset; 3] = [KeyPreset::Vim, KeyPreset::Arrows, KeyPreset::Emacs];

    pub fn name(&self) -> &'static str {
        match self {
            KeyPreset::Vim => "Vim (hjkl)",
            KeyPreset::Arrows => "Arrows",
            KeyPreset::Emacs => "Emacs (C-npfb)",
        }
    }

    /// Parse key preset from name string (case-insensitive)
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "vim" | "vi" => KeyPreset::Vim,
            "arrows" | "arrow" => KeyPreset::Arrows,
            "emacs" => KeyPreset::Emacs,
            other => {
                let known: Vec<_> = KeyPreset::ALL.iter().map(|p| p.name()).collect();
                tracing::warn!("Unknown key preset {:?}, expected one of {:?}", other, known);
                KeyPreset::default()
            }
        }
    }

    fn letter(&self, key: &KeyEvent, vim: char, emacs: char) -> bool {
        match (self, key.code) {
            (KeyPreset::Vim, KeyCode::Char(c)) => c == vim && key.modifiers.is_empty(),
            (KeyPreset::Emacs, KeyCode::Char(c)) => {
                c == emacs && key.modifiers.contains(KeyModifiers::CONTROL)
            }
            _ => false,
        }
    }

    /// Focus the previous field. With `typing`, only arrows count.
    pub fn is_prev_field(&self, key: &KeyEvent, typing: bool) -> bool {
        key.code == KeyCode::Up
            || key.code == KeyCode::BackTab
            || (!typing && self.letter(key, 'k', 'p'))
    }

    /// Focus the next field. With `typing`, only arrows count.
    pub fn is_next_field(&self, key: &KeyEvent, typing: bool) -> bool {
        matches!(key.code, KeyCode::Down | KeyCode::Tab)
            || (!typing && self.letter(key, 'j', 'n'))
    }

    /// Select the previous unit
    pub fn is_prev_unit(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Left || self.letter(key, 'h', 'b')
    }

    /// Select the next unit
    pub fn is_next_unit(&self, key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Right | KeyCode::Char(' ')) || self.letter(key, 'l', 'f')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn key_ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_vim_hjkl_on_selectors() {
        let preset = KeyPreset::Vim;
        assert!(preset.is_next_field(&key(KeyCode::Char('j')), false));
        assert!(preset.is_prev_field(&key(KeyCode::Char('k')), false));
        assert!(preset.is_prev_unit(&key(KeyCode::Char('h'))));
        assert!(preset.is_next_unit(&key(KeyCode::Char('l'))));
    }

    #[test]
    fn test_letters_ignored_while_typing() {
        let preset = KeyPreset::Vim;
        assert!(!preset.is_next_field(&key(KeyCode::Char('j')), true));
        assert!(!preset.is_prev_field(&key(KeyCode::Char('k')), true));
        assert!(preset.is_next_field(&key(KeyCode::Down), true));
        assert!(preset.is_prev_field(&key(KeyCode::Up), true));
    }

    #[test]
    fn test_tab_moves_focus_in_every_preset() {
        for preset in KeyPreset::ALL {
            assert!(preset.is_next_field(&key(KeyCode::Tab), true));
            assert!(preset.is_prev_field(&key(KeyCode::BackTab), true));
        }
    }

    #[test]
    fn test_arrows_preset_ignores_letters() {
        let preset = KeyPreset::Arrows;
        assert!(!preset.is_next_field(&key(KeyCode::Char('j')), false));
        assert!(!preset.is_prev_unit(&key(KeyCode::Char('h'))));
        assert!(preset.is_prev_unit(&key(KeyCode::Left)));
        assert!(preset.is_next_unit(&key(KeyCode::Right)));
    }

    #[test]
    fn test_emacs_requires_ctrl() {
        let preset = KeyPreset::Emacs;
        assert!(!preset.is_next_field(&key(KeyCode::Char('n')), false));
        assert!(!preset.is_next_unit(&key(KeyCode::Char('f'))));
        assert!(preset.is_next_field(&key_ctrl('n'), false));
        assert!(preset.is_prev_field(&key_ctrl('p'), false));
        assert!(preset.is_next_unit(&key_ctrl('f')));
        assert!(preset.is_prev_unit(&key_ctrl('b')));
    }

    #[test]
    fn test_space_steps_unit() {
        for preset in KeyPreset::ALL {
            assert!(preset.is_next_unit(&key(KeyCode::Char(' '))));
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(KeyPreset::from_name("VIM"), KeyPreset::Vim);
        assert_eq!(KeyPreset::from_name("arrow"), KeyPreset::Arrows);
        assert_eq!(KeyPreset::from_name("Emacs"), KeyPreset::Emacs);
        assert_eq!(KeyPreset::from_name("qwerty"), KeyPreset::Vim);
    }
}
