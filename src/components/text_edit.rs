/// Modifier keys held during a key press. Chords never edit text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KeyModifiers {
    pub control: bool,
    pub platform: bool,
    pub function: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub fn is_chord(&self) -> bool {
        self.control || self.platform || self.function || self.alt
    }
}

/// Applies one key press to single-line input text.
///
/// `key` is the key name (`"backspace"`, `"a"`, `"space"`), `key_char` the
/// character it produced, if any. Returns the edited text, or `None` when the
/// key does not edit.
pub fn apply_key(
    text: &str,
    key: &str,
    key_char: Option<&str>,
    modifiers: KeyModifiers,
) -> Option<String> {
    if modifiers.is_chord() {
        return None;
    }

    match key {
        "backspace" => {
            let mut next = text.to_string();
            next.pop()?;
            Some(next)
        }
        "enter" | "escape" | "tab" | "left" | "right" | "up" | "down" | "home" | "end" => None,
        _ => {
            let inserted = key_char
                .filter(|value| !value.is_empty())
                .or_else(|| (key.chars().count() == 1).then_some(key))
                .or_else(|| (key == "space").then_some(" "))?;
            if inserted.chars().any(char::is_control) {
                return None;
            }
            Some(format!("{text}{inserted}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str, key: &str, key_char: Option<&str>) -> Option<String> {
        apply_key(text, key, key_char, KeyModifiers::default())
    }

    #[test]
    fn printable_keys_append() {
        assert_eq!(plain("an", "n", Some("n")).as_deref(), Some("ann"));
        assert_eq!(plain("an", "n", None).as_deref(), Some("ann"));
        assert_eq!(plain("a", "space", Some(" ")).as_deref(), Some("a "));
        assert_eq!(plain("a", "space", None).as_deref(), Some("a "));
        assert_eq!(plain("", "a", Some("A")).as_deref(), Some("A"));
    }

    #[test]
    fn backspace_removes_last_char() {
        assert_eq!(plain("café", "backspace", None).as_deref(), Some("caf"));
        assert_eq!(plain("", "backspace", None), None);
    }

    #[test]
    fn navigation_keys_and_chords_do_not_edit() {
        assert_eq!(plain("ab", "left", None), None);
        assert_eq!(plain("ab", "enter", Some("\n")), None);
        let chord = KeyModifiers {
            control: true,
            ..KeyModifiers::default()
        };
        assert_eq!(apply_key("ab", "c", Some("c"), chord), None);
    }
}
