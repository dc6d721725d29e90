use crate::traits::window_inspector::WindowInspector;

/// Separator between the encoded identity fields.
pub const IDENTITY_DELIMITER: char = ':';

/// Character that introduces an escape sequence inside a field.
pub const ESCAPE_INTRODUCER: char = '#';

const ESCAPED_INTRODUCER: &str = "#22";
const ESCAPED_DELIMITER: &str = "#3A";

/// Identity of a capture target window.
///
/// Encoded as `title:class:exe`, where each field has its own `#` and `:`
/// characters escaped, so every raw `:` in the result is a field separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WindowIdentity {
    pub title: String,
    pub class: String,
    pub executable: String,
}

impl WindowIdentity {
    pub fn new(
        title: impl Into<String>,
        class: impl Into<String>,
        executable: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            class: class.into(),
            executable: executable.into(),
        }
    }

    /// Look up a window's identity. Lookups that fail (e.g. the window has
    /// been closed) come back as empty fields.
    pub fn resolve<I: WindowInspector + ?Sized>(inspector: &I, window: I::Handle) -> Self {
        Self {
            title: inspector.window_title(window),
            class: inspector.window_class(window),
            executable: inspector.window_executable(window),
        }
    }

    /// Encode into the opaque target string stored in capture settings.
    pub fn encode(&self) -> String {
        let mut encoded = String::with_capacity(self.title.len() + self.class.len() + self.executable.len() + 2);
        encoded.push_str(&encode_identity_field(&self.title));
        encoded.push(IDENTITY_DELIMITER);
        encoded.push_str(&encode_identity_field(&self.class));
        encoded.push(IDENTITY_DELIMITER);
        encoded.push_str(&encode_identity_field(&self.executable));
        encoded
    }
}

/// Escape a single identity field.
///
/// The escape introducer is replaced first; doing it the other way round
/// would re-escape the `#` of every `#3A` sequence.
pub fn encode_identity_field(field: &str) -> String {
    field
        .replace(ESCAPE_INTRODUCER, ESCAPED_INTRODUCER)
        .replace(IDENTITY_DELIMITER, ESCAPED_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_join_with_delimiter() {
        let id = WindowIdentity::new("Notepad", "Notepad", "notepad.exe");
        assert_eq!(id.encode(), "Notepad:Notepad:notepad.exe");
    }

    #[test]
    fn empty_fields_encode_to_empty() {
        assert_eq!(WindowIdentity::default().encode(), "::");
        assert_eq!(WindowIdentity::new("", "Chrome_WidgetWin_1", "").encode(), ":Chrome_WidgetWin_1:");
    }

    #[test]
    fn delimiter_and_introducer_are_escaped() {
        assert_eq!(encode_identity_field("a:b"), "a#3Ab");
        assert_eq!(encode_identity_field("C#"), "C#22");
        assert_eq!(encode_identity_field("#:"), "#22#3A");
    }

    #[test]
    fn introducer_escaped_before_delimiter() {
        // a literal "#3A" in a title must not collide with an escaped ':'
        assert_eq!(encode_identity_field("#3A"), "#223A");
        assert_ne!(encode_identity_field("#3A"), encode_identity_field(":"));
    }

    #[test]
    fn encoded_identity_splits_into_three_fields() {
        let id = WindowIdentity::new(
            "Track: 01 # live",
            "::weird#class::",
            r"C:\Program Files\App#1\app.exe",
        );

        let encoded = id.encode();
        let fields: Vec<&str> = encoded.split(IDENTITY_DELIMITER).collect();

        assert_eq!(fields.len(), 3);
        for field in &fields {
            assert!(!field.contains(IDENTITY_DELIMITER));
            // every '#' must start one of the two escape sequences
            for (i, _) in field.match_indices(ESCAPE_INTRODUCER) {
                let rest = &field[i..];
                assert!(rest.starts_with("#22") || rest.starts_with("#3A"), "bad escape in {field}");
            }
        }
        assert_eq!(fields[0], "Track#3A 01 #22 live");
        assert_eq!(fields[2], r"C#3A\Program Files\App#221\app.exe");
    }
}
