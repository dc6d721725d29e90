use serde::{Deserialize, Serialize};

use super::error::CaptureError;

/// Tie-break policy used when several windows match a capture target.
///
/// Stored as a small integer in the settings blob so it stays compatible
/// with hosts that persist the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum WindowPriority {
    /// Match on window class first.
    #[default]
    Class,
    /// Match on window title first.
    Title,
    /// Match on the owning executable first.
    Executable,
}

impl From<WindowPriority> for i64 {
    fn from(priority: WindowPriority) -> Self {
        match priority {
            WindowPriority::Class => 0,
            WindowPriority::Title => 1,
            WindowPriority::Executable => 2,
        }
    }
}

impl TryFrom<i64> for WindowPriority {
    type Error = CaptureError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Class),
            1 => Ok(Self::Title),
            2 => Ok(Self::Executable),
            other => Err(CaptureError::InvalidSettings(format!(
                "unknown window priority: {}",
                other
            ))),
        }
    }
}

/// Settings snapshot handed to the child audio source.
///
/// `target` is an encoded window identity (see `WindowIdentity::encode`).
/// An absent or empty target means "no specific window".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioCaptureSettings {
    #[serde(rename = "window", default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default)]
    pub priority: WindowPriority,
}

impl AudioCaptureSettings {
    pub fn new(target: impl Into<String>, priority: WindowPriority) -> Self {
        Self {
            target: Some(target.into()),
            priority,
        }
    }

    /// The target string, with an absent target read as empty.
    pub fn target_str(&self) -> &str {
        self.target.as_deref().unwrap_or("")
    }

    /// Whether a concrete window target is set.
    pub fn has_target(&self) -> bool {
        !self.target_str().is_empty()
    }

    pub fn to_json(&self) -> Result<String, CaptureError> {
        serde_json::to_string(self)
            .map_err(|e| CaptureError::InvalidSettings(format!("failed to serialize settings: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self, CaptureError> {
        serde_json::from_str(json)
            .map_err(|e| CaptureError::InvalidSettings(format!("failed to parse settings: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_integer_values() {
        assert_eq!(i64::from(WindowPriority::Class), 0);
        assert_eq!(i64::from(WindowPriority::Title), 1);
        assert_eq!(i64::from(WindowPriority::Executable), 2);
        assert_eq!(WindowPriority::try_from(1i64), Ok(WindowPriority::Title));
    }

    #[test]
    fn unknown_priority_rejected() {
        assert!(matches!(
            WindowPriority::try_from(7i64),
            Err(CaptureError::InvalidSettings(_))
        ));
    }

    #[test]
    fn empty_target_is_not_a_target() {
        let settings = AudioCaptureSettings::new("", WindowPriority::Title);
        assert!(!settings.has_target());
        assert!(!AudioCaptureSettings::default().has_target());
        assert_eq!(AudioCaptureSettings::default().target_str(), "");
    }

    #[test]
    fn json_uses_window_and_integer_priority() {
        let settings = AudioCaptureSettings::new("Notepad:Notepad:notepad.exe", WindowPriority::Title);

        let json = settings.to_json().unwrap();

        assert_eq!(json, r#"{"window":"Notepad:Notepad:notepad.exe","priority":1}"#);
        assert_eq!(AudioCaptureSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn json_without_window_omits_field() {
        let json = AudioCaptureSettings::default().to_json().unwrap();
        assert_eq!(json, r#"{"priority":0}"#);
    }

    #[test]
    fn json_with_bad_priority_fails() {
        let err = AudioCaptureSettings::from_json(r#"{"window":"a","priority":9}"#).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidSettings(_)));
    }
}
