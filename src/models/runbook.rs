use serde::{Deserialize, Serialize};

/// One preparation task on the event timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunbookItem {
    /// Relative time marker, e.g. "T-2 days", "T-1.5 hours", "T-0".
    pub timeline: String,
    pub activity: String,
    pub beginner_steps: String,
    pub advanced_steps: String,
    pub estimated_duration: String,
    pub notes: String,
    pub hover_text: String,
    pub has_beginner: bool,
    pub has_advanced: bool,
    pub completed: bool,
}

impl RunbookItem {
    pub fn new(timeline: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            timeline: timeline.into(),
            activity: activity.into(),
            ..Default::default()
        }
    }

    /// Step text for the chosen level, falling back to the activity itself.
    pub fn steps(&self, advanced: bool) -> &str {
        let steps = if advanced {
            &self.advanced_steps
        } else {
            &self.beginner_steps
        };
        if steps.trim().is_empty() {
            &self.activity
        } else {
            steps
        }
    }
}
