use serde::{Deserialize, Serialize};

/// An extracurricular activity as exposed by the API
///
/// The activity's name is not part of the record; it is the key under which
/// the record is stored in the [`ActivityDirectory`](super::directory::ActivityDirectory).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Free-text description
    pub description: String,
    /// Human-readable meeting times (not parsed)
    pub schedule: String,
    /// Advisory capacity; enrollment is never checked against it
    pub max_participants: u32,
    /// Participant emails in sign-up order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with no participants
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper for seeding initial participants
    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of open spots, saturating at zero when over-subscribed
    pub fn spots_left(&self) -> u32 {
        let enrolled = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(enrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let activity = Activity::new("Chess", "Fridays", 12).with_participants(&["a@mergington.edu"]);
        let value = serde_json::to_value(&activity).unwrap();

        assert_eq!(value["description"], "Chess");
        assert_eq!(value["schedule"], "Fridays");
        assert_eq!(value["max_participants"], 12);
        assert!(value["participants"].is_array());
        assert_eq!(value["participants"][0], "a@mergington.edu");
    }

    #[test]
    fn test_participants_default_to_empty() {
        let activity: Activity = serde_json::from_str(
            r#"{"description": "d", "schedule": "s", "max_participants": 3}"#,
        )
        .unwrap();
        assert!(activity.participants.is_empty());
    }

    #[test]
    fn test_spots_left_saturates() {
        let activity = Activity::new("d", "s", 1).with_participants(&["a", "b"]);
        assert_eq!(activity.spots_left(), 0);
        assert!(activity.has_participant("b"));
        assert!(!activity.has_participant("c"));
    }
}
