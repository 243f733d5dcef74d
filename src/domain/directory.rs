use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::Serialize;

use crate::domain::activity::Activity;
use crate::domain::error::{DirectoryError, SeedError};

/// The Activity Directory holds every activity offered by the school, keyed
/// by name. Activities are fixed at construction; only participant lists
/// change afterwards.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ActivityDirectory {
    /// Activities by name
    activities: BTreeMap<String, Activity>,
}

impl ActivityDirectory {
    /// Build a directory from seed entries, rejecting entries that break the
    /// directory invariants
    pub fn from_seed<I>(entries: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let mut activities = BTreeMap::new();

        for (name, activity) in entries {
            if name.trim().is_empty() {
                return Err(SeedError::BlankName);
            }
            if activity.max_participants == 0 {
                return Err(SeedError::ZeroCapacity(name));
            }
            for (i, email) in activity.participants.iter().enumerate() {
                if activity.participants[..i].contains(email) {
                    return Err(SeedError::DuplicateParticipant {
                        activity: name,
                        email: email.clone(),
                    });
                }
            }
            if activity.participants.len() > activity.max_participants as usize {
                warn!(
                    "Seeded activity {} starts over capacity ({}/{})",
                    name,
                    activity.participants.len(),
                    activity.max_participants
                );
            }
            if activities.contains_key(&name) {
                return Err(SeedError::DuplicateActivity(name));
            }
            activities.insert(name, activity);
        }

        info!("Activity directory initialized with {} activities", activities.len());
        Ok(Self { activities })
    }

    /// All activities by name
    pub fn list_all(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    /// Look up a single activity
    pub fn get(&self, name: &str) -> Result<&Activity, DirectoryError> {
        self.activities
            .get(name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Sign a student up for an activity.
    ///
    /// Capacity is advisory: the email is appended even when the activity
    /// is already at or over `max_participants`.
    pub fn enroll(&mut self, name: &str, email: &str) -> Result<String, DirectoryError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(name.to_string()))?;

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                email: email.to_string(),
                activity: name.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        debug!(
            "{} now has {} participants, {} spots left",
            name,
            activity.participants.len(),
            activity.spots_left()
        );

        Ok(format!("Signed up {} for {}", email, name))
    }

    /// Remove a student from an activity
    pub fn withdraw(&mut self, name: &str, email: &str) -> Result<String, DirectoryError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::NotSignedUp {
                email: email.to_string(),
                activity: name.to_string(),
            })?;

        activity.participants.remove(position);

        Ok(format!("Unregistered {} from {}", email, name))
    }
}
