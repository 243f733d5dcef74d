//! Startup data for the activity directory
//!
//! The built-in dataset is used unless a JSON seed file is configured.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::domain::activity::Activity;
use crate::domain::error::SeedError;

/// One entry of a JSON seed file
#[derive(Debug, Deserialize)]
struct SeedEntry {
    name: String,
    #[serde(flatten)]
    activity: Activity,
}

/// The activities offered when the service starts
pub fn default_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team".to_string(),
            Activity::new(
                "Train and play matches against other schools",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(&["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Swim Club".to_string(),
            Activity::new(
                "Improve swimming technique and compete in swim meets",
                "Mondays and Wednesdays, 4:00 PM - 5:00 PM",
                15,
            )
            .with_participants(&["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct and stage school theater productions",
                "Wednesdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(&["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Art Workshop".to_string(),
            Activity::new(
                "Explore painting, drawing and sculpture with guest artists",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(&["ella@mergington.edu", "lucas@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Tuesdays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(&["james@mergington.edu", "charlotte@mergington.edu"]),
        ),
        (
            "Math Olympiad".to_string(),
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Fridays, 2:00 PM - 3:30 PM",
                10,
            )
            .with_participants(&["benjamin@mergington.edu", "isabella@mergington.edu"]),
        ),
    ]
}

/// Read seed entries from a JSON array of
/// `{name, description, schedule, max_participants, participants}` objects.
///
/// Entries are returned in file order; validation happens when the
/// directory is built.
pub fn load_seed_file(path: &Path) -> Result<Vec<(String, Activity)>, SeedError> {
    let raw = fs::read_to_string(path)?;
    let entries: Vec<SeedEntry> = serde_json::from_str(&raw)?;

    info!("Loaded {} activities from {}", entries.len(), path.display());

    Ok(entries
        .into_iter()
        .map(|entry| (entry.name, entry.activity))
        .collect())
}
