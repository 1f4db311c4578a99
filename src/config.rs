use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::ProfileArgs;
use crate::error::Result;
use crate::models::UserProfile;

/// Load a profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    Ok(profile)
}

/// Build the effective profile: defaults, then the optional file, then flags.
///
/// The merged result is validated once at the end, so a file may hold a
/// placeholder that a flag fixes.
pub fn resolve_profile(file: Option<&Path>, args: &ProfileArgs) -> Result<UserProfile> {
    let mut profile = match file {
        Some(path) => {
            debug!(path = %path.display(), "loading profile file");
            load_profile(path)?
        }
        None => UserProfile::default(),
    };

    args.apply(&mut profile);
    profile.validate()?;
    Ok(profile)
}
