// src/application/import.rs
//
// JSON input for resolutions
//
// Parsing and validation are separate steps so that callers get a typed
// DomainError (with the field name) instead of a serde message.

use crate::domain::{HasIdentifier, IdentifierRegistry, Resolution, ResolutionDraft};
use crate::error::AppResult;

/// Parse and validate a single resolution
pub fn parse_resolution(json: &str) -> AppResult<Resolution> {
    let draft: ResolutionDraft = serde_json::from_str(json)?;
    Ok(draft.build()?)
}

/// Parse a JSON array of resolutions, claiming each identifier in `registry`.
///
/// Stops at the first invalid or duplicated resolution. Identifiers claimed
/// before the failure are released again.
pub fn import_resolutions(
    json: &str,
    registry: &dyn IdentifierRegistry,
) -> AppResult<Vec<Resolution>> {
    let drafts: Vec<ResolutionDraft> = serde_json::from_str(json)?;
    let mut resolutions = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let claimed = draft
            .build()
            .and_then(|resolution| registry.register_entity(&resolution).map(|_| resolution));

        match claimed {
            Ok(resolution) => resolutions.push(resolution),
            Err(e) => {
                for done in &resolutions {
                    registry.release(done.id())?;
                }
                return Err(e.into());
            }
        }
    }

    log::debug!("Imported {} resolutions", resolutions.len());
    Ok(resolutions)
}
