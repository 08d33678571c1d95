//! Stage list lookup.
//!
//! The host embeds its validated stage list as JSON in the page so the client
//! renders exactly what the server rendered, without a network round trip.
//! When nothing is embedded the built-in pipeline is used.

#[cfg(test)]
#[path = "stage_source_test.rs"]
mod stage_source_test;

use timeline::catalog;
use timeline::error::ConfigError;
use timeline::stage::StageList;

/// Load the page's stage list, falling back to the built-in pipeline.
///
/// # Errors
///
/// Returns the [`ConfigError`] of whichever source was used; an embedded list
/// that fails validation is never replaced by the fallback.
pub fn load_stages() -> Result<StageList, ConfigError> {
    parse_stage_source(embedded_stage_json().as_deref())
}

/// Parse `embedded` when present and non-blank, else the built-in pipeline.
pub fn parse_stage_source(embedded: Option<&str>) -> Result<StageList, ConfigError> {
    match embedded.map(str::trim).filter(|json| !json.is_empty()) {
        Some(json) => StageList::from_json(json),
        None => catalog::hr_pipeline(),
    }
}

fn embedded_stage_json() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?
            .document()?
            .get_element_by_id(timeline::consts::STAGES_ELEMENT_ID)?
            .text_content()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
