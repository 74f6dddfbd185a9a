use schemars::schema_for;

use crate::{json::types, route::optimized_route::OptimizedRoute};

/// Schema of the persisted route snapshot.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(OptimizedRoute))
}

pub fn generate_request_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonSequenceRequest))
}
