//! Report encoding
//!
//! Wraps an engine evaluation in a versioned, self-describing JSON envelope
//! with producer and provenance metadata, so downstream renderers can check
//! what produced a payload and when.

use crate::engine;
use crate::error::EngineError;
use crate::types::{EngineInput, ReportPayload, ReportProducer};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Report encoder for producing versioned JSON payloads
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Evaluate the engine and wrap the output in a report payload
    pub fn encode(&self, input: &EngineInput) -> ReportPayload {
        let output = engine::evaluate(input);

        ReportPayload {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            current_weight_kg: input.current_weight_kg,
            goal_weight_kg: input.goal_weight_kg,
            activity: input.activity.as_str().to_string(),
            output,
        }
    }

    /// Evaluate and encode to a JSON string
    pub fn encode_to_json(&self, input: &EngineInput) -> Result<String, EngineError> {
        let payload = self.encode(input);
        serde_json::to_string_pretty(&payload)
            .map_err(|e| EngineError::EncodingError(e.to_string()))
    }
}
