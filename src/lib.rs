//! Leanline - On-device metabolic projection engine for calorie and
//! body-weight tracking
//!
//! Leanline converts logged food intake, running workouts, and a
//! body-composition category into derived metrics through a deterministic
//! pipeline: energy calculation (BMR/TDEE) → ledger aggregation → weight
//! projection → nutrition analysis.
//!
//! The engine is purely computational: no I/O, no hidden state, and every
//! function is a total mapping from explicit inputs to outputs. Persistence
//! and rendering belong to the surrounding layer; [`session`] only defines
//! the serialized shape they exchange.

pub mod analysis;
pub mod energy;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod profile;
pub mod projection;
pub mod report;
pub mod session;
pub mod types;

pub use engine::evaluate;
pub use error::EngineError;
pub use report::ReportEncoder;
pub use session::SessionState;
pub use types::{EngineInput, EngineOutput};

/// Engine version embedded in all report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "leanline";
