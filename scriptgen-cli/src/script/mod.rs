//! SQL script templates and the engine that renders them

pub mod clock;
pub mod engine;
pub mod templates;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::FixedClock;
pub use engine::{ScriptArtifact, Substitutions, TemplateId, render, render_value_list};
