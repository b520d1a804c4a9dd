//! Value types shared between the layout extractor and the outline engine.
//!
//! Everything here is produced and consumed within a single document's
//! processing pass; nothing outlives that pass or is shared across
//! documents.

mod line;
mod outline;
mod stats;

pub use line::{LineRecord, TextLine, TextRun};
pub use outline::{HeadingEntry, HeadingLevel, Outline};
pub use stats::DocumentStats;
