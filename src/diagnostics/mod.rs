//! Serializable diagnostics for a page run.
//!
//! [`PageReport`] bundles the analyzed [`Page`](crate::Page) with a
//! [`PipelineTrace`] recording stage counters and timings.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, PageReport, PipelineTrace, ReadingStage, ViewStage};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
