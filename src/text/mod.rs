//! Pure text operations behind the subcommands
//!
//! Nothing in here touches the filesystem or the PDF engine.

mod excerpt;
mod patch;
mod positions;

pub use excerpt::{excerpt, Excerpt};
pub use patch::{
    apply_plan, ensure_metadata_block, FunctionReport, PatchOutcome, PatchPlan, PatchStatus,
    PlanReport,
};
pub use positions::{char_offsets, find_positions};
