//! Metadata-block insertion into named `async` functions
//!
//! A function's span runs from its `async <name>` header to the next
//! `async ` token (or end of text). The block is spliced in immediately
//! before the first anchor inside that span, unless the guard string
//! already appears between the header and the anchor.

use crate::config::ToolConfig;
use crate::error::{Error, Result};
use serde::Serialize;

const ASYNC_TOKEN: &str = "async ";

/// What to insert, where, and how to recognize a previous insertion
#[derive(Debug, Clone)]
pub struct PatchPlan {
    pub functions: Vec<String>,
    pub anchor: String,
    pub guard: String,
    pub block: String,
}

impl Default for PatchPlan {
    fn default() -> Self {
        Self::from(&ToolConfig::default())
    }
}

impl From<&ToolConfig> for PatchPlan {
    fn from(config: &ToolConfig) -> Self {
        Self {
            functions: config.functions.clone(),
            anchor: config.anchor.clone(),
            guard: config.guard.clone(),
            block: config.block.clone(),
        }
    }
}

/// Result of patching a single function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Guard already present before the anchor
    Unchanged,
    /// Block inserted at byte offset `offset`
    Inserted { text: String, offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchStatus {
    Inserted,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionReport {
    pub name: String,
    pub status: PatchStatus,
    /// Insertion offset in the text as it was when this function was patched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

/// Outcome of a whole plan
#[derive(Debug, Clone)]
pub struct PlanReport {
    pub text: String,
    pub functions: Vec<FunctionReport>,
}

impl PlanReport {
    /// True if at least one block was inserted
    pub fn changed(&self) -> bool {
        self.functions
            .iter()
            .any(|f| f.status == PatchStatus::Inserted)
    }
}

/// Insert the plan's block into one function, unless it is already there.
pub fn ensure_metadata_block(text: &str, function: &str, plan: &PatchPlan) -> Result<PatchOutcome> {
    let header = format!("{ASYNC_TOKEN}{function}");
    let start = text.find(&header).ok_or_else(|| Error::FunctionNotFound {
        name: function.to_string(),
    })?;

    let body = start + header.len();
    let span_end = text[body..]
        .find(ASYNC_TOKEN)
        .map_or(text.len(), |pos| body + pos);

    let target = text[start..span_end]
        .find(&plan.anchor)
        .map(|pos| start + pos)
        .ok_or_else(|| Error::AnchorNotFound {
            function: function.to_string(),
            anchor: plan.anchor.clone(),
        })?;

    if text[start..target].contains(&plan.guard) {
        return Ok(PatchOutcome::Unchanged);
    }

    let mut patched = String::with_capacity(text.len() + plan.block.len());
    patched.push_str(&text[..target]);
    patched.push_str(&plan.block);
    patched.push_str(&text[target..]);

    Ok(PatchOutcome::Inserted {
        text: patched,
        offset: target,
    })
}

/// Apply the plan to every function in order.
///
/// Each step sees the previous step's output. The first missing function
/// or anchor aborts the whole plan.
pub fn apply_plan(text: &str, plan: &PatchPlan) -> Result<PlanReport> {
    let mut current = text.to_string();
    let mut functions = Vec::with_capacity(plan.functions.len());

    for name in &plan.functions {
        match ensure_metadata_block(&current, name, plan)? {
            PatchOutcome::Unchanged => {
                tracing::debug!(function = %name, "metadata block already present");
                functions.push(FunctionReport {
                    name: name.clone(),
                    status: PatchStatus::AlreadyPresent,
                    offset: None,
                });
            }
            PatchOutcome::Inserted { text, offset } => {
                tracing::debug!(function = %name, offset, "inserted metadata block");
                current = text;
                functions.push(FunctionReport {
                    name: name.clone(),
                    status: PatchStatus::Inserted,
                    offset: Some(offset),
                });
            }
        }
    }

    Ok(PlanReport {
        text: current,
        functions,
    })
}
