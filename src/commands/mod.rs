//! Command implementations for agentlint CLI

pub mod check;
pub mod completions;
pub mod config;
pub mod frontmatter;
mod helpers;
pub mod version;
