// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! backr-engine: reconciliation — selecting which backups survive,
//! reaping the rest, and summarizing what went wrong.

mod engine;
mod error;
mod reaper;
mod reconciler;
mod selector;
mod statement_builder;

pub use engine::run_tick;
pub use error::ReconcileError;
pub use reaper::files_to_delete;
pub use reconciler::ProjectReconciler;
pub use selector::select;
pub use statement_builder::build as build_statement;
