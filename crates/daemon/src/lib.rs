// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! backr-daemon: the long-running process — a reconciliation worker plus
//! a gRPC API server sharing the same project/account/file stores.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod error;
pub mod notifier;
pub mod rpc;
pub mod ticker;

pub use config::{load as load_config, Config, ConfigError};
pub use error::ApiError;
pub use notifier::DedupedNotifier;
pub use rpc::{BackrServer, BackrService};
