// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generated protobuf types and the tonic service implementation.

pub mod service;

pub mod proto {
    tonic::include_proto!("backr");
}

pub use proto::backr_server::BackrServer;
pub use service::BackrService;
