//! Use cases (orchestration)
//!
//! Use cases drive the operator and coordinate the store and exporter ports
//! to provision UEs end to end.

mod provision_batch;

pub use provision_batch::{
    provision_batch, BatchPolicy, BatchRequest, ProvisionReport, ProvisionSummary,
};
