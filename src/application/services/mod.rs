//! 应用服务

pub mod bootstrap_service;

pub use bootstrap_service::{Bootstrapper, RunReport, StepRecord, StepStatus};
