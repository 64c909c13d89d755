//! Application Layer - 引导流程
//!
//! - steps: 有名字、可单独测试的步骤
//! - services: 把步骤串成一次运行的服务

pub mod services;
pub mod steps;
