mod core;
mod shared;

pub use core::{EnvironmentSpec, Module};
pub use shared::{EnvironmentRef, SharedEnvironments, TestCaseEnvironment};
