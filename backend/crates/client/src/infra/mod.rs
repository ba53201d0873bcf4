pub mod file;
pub mod http;
pub mod memory;
pub mod navigator;
