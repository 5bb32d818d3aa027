pub mod client;
pub mod environment;

pub use client::ClientConfig;
pub use environment::Config;
