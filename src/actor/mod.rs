pub mod client;

pub use client::RtsClient;
