pub mod client;

pub use client::client_code;
