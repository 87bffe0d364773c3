pub mod client;

pub use client::{RudderClient, StatusReply};
