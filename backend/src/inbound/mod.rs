//! Inbound adapters driving the domain's ports.

pub mod http;
