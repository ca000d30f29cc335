//! Data access for the page client

pub mod client;

pub use client::GlooFetch;
