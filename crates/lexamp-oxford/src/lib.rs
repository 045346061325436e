mod client;

pub use client::OxfordClient;
