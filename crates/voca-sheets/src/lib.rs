mod client;

pub use client::SheetsClient;
