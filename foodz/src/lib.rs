pub mod aggregate;
pub mod app;
pub mod detail;
pub mod presentation;
pub mod search;
