//! # bdbfetch Service
//!
//! Network side of bdbfetch: the [`BindingDbClient`] that talks to the
//! BindingDB BDBService and the [`pipeline::run`] that turns one query into
//! one CSV file.

pub mod client;
pub mod pipeline;

pub use client::BindingDbClient;
pub use pipeline::run;

#[cfg(test)]
mod test_server;
