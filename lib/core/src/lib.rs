//! # bdbfetch Core
//!
//! Core library for querying the BindingDB web service.
//!
//! This crate holds everything that does not touch the network:
//!
//! - [`Query`] - the two query variants and how they are chosen from CLI options
//! - [`build_url`] - request URLs for the BDBService operations
//! - [`prettify`] / [`xml_to_tree`] / [`transcode`] - tolerant markup to typed records
//! - [`AffinityRecord`], [`CompoundSearchRecord`] - the records the service returns
//! - [`ResultFile`], [`write_csv`] - the CSV written for each run
//!
//! ## Example
//!
//! ```rust
//! use bdbfetch_core::{build_url, transcode, AffinityRecord, Query, DEFAULT_BASE_URL};
//!
//! let query = Query::from_options(Some("P35355".to_string()), Some(100.0), None, None).unwrap();
//! assert!(build_url(DEFAULT_BASE_URL, &query).ends_with("uniprot=P35355;100"));
//!
//! let body = "<bdb:getLigandsByUniprotResponse><bdb:affinities>\
//!             <bdb:smiles>CCO</bdb:smiles><bdb:affinity_type>IC50</bdb:affinity_type>\
//!             <bdb:affinity>12</bdb:affinity></bdb:affinities></bdb:getLigandsByUniprotResponse>";
//! let records: Vec<AffinityRecord> = transcode(body).unwrap();
//! assert_eq!(records[0].smiles, "CCO");
//! ```

pub mod emit;
pub mod error;
pub mod markup;
pub mod query;
pub mod record;
pub mod request;
pub mod transcode;
pub mod tree;

pub use emit::{confirmation_message, write_csv, ResultFile};
pub use error::{Error, Result};
pub use markup::{prettify, XML_HEADER};
pub use query::{format_cutoff, Operation, Query};
pub use record::{AffinityRecord, CompoundSearchRecord, ResponseSchema};
pub use request::{build_url, encode_smiles, DEFAULT_BASE_URL};
pub use transcode::{records_from_tree, transcode};
pub use tree::xml_to_tree;
