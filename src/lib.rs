//! # bdbfetch
//!
//! Query the [BindingDB](https://www.bindingdb.org) web service and save the
//! answer as CSV.
//!
//! Two questions are supported:
//!
//! - **Target search**: ligands measured against a protein, by UniProt id,
//!   under an affinity cutoff in nM
//! - **Compound search**: targets of compounds similar to a SMILES string,
//!   above a Tanimoto similarity cutoff
//!
//! ## Quick Start
//!
//! ```bash
//! bdbfetch --uniprot P35355 --ic50_cutoff 100
//! bdbfetch --smiles 'CCC[Ni+](C)(C)CCn1nncc1COc1cc(=O)n(C)c2ccccc12' --similarity_cutoff 0.85
//! ```
//!
//! Each run writes one file into the output directory, named after the date
//! and the query (`240307_P35355_100nM.csv`), and prints its absolute path.
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use bdbfetch::prelude::*;
//!
//! # async fn demo() -> bdbfetch::Result<()> {
//! let query = Query::from_options(Some("P35355".to_string()), Some(100.0), None, None)?;
//! let client = BindingDbClient::new(DEFAULT_BASE_URL)?;
//! let today = chrono::Local::now().date_naive();
//! let path = bdbfetch::run(&client, &query, std::path::Path::new("."), today).await?;
//! println!("{}", confirmation_message(&path)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `bdbfetch-core` - query model, URL building, response transcoding, CSV output
//! - `bdbfetch-service` - HTTP client and the fetch/transcode/write pipeline

// Re-export core types
pub use bdbfetch_core::{
    build_url, confirmation_message, transcode, write_csv,
    AffinityRecord, CompoundSearchRecord, ResponseSchema,
    Operation, Query, ResultFile,
    Error, Result,
    DEFAULT_BASE_URL,
};

// Re-export service
pub use bdbfetch_service::{run, BindingDbClient};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build_url, confirmation_message,
        AffinityRecord, CompoundSearchRecord,
        Query, ResultFile,
        Error, Result,
        BindingDbClient,
        DEFAULT_BASE_URL,
    };
}
