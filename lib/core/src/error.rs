use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No query mode selected: pass --uniprot with --ic50_cutoff, or --smiles with --similarity_cutoff")]
    NoModeSelected,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Malformed response: missing <{missing}> under {path}")]
    MissingElement { path: String, missing: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
