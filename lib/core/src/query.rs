//! Query model
//!
//! A run asks BindingDB exactly one question: which ligands bind a protein,
//! or which targets are hit by compounds similar to a molecule. The variant
//! is decided once, from the raw CLI options, and matched exhaustively
//! everywhere after that.

use crate::error::{Error, Result};

/// One BindingDB query
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Ligands binding the protein `uniprot_id` with an affinity under the cutoff (nM)
    ByTarget {
        uniprot_id: String,
        ic50_cutoff_nm: f64,
    },
    /// Targets of compounds at least `similarity_cutoff` similar to `smiles`
    ByCompound {
        smiles: String,
        similarity_cutoff: f64,
    },
}

/// Upstream service operation backing a query variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetLigandsByUniprot,
    GetTargetByCompound,
}

impl Operation {
    /// Operation name as it appears in the service URL
    pub fn path(self) -> &'static str {
        match self {
            Operation::GetLigandsByUniprot => "getLigandsByUniprot",
            Operation::GetTargetByCompound => "getTargetByCompound",
        }
    }

    /// Response wrapper element, lower-cased the way an HTML parser reports it
    pub fn response_element(self) -> &'static str {
        match self {
            Operation::GetLigandsByUniprot => "bdb:getligandsbyuniprotresponse",
            Operation::GetTargetByCompound => "bdb:gettargetbycompoundresponse",
        }
    }
}

impl Query {
    /// Build a query from optional CLI parameters.
    ///
    /// Empty strings and zero cutoffs count as "not supplied". If both pairs
    /// are complete the target search wins; if neither is, the result is
    /// [`Error::NoModeSelected`].
    pub fn from_options(
        uniprot: Option<String>,
        ic50_cutoff: Option<f64>,
        smiles: Option<String>,
        similarity_cutoff: Option<f64>,
    ) -> Result<Self> {
        let uniprot = uniprot.filter(|s| !s.is_empty());
        let ic50_cutoff = ic50_cutoff.filter(|c| *c != 0.0);
        let smiles = smiles.filter(|s| !s.is_empty());
        let similarity_cutoff = similarity_cutoff.filter(|c| *c != 0.0);

        match (uniprot, ic50_cutoff, smiles, similarity_cutoff) {
            (Some(uniprot_id), Some(ic50_cutoff_nm), _, _) => Ok(Query::ByTarget {
                uniprot_id,
                ic50_cutoff_nm,
            }),
            (_, _, Some(smiles), Some(similarity_cutoff)) => Ok(Query::ByCompound {
                smiles,
                similarity_cutoff,
            }),
            _ => Err(Error::NoModeSelected),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Query::ByTarget { .. } => Operation::GetLigandsByUniprot,
            Query::ByCompound { .. } => Operation::GetTargetByCompound,
        }
    }

    /// The numeric cutoff of whichever variant this is
    pub fn cutoff(&self) -> f64 {
        match self {
            Query::ByTarget { ic50_cutoff_nm, .. } => *ic50_cutoff_nm,
            Query::ByCompound { similarity_cutoff, .. } => *similarity_cutoff,
        }
    }
}

/// Render a cutoff for URLs and file names: `100.0` -> `100`, `0.85` -> `0.85`
pub fn format_cutoff(value: f64) -> String {
    value.to_string()
}
