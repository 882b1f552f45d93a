// Request URLs for the BindingDB BDBService
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::query::{format_cutoff, Query};

/// Public BindingDB REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://bindingdb.org/axis2/services/BDBService";

/// Characters left literal when encoding a SMILES string; everything else becomes `%XX`
const SMILES_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a SMILES string for the `smiles` query parameter
pub fn encode_smiles(smiles: &str) -> String {
    utf8_percent_encode(smiles, SMILES_ENCODE_SET).to_string()
}

/// Build the GET URL for a query.
///
/// The target search joins id and cutoff with `;`, which is what the service
/// expects; the UniProt id is passed through untouched.
pub fn build_url(base_url: &str, query: &Query) -> String {
    let base = base_url.trim_end_matches('/');
    let operation = query.operation().path();

    match query {
        Query::ByTarget {
            uniprot_id,
            ic50_cutoff_nm,
        } => format!(
            "{}/{}?uniprot={};{}",
            base,
            operation,
            uniprot_id,
            format_cutoff(*ic50_cutoff_nm)
        ),
        Query::ByCompound {
            smiles,
            similarity_cutoff,
        } => format!(
            "{}/{}?smiles={}&cutoff={}",
            base,
            operation,
            encode_smiles(smiles),
            format_cutoff(*similarity_cutoff)
        ),
    }
}
