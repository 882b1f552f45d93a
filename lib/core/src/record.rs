//! Affinity records returned by BindingDB
//!
//! Field values are kept exactly as the service sent them. Affinities in
//! particular may carry qualifiers such as `<10` or `>10000`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::query::Operation;

/// A record type the service returns, with its place in the response and its CSV layout
pub trait ResponseSchema: for<'de> Deserialize<'de> {
    /// Operation whose response carries these records
    const OPERATION: Operation;

    /// CSV header row
    const HEADER: &'static [&'static str];

    /// One CSV row, aligned with [`Self::HEADER`]
    fn to_row(&self) -> Vec<String>;
}

/// A ligand measured against the queried protein
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffinityRecord {
    #[serde(rename = "bdb:smiles", deserialize_with = "text")]
    pub smiles: String,

    #[serde(rename = "bdb:affinity_type", deserialize_with = "text")]
    pub affinity_type: String,

    #[serde(rename = "bdb:affinity", deserialize_with = "text")]
    pub affinity_nm: String,
}

impl ResponseSchema for AffinityRecord {
    const OPERATION: Operation = Operation::GetLigandsByUniprot;

    const HEADER: &'static [&'static str] = &["SMILES", "Affinity Type", "Affinity (nM)"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.smiles.clone(),
            self.affinity_type.clone(),
            self.affinity_nm.clone(),
        ]
    }
}

/// A compound similar to the query molecule, with one of its measured targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundSearchRecord {
    #[serde(rename = "bdb:target", deserialize_with = "text")]
    pub target_name: String,

    #[serde(rename = "bdb:species", deserialize_with = "text")]
    pub species: String,

    #[serde(rename = "bdb:smiles", deserialize_with = "text")]
    pub smiles: String,

    #[serde(rename = "bdb:tanimoto", deserialize_with = "text")]
    pub tanimoto_similarity: String,

    #[serde(rename = "bdb:affinity_type", deserialize_with = "text")]
    pub affinity_type: String,

    #[serde(rename = "bdb:affinity", deserialize_with = "text")]
    pub affinity_nm: String,
}

impl ResponseSchema for CompoundSearchRecord {
    const OPERATION: Operation = Operation::GetTargetByCompound;

    const HEADER: &'static [&'static str] = &[
        "Target [Species]",
        "SMILES (Tanimoto Similarity)",
        "Affinity Type",
        "Affinity (nM)",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            format!("{} [{}]", self.target_name, self.species),
            format!("{} ({})", self.smiles, self.tanimoto_similarity),
            self.affinity_type.clone(),
            self.affinity_nm.clone(),
        ]
    }
}

// An element present but empty arrives as null
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_affinity_record_from_mapping() {
        let record: AffinityRecord = serde_json::from_value(json!({
            "bdb:monomerid": "50001",
            "bdb:smiles": "CCO",
            "bdb:affinity_type": "IC50",
            "bdb:affinity": "<10",
        }))
        .unwrap();

        assert_eq!(record.smiles, "CCO");
        assert_eq!(record.affinity_nm, "<10");
        assert_eq!(record.to_row(), vec!["CCO", "IC50", "<10"]);
        assert_eq!(record.to_row().len(), AffinityRecord::HEADER.len());
    }

    #[test]
    fn test_empty_element_becomes_empty_string() {
        let record: AffinityRecord = serde_json::from_value(json!({
            "bdb:smiles": "CCO",
            "bdb:affinity_type": null,
            "bdb:affinity": "5",
        }))
        .unwrap();
        assert_eq!(record.affinity_type, "");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let result: Result<AffinityRecord, _> = serde_json::from_value(json!({
            "bdb:smiles": "CCO",
            "bdb:affinity": "5",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_compound_record_row_layout() {
        let record = CompoundSearchRecord {
            target_name: "Carbonic anhydrase 2".to_string(),
            species: "Homo sapiens".to_string(),
            smiles: "NS(=O)(=O)c1ccccc1".to_string(),
            tanimoto_similarity: "0.91".to_string(),
            affinity_type: "Ki".to_string(),
            affinity_nm: "12".to_string(),
        };
        assert_eq!(
            record.to_row(),
            vec![
                "Carbonic anhydrase 2 [Homo sapiens]",
                "NS(=O)(=O)c1ccccc1 (0.91)",
                "Ki",
                "12",
            ]
        );
        assert_eq!(record.to_row().len(), CompoundSearchRecord::HEADER.len());
    }
}
