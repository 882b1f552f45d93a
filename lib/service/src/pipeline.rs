// fetch -> transcode -> write, once per run
use bdbfetch_core::{
    transcode, write_csv, AffinityRecord, CompoundSearchRecord, Query, ResponseSchema, Result,
    ResultFile,
};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::client::BindingDbClient;

/// Run `query` against the service and write its CSV into `output_dir`.
///
/// Returns the path of the file written.
pub async fn run(
    client: &BindingDbClient,
    query: &Query,
    output_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let file = ResultFile::new(output_dir, query, date);
    let body = client.fetch(query).await?;

    let rows = match query {
        Query::ByTarget { .. } => save::<AffinityRecord>(&body, file.path())?,
        Query::ByCompound { .. } => save::<CompoundSearchRecord>(&body, file.path())?,
    };

    if rows == 0 {
        warn!("Service returned no affinity records; wrote header only");
    }
    info!("Wrote {} records to {:?}", rows, file.path());

    Ok(file.path().to_path_buf())
}

fn save<R: ResponseSchema>(body: &str, path: &Path) -> Result<usize> {
    let records: Vec<R> = transcode(body)?;
    write_csv(path, &records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;
    use bdbfetch_core::Error;

    const TARGETS: &str = "<bdb:getTargetByCompoundResponse><bdb:affinities>\
        <bdb:target>Thrombin</bdb:target><bdb:species>Homo sapiens</bdb:species>\
        <bdb:smiles>CCO</bdb:smiles><bdb:tanimoto>0.9</bdb:tanimoto>\
        <bdb:affinity_type>Ki</bdb:affinity_type><bdb:affinity>3</bdb:affinity>\
        </bdb:affinities></bdb:getTargetByCompoundResponse>";

    const LIGANDS: &str = "<bdb:getLigandsByUniprotResponse><bdb:affinities>\
        <bdb:smiles>CCO</bdb:smiles><bdb:affinity_type>IC50</bdb:affinity_type>\
        <bdb:affinity>12</bdb:affinity></bdb:affinities></bdb:getLigandsByUniprotResponse>";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn compound_query() -> Query {
        Query::ByCompound {
            smiles: "CCO".to_string(),
            similarity_cutoff: 0.8,
        }
    }

    #[tokio::test]
    async fn test_compound_query_uses_compound_schema() {
        let (base_url, server) = serve_once("200 OK", TARGETS).await;
        let client = BindingDbClient::new(base_url).unwrap();
        let out = tempfile::tempdir().unwrap();

        let path = run(&client, &compound_query(), out.path(), date()).await.unwrap();
        server.await.unwrap();

        assert_eq!(path, out.path().join("240307_targetSearchByCpd_0.8nM.csv"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Target [Species],SMILES (Tanimoto Similarity),Affinity Type,Affinity (nM)\r\n\
             Thrombin [Homo sapiens],CCO (0.9),Ki,3\r\n"
        );
    }

    #[tokio::test]
    async fn test_target_query_uses_ligand_schema() {
        let (base_url, server) = serve_once("200 OK", LIGANDS).await;
        let client = BindingDbClient::new(base_url).unwrap();
        let out = tempfile::tempdir().unwrap();
        let query = Query::ByTarget {
            uniprot_id: "P35355".to_string(),
            ic50_cutoff_nm: 100.0,
        };

        let path = run(&client, &query, out.path(), date()).await.unwrap();
        server.await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "SMILES,Affinity Type,Affinity (nM)\r\nCCO,IC50,12\r\n");
    }

    #[tokio::test]
    async fn test_mismatched_response_writes_nothing() {
        let (base_url, server) = serve_once("200 OK", LIGANDS).await;
        let client = BindingDbClient::new(base_url).unwrap();
        let out = tempfile::tempdir().unwrap();

        let err = run(&client, &compound_query(), out.path(), date()).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, Error::MissingElement { .. }));
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }
}
