//! Response transcoding
//!
//! ```text
//! raw body ──prettify──> well-formed XML ──xml_to_tree──> mapping ──records_from_tree──> Vec<R>
//! ```
//!
//! Records live at `html → body → <response element> → bdb:affinities`.
//! A missing hop above `bdb:affinities` means the service answered with
//! something other than a result set and is reported as
//! [`Error::MissingElement`]. A response element with no `bdb:affinities`
//! under it is an empty result set.

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::markup::prettify;
use crate::record::ResponseSchema;
use crate::tree::xml_to_tree;

const AFFINITIES: &str = "bdb:affinities";

/// Decode a raw service response into records of type `R`
pub fn transcode<R: ResponseSchema>(body: &str) -> Result<Vec<R>> {
    let xml = prettify(body)?;
    let tree = xml_to_tree(&xml)?;
    records_from_tree(&tree)
}

/// Walk the fixed path for `R` and deserialize every record found there
pub fn records_from_tree<R: ResponseSchema>(tree: &Value) -> Result<Vec<R>> {
    let path = ["html", "body", R::OPERATION.response_element()];
    let response = navigate(tree, &path)?;

    let items: Vec<&Value> = match response.get(AFFINITIES) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    };
    debug!("Found {} <{}> entries", items.len(), AFFINITIES);

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            R::deserialize(item).map_err(|e| {
                Error::MalformedResponse(format!("record {} under <{}>: {}", i, AFFINITIES, e))
            })
        })
        .collect()
}

fn navigate<'a>(tree: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut node = tree;
    for (depth, key) in path.iter().enumerate() {
        node = match node.get(*key) {
            Some(child) => child,
            None => {
                let parent = if depth == 0 {
                    "document root".to_string()
                } else {
                    path[..depth].join(" → ")
                };
                return Err(Error::MissingElement {
                    path: parent,
                    missing: (*key).to_string(),
                });
            }
        };
    }
    Ok(node)
}
