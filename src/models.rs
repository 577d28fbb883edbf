use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub size: String,  // logical points, e.g. "16x16"
    pub scale: String, // density multiplier, e.g. "2x"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>, // derived, never authored by hand
    #[serde(flatten)]
    pub extra: Map<String, Value>, // idiom and friends, carried through untouched
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Ordering is (px, filename), which is also the output order of the exporter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExportTarget {
    pub px: u32,
    pub filename: String,
}
