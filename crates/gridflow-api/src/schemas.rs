//! Typed wire schemas for the platform REST API.
//!
//! These mirror the JSON bodies the platform returns. Relationship
//! fields (`children`, `model_scenarios`, ...) are only populated when
//! the request asked for them via `includes=`; they stay `None`
//! otherwise.

use serde::{Deserialize, Serialize};

// ── Nodes ───────────────────────────────────────────────────────────

/// A node: an administrative area (country, region) or a physical
/// asset (power station, substation) that data is indexed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_primary_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_asset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<Node>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeResponse {
    pub nodes: Vec<Node>,
}

/// A human-readable alias for a node, used for fuzzy search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAlias {
    pub alias: String,
    pub node_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeAliasPagination {
    #[serde(default)]
    pub node_aliases: Option<Vec<NodeAlias>>,
}

// ── Assets ──────────────────────────────────────────────────────────

/// An asset node: a node with `is_asset` set and sector-specific
/// properties attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_primary_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetResponse {
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetPagination {
    #[serde(default)]
    pub assets: Option<Vec<Asset>>,
}

// ── Models / scenarios / runs ───────────────────────────────────────

/// A systems model: the top of the model → scenario → run hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub slug: String,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_scenarios: Option<Vec<ModelScenario>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelPagination {
    #[serde(default)]
    pub models: Option<Vec<Model>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelCreate {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub public: bool,
}

/// A scenario belonging to a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScenario {
    pub slug: String,
    pub model_slug: String,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Box<Model>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<Vec<Run>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_run: Option<Box<Run>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelScenarioPagination {
    #[serde(default)]
    pub model_scenarios: Option<Vec<ModelScenario>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelScenarioCreate {
    pub slug: String,
    pub model_slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub public: bool,
}

/// A solved instance of a model scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub slug: String,
    pub model_slug: String,
    pub model_scenario_slug: String,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_scenario: Option<Box<ModelScenario>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunPagination {
    #[serde(default)]
    pub runs: Option<Vec<Run>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunCreate {
    pub slug: String,
    pub model_slug: String,
    pub model_scenario_slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub public: bool,
}

// ── Technologies ────────────────────────────────────────────────────

/// A technology, related hierarchically to other technologies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Technology>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<Technology>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechnologyPagination {
    #[serde(default)]
    pub technologies: Option<Vec<Technology>>,
}

// ── Publishers & sources ────────────────────────────────────────────

/// A third party publishing data relevant to the energy transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublisherPagination {
    #[serde(default)]
    pub publishers: Option<Vec<Publisher>>,
}

/// A dataset release made available by a publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub slug: String,
    pub publisher_slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarter: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcePagination {
    #[serde(default)]
    pub sources: Option<Vec<Source>>,
}

// ── Records ─────────────────────────────────────────────────────────

/// A single observation or projection attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub node_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_timestamp_start: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_timestamp_end: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordPagination {
    #[serde(default)]
    pub records: Option<Vec<Record>>,
}

// ── Shared ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}
