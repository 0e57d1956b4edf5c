// gridflow-api: async Rust client for the Gridflow platform REST API.
//
// Transport (`ApiClient`), authentication (device flow + bearer refresh),
// and one endpoint module per platform resource.

pub mod assets;
pub mod auth;
pub mod client;
pub mod error;
pub mod model_scenarios;
pub mod models;
pub mod node_aliases;
pub mod nodes;
pub mod publishers;
pub mod records;
pub mod runs;
pub mod schemas;
pub mod sources;
pub mod technologies;

pub use assets::AssetFilter;
pub use auth::{AuthConfig, AuthToken, BearerAuth, DeviceCodeGrant, DeviceFlow, TokenStore};
pub use client::{ApiClient, ApiConfig, Page, Query};
pub use error::{AuthError, Error};
pub use model_scenarios::ModelScenarioFilter;
pub use models::ModelFilter;
pub use node_aliases::NodeAliasFilter;
pub use records::RecordFilter;
pub use runs::RunFilter;
pub use sources::SourceFilter;
pub use technologies::TechnologyFilter;
