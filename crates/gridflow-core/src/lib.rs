// gridflow-core: domain objects over the Gridflow platform API.
//
// Each domain type wraps its wire schema plus a shared `ApiClient`
// handle, and exposes relationships (a model's scenarios, a node's
// children) as fetch-on-first-access cached values via `Relation`.

pub mod asset;
pub mod model;
pub mod model_scenario;
pub mod node;
pub mod publisher;
pub mod record;
pub mod relation;
pub mod run;
pub mod slug;
pub mod technology;

pub use asset::AssetCollection;
pub use model::Model;
pub use model_scenario::ModelScenario;
pub use node::Node;
pub use publisher::{Publisher, Source};
pub use record::RecordCollection;
pub use relation::Relation;
pub use run::Run;
pub use slug::parse_slug;
pub use technology::Technology;
