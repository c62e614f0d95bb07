pub mod gateway;
pub mod gateways;
pub mod models;

pub use gateway::ModelGateway;
pub use models::PromptPart;
