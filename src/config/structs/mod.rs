mod app;
mod commit;
mod llm;
mod network;

pub use app::{AppConfig, UIConfig};
pub use commit::CommitConfig;
pub use llm::LLMConfig;
pub use network::NetworkConfig;
