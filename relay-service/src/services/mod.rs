pub mod persona;
pub mod providers;

pub use providers::anthropic::AnthropicProvider;
pub use providers::{ProviderError, TextProvider};
