// Models and response parsing are always available
pub mod models;
pub mod response;

// Server-only modules
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod generate;
#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "server")]
pub mod openai;
#[cfg(feature = "server")]
pub mod prompt;

// Re-export commonly used types
pub use models::Quiz;
pub use response::{ParseError, parse_quiz};

#[cfg(feature = "server")]
pub use config::Config;
#[cfg(feature = "server")]
pub use generate::{GenerateError, generate_quiz};
