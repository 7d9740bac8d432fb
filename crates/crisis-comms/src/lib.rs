//! Agent Communication Layer
//!
//! Provides the outbound call path to the downstream analysis agents and
//! the response extraction helpers that tolerate shape drift across agent
//! transports.
//!
//! # Example
//!
//! ```no_run
//! use crisis_comms::{AgentCaller, AgentEndpoint, AgentRequest, HttpCaller};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let caller = HttpCaller::new();
//!     let endpoint = AgentEndpoint::new("sentiment_analyst", "http://sentiment-analyst:9002");
//!     let request = AgentRequest::text("crisis-t1-sentiment", "Analyze this content");
//!
//!     let envelope = caller.call(&endpoint, request, Duration::from_secs(30)).await?;
//!     println!("{}", envelope);
//!
//!     Ok(())
//! }
//! ```

pub mod caller;
pub mod endpoint;
pub mod error;
pub mod extract;
pub mod in_process;
pub mod message;

// Re-exports
pub use caller::{AgentCaller, HttpCaller};
pub use endpoint::AgentEndpoint;
pub use error::{CallError, Result};
pub use extract::extract_analysis;
pub use in_process::{InProcessCaller, Responder};
pub use message::{AgentRequest, MessagePart};
