pub mod chat;
pub mod client;
pub mod message;
pub mod rating;
pub mod staff;
pub mod stats;
pub mod task;
pub mod work_session;

pub use chat::*;
pub use client::*;
pub use message::*;
pub use rating::*;
pub use staff::*;
pub use stats::*;
pub use task::*;
pub use work_session::*;
