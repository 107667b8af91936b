//! Platform abstraction layer
//!
//! Handles the boundary with the host page:
//! - Hand samples from the tracking pipeline
//! - Key events
//! - The outstanding animation frame

pub mod frame;
pub mod input;
pub mod keys;

pub use frame::PendingFrame;
pub use input::{InputSource, Mailbox, NoInput, from_normalized};
pub use keys::{HostKey, classify};
