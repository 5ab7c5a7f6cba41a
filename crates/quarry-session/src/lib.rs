//! Session-side handling of inbound game packets.
//!
//! A [`Session`] wraps the player/world pair a connection is bound to and
//! validates client-supplied packet data before asking its collaborators to
//! mutate anything. Transport, encryption and the packet wire format are
//! handled upstream; this crate only sees decoded packets.

pub mod error;
pub mod session;
pub mod world;

pub use error::SessionError;
pub use session::{Controllable, Session, SignSide};
pub use world::{Block, EditSignError};
