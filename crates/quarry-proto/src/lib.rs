//! Protocol-facing types for the client-to-server game protocol.
//!
//! Packets here are the decoded form handed to session handlers. Reading
//! them off the wire (batching, encryption, NBT byte format) happens in the
//! transport layer, before this crate is involved.

pub mod packets;
pub mod types;

pub use packets::block_actor_data::BlockActorData;
pub use types::BlockPos;
