//! The session wrapper and the collaborator seam packet handlers run against.

pub mod block_actor;

pub use block_actor::SignSide;

use quarry_proto::BlockPos;

use crate::world::{Block, EditSignError};

/// The session's view of its player and world, as needed by packet handlers.
///
/// Implementations own their locking; handlers call these synchronously and
/// retain nothing past a single packet.
pub trait Controllable {
    /// The block currently stored at `pos` in the player's world.
    fn block(&self, pos: BlockPos) -> Block;

    /// Apply validated text to both faces of the sign at `pos` and replicate
    /// the change to viewers.
    fn edit_sign(&mut self, pos: BlockPos, front: &str, back: &str) -> Result<(), EditSignError>;
}

/// An active connection bound to a player in a world.
pub struct Session<C> {
    controllable: C,
}

impl<C: Controllable> Session<C> {
    pub fn new(controllable: C) -> Self {
        Self { controllable }
    }

    pub fn controllable(&self) -> &C {
        &self.controllable
    }
}
