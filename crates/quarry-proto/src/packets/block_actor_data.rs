//! BlockActorData (0x38) — Bidirectional.
//!
//! Synchronizes block entity NBT data between server and client. The client
//! sends it for block entities it can edit directly, such as signs.

use quarry_nbt::NbtCompound;

use crate::types::BlockPos;

/// Block entity data packet, decoded.
///
/// `data` is the schemaless compound attached to the block actor; its `"id"`
/// entry discriminates the block actor type.
#[derive(Debug, Clone)]
pub struct BlockActorData {
    /// Position of the block entity.
    pub position: BlockPos,
    /// Decoded NBT compound.
    pub data: NbtCompound,
}
