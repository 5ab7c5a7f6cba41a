//! The session layer's view of world block state.
//!
//! Block storage itself lives in the world subsystem; handlers only need to
//! know which variant currently occupies a position so they can check
//! preconditions before requesting a mutation.

use quarry_proto::BlockPos;
use thiserror::Error;

/// Block variant stored at a world position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Air,
    Stone,
    /// A block with front/back editable text faces.
    Sign,
    Chest,
}

/// Failure reported by the sign-edit mutation.
///
/// Produced by the world/session collaborator applying the edit; packet
/// handlers pass these through without interpreting them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditSignError {
    #[error("edit sign at {pos}: block is no longer a sign")]
    NotASign { pos: BlockPos },

    #[error("edit sign at {pos}: sign is not editable")]
    NotEditable { pos: BlockPos },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_sign_error_names_position() {
        let err = EditSignError::NotEditable {
            pos: BlockPos::new(4, 70, -1),
        };
        assert!(err.to_string().contains("(4, 70, -1)"));
    }
}
