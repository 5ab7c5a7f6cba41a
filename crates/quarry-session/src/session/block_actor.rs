//! Handling of the inbound BlockActorData packet, sent by the client for
//! block entities it edits directly, such as signs.
//!
//! Everything in the packet is attacker-controlled, so every nested field is
//! validated before the world is touched.

use std::fmt;

use quarry_nbt::{compound_snbt, NbtCompound, NbtTag};
use quarry_proto::BlockActorData;
use tracing::debug;

use super::{Controllable, Session};
use crate::error::SessionError;
use crate::world::Block;

/// Byte budget for one side of a sign, after trailing newlines are stripped.
/// Enforced on UTF-8 byte length, not characters, even though the error
/// message says characters.
const MAX_SIGN_TEXT_LEN: usize = 256;

/// One of the two independently editable text faces of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignSide {
    Front,
    Back,
}

impl SignSide {
    /// The compound key holding this side's data in the block actor NBT.
    fn key(self) -> &'static str {
        match self {
            SignSide::Front => "FrontText",
            SignSide::Back => "BackText",
        }
    }
}

impl fmt::Display for SignSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignSide::Front => "front",
            SignSide::Back => "back",
        })
    }
}

impl<C: Controllable> Session<C> {
    /// Validates an inbound BlockActorData packet and routes it to the
    /// matching domain mutation.
    ///
    /// The dispatch is a closed match over the block actor types the
    /// protocol defines; unrecognized discriminators are an error, not a
    /// silent no-op.
    pub fn handle_block_actor_data(&mut self, pkt: &BlockActorData) -> Result<(), SessionError> {
        let Some(id) = pkt.data.get("id") else {
            return Err(SessionError::MissingTag {
                data: compound_snbt(&pkt.data),
            });
        };
        match id.as_string() {
            Some(s) if s == b"Sign" => self.handle_sign(pkt),
            _ => Err(SessionError::UnsupportedTag { id: id.to_string() }),
        }
    }

    /// Handles the BlockActorData packet sent when editing a sign.
    fn handle_sign(&mut self, pkt: &BlockActorData) -> Result<(), SessionError> {
        let pos = pkt.position;
        if self.controllable.block(pos) != Block::Sign {
            // The block may have been removed between the client's edit and
            // the packet arriving. Tolerated, not a fault.
            debug!("sign block actor data for position without sign {pos}");
            return Ok(());
        }

        let front = sign_text(&pkt.data, SignSide::Front)?;
        let back = sign_text(&pkt.data, SignSide::Back)?;
        self.controllable.edit_sign(pos, &front, &back)?;
        Ok(())
    }
}

/// Pulls one side's text out of the block actor compound: shape checks,
/// trailing-newline strip, length check, then UTF-8 validation, in that
/// order. The first failing step aborts the call.
fn sign_text(data: &NbtCompound, side: SignSide) -> Result<String, SessionError> {
    let side_data = match data.get(side.key()).and_then(NbtTag::as_compound) {
        Some(c) => c,
        None => {
            return Err(SessionError::MalformedSideText {
                key: side.key(),
                found: match data.get(side.key()) {
                    Some(tag) => tag.to_string(),
                    None => "none".to_string(),
                },
            });
        }
    };

    let tag = side_data
        .get("Text")
        .ok_or(SessionError::MissingText { side })?;
    let raw = tag.as_string().ok_or_else(|| SessionError::TextNotString {
        side,
        found: tag.to_string(),
    })?;

    let trimmed = trim_trailing_newlines(raw);
    if trimmed.len() > MAX_SIGN_TEXT_LEN {
        return Err(SessionError::TextTooLong { side });
    }
    let text =
        std::str::from_utf8(trimmed).map_err(|_| SessionError::InvalidEncoding { side })?;
    Ok(text.to_owned())
}

/// Strips trailing `\n` bytes only; leading and interior newlines stay.
fn trim_trailing_newlines(raw: &[u8]) -> &[u8] {
    let mut end = raw.len();
    while end > 0 && raw[end - 1] == b'\n' {
        end -= 1;
    }
    &raw[..end]
}
