//! Session error types.

use thiserror::Error;

use crate::session::SignSide;
use crate::world::EditSignError;

/// Failure while validating or applying an inbound packet.
///
/// All variants are fail-fast: the packet is dropped and no partial mutation
/// is ever attempted. `EditSign` is the mutation collaborator's own error,
/// passed through without added context.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The block actor compound carried no `"id"` discriminator.
    #[error("block actor data without 'id' tag: {data}")]
    MissingTag { data: String },

    /// The `"id"` discriminator is not a recognized block actor type.
    #[error("unhandled block actor data ID {id}")]
    UnsupportedTag { id: String },

    /// The per-side compound (`FrontText`/`BackText`) was absent or not a
    /// compound.
    #[error("sign block actor data '{key}' tag was not found or was not a compound: {found}")]
    MalformedSideText { key: &'static str, found: String },

    #[error("sign block actor data had no 'Text' tag for side {side}")]
    MissingText { side: SignSide },

    #[error("sign block actor data 'Text' tag was not a string for side {side}: {found}")]
    TextNotString { side: SignSide, found: String },

    /// The limit is enforced on byte length; the message keeps the
    /// characters phrasing the protocol has always reported.
    #[error("sign block actor data text was longer than 256 characters for side {side}")]
    TextTooLong { side: SignSide },

    #[error("sign block actor data text was not valid UTF8 for side {side}")]
    InvalidEncoding { side: SignSide },

    #[error(transparent)]
    EditSign(#[from] EditSignError),
}
