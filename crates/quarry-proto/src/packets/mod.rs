//! Game packet definitions.

pub mod block_actor_data;

pub use block_actor_data::BlockActorData;
