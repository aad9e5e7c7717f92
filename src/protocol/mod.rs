//! Peer-to-peer turn messages.
//!
//! Each turn action travels as a `TurnMessage` carrying the acting seat and
//! the roll or `Move`. The receiver never adopts the sender's state: it
//! replays the action on its own copy with `apply_remote`, which rejects
//! stale or fabricated moves and flags divergence.
//!
//! Transport is the caller's job; messages encode to bytes with bincode.
//!
//! Note that the dice value is taken on trust from the seat on turn. Nothing
//! here proves it was actually rolled.

mod message;

pub use message::{apply_remote, ProtocolError, RemoteApplied, RemoteOutcome, TurnMessage};
