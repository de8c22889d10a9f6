//! YouTube Data API v3 client.
//!
//! Thin request/response mapping over the search, channels, and
//! playlistItems endpoints. Remote failures degrade to an empty result
//! list (logged) rather than failing the request; the transcript path
//! uses explicit errors instead. See DESIGN.md for the policy split.

mod client;
mod types;

pub use client::{VideoSearch, YoutubeClient};
pub use types::{ChannelResult, SearchOrder, VideoResult};
