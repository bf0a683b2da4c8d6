//! Agent profiles: which tools and prompts each itinerary agent is given.

pub mod profile;

pub use profile::{AgentProfile, PROFILE_NAMES};
