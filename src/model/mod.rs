//! # Prosodic Model
//!
//! Plain data shared by every stage of the scansion pipeline: syllable
//! weights, metrical feet, and the verse types a line can be scanned as.
//!
//! Plain data only. Nothing here touches phonology or the bridge.

pub mod weight;
pub mod foot;
pub mod verse_type;

pub use weight::Weight;
pub use foot::Foot;
pub use verse_type::{VerseType, VerseForm};
