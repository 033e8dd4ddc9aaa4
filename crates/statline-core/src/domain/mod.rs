//! Domain types for the remote group/stat hierarchy.
//!
//! Both entities are remote-owned: the service assigns identity and
//! generated metadata, the client only supplies identity-defining fields at
//! creation and changed fields at update.

mod group;
mod stat;
mod timestamp;

pub use group::{Group, GroupDraft, GroupId};
pub use stat::{BarColor, BarItem, Stat, StatDraft, StatId, StatPatch, StatValue, VisualType};
pub use timestamp::UtcDateTime;
