use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Opaque group identifier assigned by the dashboard service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for GroupId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named remote collection that owns stats.
///
/// Membership and admin lists are assigned by the service when the group is
/// created; the client never writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admins: Vec<String>,
}

/// Creation template for a group. Carries only the identity-defining name;
/// the service fills in id, membership, and admin metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDraft {
    pub name: String,
}

impl GroupDraft {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyGroupName);
        }
        Ok(Self { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_carries_only_the_name() {
        let draft = GroupDraft::new("Statline-API-Examples").expect("valid name");
        let json = serde_json::to_value(&draft).expect("must serialize");
        assert_eq!(json, serde_json::json!({ "name": "Statline-API-Examples" }));
    }

    #[test]
    fn rejects_blank_group_name() {
        let err = GroupDraft::new("   ").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyGroupName));
    }

    #[test]
    fn group_deserializes_without_membership_fields() {
        let group: Group =
            serde_json::from_str(r#"{"id":"g1","name":"Ops"}"#).expect("must deserialize");
        assert_eq!(group.id.as_str(), "g1");
        assert!(group.members.is_empty());
    }
}
