use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

use super::UtcDateTime;

/// Opaque stat identifier assigned by the dashboard service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatId(String);

impl StatId {
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

impl Display for StatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminator selecting the shape of a stat's value payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualType {
    Number,
    HorizontalBars,
    Dialer,
}

impl VisualType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::HorizontalBars => "HORIZONTAL_BARS",
            Self::Dialer => "DIALER",
        }
    }
}

impl Display for VisualType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color for a horizontal bar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BarColor {
    Green,
    Amber,
    Red,
    Blue,
    Gray,
}

/// One labeled bar of a horizontal-bar stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarItem {
    pub name: String,
    pub value: String,
    pub color: BarColor,
}

impl BarItem {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        color: BarColor,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        Ok(Self {
            name,
            value: value.into(),
            color,
        })
    }
}

/// Value payload of a stat, tagged on the wire with its visual type.
///
/// The variant and the `visualType` discriminator move together, which makes
/// a payload/tag mismatch unrepresentable in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "visualType")]
pub enum StatValue {
    #[serde(rename = "NUMBER")]
    Number { value: String },
    #[serde(rename = "HORIZONTAL_BARS")]
    HorizontalBars { items: Vec<BarItem> },
    #[serde(rename = "DIALER")]
    Dialer { value: String },
}

impl StatValue {
    pub const fn visual_type(&self) -> VisualType {
        match self {
            Self::Number { .. } => VisualType::Number,
            Self::HorizontalBars { .. } => VisualType::HorizontalBars,
            Self::Dialer { .. } => VisualType::Dialer,
        }
    }

    pub fn number(value: impl Into<String>) -> Self {
        Self::Number {
            value: value.into(),
        }
    }

    pub fn horizontal_bars(items: Vec<BarItem>) -> Self {
        Self::HorizontalBars { items }
    }

    pub fn dialer(value: impl Into<String>) -> Self {
        Self::Dialer {
            value: value.into(),
        }
    }
}

/// A remote dashboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: StatId,
    pub title: String,
    #[serde(flatten)]
    pub value: StatValue,
    #[serde(
        rename = "lastUpdatedDateTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<UtcDateTime>,
}

impl Stat {
    pub const fn visual_type(&self) -> VisualType {
        self.value.visual_type()
    }

    /// Build an update for this stat carrying a fresh value.
    ///
    /// The submitted payload must keep the variant this stat was created
    /// with; switching variants in place is rejected before any remote call.
    pub fn patch_with(
        &self,
        value: StatValue,
        last_updated: UtcDateTime,
    ) -> Result<StatPatch, ValidationError> {
        if value.visual_type() != self.visual_type() {
            return Err(ValidationError::ValueVariantMismatch {
                expected: self.visual_type().as_str(),
                submitted: value.visual_type().as_str(),
            });
        }
        Ok(StatPatch {
            value,
            last_updated,
        })
    }
}

/// Creation template for a stat: title, owning group name, and the initial
/// value payload. The service assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatDraft {
    pub title: String,
    #[serde(rename = "groupName")]
    pub group_name: String,
    #[serde(flatten)]
    pub value: StatValue,
}

impl StatDraft {
    pub fn new(
        title: impl Into<String>,
        group_name: impl Into<String>,
        value: StatValue,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let group_name = group_name.into();
        if group_name.trim().is_empty() {
            return Err(ValidationError::EmptyGroupName);
        }
        Ok(Self {
            title,
            group_name,
            value,
        })
    }
}

/// Update body for an existing stat: only the fields that change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatPatch {
    #[serde(flatten)]
    pub value: StatValue,
    #[serde(rename = "lastUpdatedDateTime")]
    pub last_updated: UtcDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_stat() -> Stat {
        serde_json::from_str(r#"{"id":"s1","title":"Days left","visualType":"NUMBER","value":"12"}"#)
            .expect("must deserialize")
    }

    #[test]
    fn value_serializes_with_visual_type_tag() {
        let value = StatValue::number("42");
        let json = serde_json::to_value(&value).expect("must serialize");
        assert_eq!(
            json,
            serde_json::json!({ "visualType": "NUMBER", "value": "42" })
        );
    }

    #[test]
    fn bar_value_serializes_items_field() {
        let items = vec![BarItem::new("AAPL", "187.20", BarColor::Green).expect("valid item")];
        let json = serde_json::to_value(StatValue::horizontal_bars(items)).expect("must serialize");
        assert_eq!(json["visualType"], "HORIZONTAL_BARS");
        assert_eq!(json["items"][0]["color"], "GREEN");
    }

    #[test]
    fn stat_roundtrips_through_flattened_payload() {
        let stat = number_stat();
        assert_eq!(stat.visual_type(), VisualType::Number);
        assert_eq!(stat.value, StatValue::number("12"));
    }

    #[test]
    fn patch_keeps_variant() {
        let stat = number_stat();
        let patch = stat
            .patch_with(StatValue::number("11"), UtcDateTime::now())
            .expect("same variant must be accepted");
        assert_eq!(patch.value, StatValue::number("11"));
    }

    #[test]
    fn patch_rejects_variant_switch() {
        let stat = number_stat();
        let err = stat
            .patch_with(StatValue::horizontal_bars(Vec::new()), UtcDateTime::now())
            .expect_err("variant switch must be rejected");
        assert!(matches!(err, ValidationError::ValueVariantMismatch { .. }));
    }
}
