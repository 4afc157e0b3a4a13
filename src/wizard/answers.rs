//! Answers collected across the wizard steps

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{GuideError, Result};

/// What the connector joins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationType {
    WireToWire,
    WireToBoard,
    BoardToBoard,
}

impl ApplicationType {
    pub const ALL: [ApplicationType; 3] = [
        ApplicationType::WireToWire,
        ApplicationType::WireToBoard,
        ApplicationType::BoardToBoard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::WireToWire => "wire-to-wire",
            ApplicationType::WireToBoard => "wire-to-board",
            ApplicationType::BoardToBoard => "board-to-board",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orientation the user asked for. `Either` places no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationChoice {
    Horizontal,
    Vertical,
    Either,
}

impl OrientationChoice {
    pub const ALL: [OrientationChoice; 3] = [
        OrientationChoice::Horizontal,
        OrientationChoice::Vertical,
        OrientationChoice::Either,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrientationChoice::Horizontal => "horizontal",
            OrientationChoice::Vertical => "vertical",
            OrientationChoice::Either => "either",
        }
    }
}

impl fmt::Display for OrientationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of contact positions, restricted to the range the guide offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PoleCount(u8);

impl PoleCount {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 12;

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every selectable pole count, ascending
    pub fn options() -> impl Iterator<Item = PoleCount> {
        (Self::MIN..=Self::MAX).map(PoleCount)
    }
}

impl TryFrom<u8> for PoleCount {
    type Error = GuideError;

    fn try_from(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(PoleCount(value))
        } else {
            Err(GuideError::InvalidPoleCount(value))
        }
    }
}

impl From<PoleCount> for u8 {
    fn from(value: PoleCount) -> Self {
        value.0
    }
}

impl fmt::Display for PoleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accumulated wizard answers. Created empty, reset on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardAnswers {
    pub application_type: Option<ApplicationType>,
    pub pole_count: Option<PoleCount>,
    pub orientation: Option<OrientationChoice>,
    pub requires_locking: bool,
    pub special_version: bool,
    pub specific_keying: bool,
}

impl WizardAnswers {
    /// Shallow-merge a patch. Only fields present in the patch change.
    pub fn merge(&mut self, patch: AnswersPatch) {
        if let Some(application_type) = patch.application_type {
            self.application_type = Some(application_type);
        }
        if let Some(pole_count) = patch.pole_count {
            self.pole_count = Some(pole_count);
        }
        if let Some(orientation) = patch.orientation {
            self.orientation = Some(orientation);
        }
        if let Some(requires_locking) = patch.requires_locking {
            self.requires_locking = requires_locking;
        }
        if let Some(special_version) = patch.special_version {
            self.special_version = special_version;
        }
        if let Some(specific_keying) = patch.specific_keying {
            self.specific_keying = specific_keying;
        }
    }
}

/// Partial update for [`WizardAnswers`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswersPatch {
    pub application_type: Option<ApplicationType>,
    pub pole_count: Option<PoleCount>,
    pub orientation: Option<OrientationChoice>,
    pub requires_locking: Option<bool>,
    pub special_version: Option<bool>,
    pub specific_keying: Option<bool>,
}

impl AnswersPatch {
    pub fn application_type(application_type: ApplicationType) -> Self {
        Self {
            application_type: Some(application_type),
            ..Self::default()
        }
    }

    pub fn pole_count(pole_count: PoleCount) -> Self {
        Self {
            pole_count: Some(pole_count),
            ..Self::default()
        }
    }

    pub fn orientation(orientation: OrientationChoice) -> Self {
        Self {
            orientation: Some(orientation),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pole_count_range() {
        assert!(PoleCount::try_from(1).is_err());
        assert!(PoleCount::try_from(13).is_err());
        assert_eq!(PoleCount::try_from(2).unwrap().get(), 2);
        assert_eq!(PoleCount::try_from(12).unwrap().get(), 12);
        assert_eq!(PoleCount::options().count(), 11);
    }

    #[test]
    fn test_pole_count_rejected_when_deserializing() {
        let err = serde_json::from_str::<PoleCount>("40");
        assert!(err.is_err());
        let ok: PoleCount = serde_json::from_str("8").unwrap();
        assert_eq!(ok.get(), 8);
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut answers = WizardAnswers {
            application_type: Some(ApplicationType::WireToBoard),
            special_version: true,
            ..Default::default()
        };

        answers.merge(AnswersPatch {
            requires_locking: Some(true),
            ..Default::default()
        });

        assert_eq!(answers.application_type, Some(ApplicationType::WireToBoard));
        assert!(answers.special_version);
        assert!(answers.requires_locking);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let before = WizardAnswers {
            orientation: Some(OrientationChoice::Either),
            ..Default::default()
        };
        let mut after = before.clone();
        after.merge(AnswersPatch::default());
        assert!(AnswersPatch::default().is_empty());
        assert_eq!(before, after);
    }

    #[test]
    fn test_application_type_serde_names() {
        let parsed: ApplicationType = serde_json::from_str("\"board-to-board\"").unwrap();
        assert_eq!(parsed, ApplicationType::BoardToBoard);
        assert_eq!(ApplicationType::WireToWire.to_string(), "wire-to-wire");
    }
}
