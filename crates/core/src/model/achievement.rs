use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::AchievementId;

/// Date label shown for achievements that have not been unlocked yet.
pub const LOCKED_DATE_PLACEHOLDER: &str = "Próximamente";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AchievementError {
    #[error("achievement title cannot be empty")]
    EmptyTitle,

    #[error("unlocked achievement {0} has no unlock date")]
    MissingUnlockDate(AchievementId),
}

/// Unvalidated achievement fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDraft {
    pub id: AchievementId,
    pub title: String,
    pub icon: String,
    pub unlocked: bool,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

impl AchievementDraft {
    /// Validate the draft into an `Achievement`.
    ///
    /// Locked achievements without a date get `LOCKED_DATE_PLACEHOLDER`.
    ///
    /// # Errors
    ///
    /// Returns `AchievementError::EmptyTitle` if the title is blank.
    /// Returns `AchievementError::MissingUnlockDate` if an unlocked achievement has no date.
    pub fn validate(self) -> Result<Achievement, AchievementError> {
        if self.title.trim().is_empty() {
            return Err(AchievementError::EmptyTitle);
        }

        let date = self.date.trim();
        let date = match (self.unlocked, date.is_empty()) {
            (true, true) => return Err(AchievementError::MissingUnlockDate(self.id)),
            (false, true) => LOCKED_DATE_PLACEHOLDER.to_owned(),
            _ => date.to_owned(),
        };

        Ok(Achievement {
            id: self.id,
            title: self.title,
            icon: self.icon,
            unlocked: self.unlocked,
            date,
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AchievementDraft")]
pub struct Achievement {
    id: AchievementId,
    title: String,
    icon: String,
    unlocked: bool,
    date: String,
    description: String,
}

impl TryFrom<AchievementDraft> for Achievement {
    type Error = AchievementError;

    fn try_from(draft: AchievementDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl Achievement {
    /// Build an unlocked achievement earned on `date`.
    ///
    /// # Errors
    ///
    /// Returns `AchievementError` if the title or date is blank.
    pub fn unlocked(
        id: AchievementId,
        title: impl Into<String>,
        icon: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self, AchievementError> {
        AchievementDraft {
            id,
            title: title.into(),
            icon: icon.into(),
            unlocked: true,
            date: date.into(),
            description: String::new(),
        }
        .validate()
    }

    /// Build a locked achievement carrying the placeholder date label.
    ///
    /// # Errors
    ///
    /// Returns `AchievementError::EmptyTitle` if the title is blank.
    pub fn locked(
        id: AchievementId,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self, AchievementError> {
        AchievementDraft {
            id,
            title: title.into(),
            icon: icon.into(),
            unlocked: false,
            date: String::new(),
            description: String::new(),
        }
        .validate()
    }

    #[must_use]
    pub fn id(&self) -> AchievementId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Unlock date, or the placeholder label while locked.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
