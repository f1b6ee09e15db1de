use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("user name cannot be empty")]
    EmptyName,
}

/// Unvalidated learner profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    #[serde(default)]
    pub photo_url: String,
    pub courses_in_progress: u32,
    pub completed_courses: u32,
    pub total_points: u32,
}

impl UserDraft {
    /// # Errors
    ///
    /// Returns `UserError::EmptyName` if the name is blank.
    pub fn validate(self) -> Result<User, UserError> {
        if self.name.trim().is_empty() {
            return Err(UserError::EmptyName);
        }
        Ok(User {
            name: self.name,
            photo_url: self.photo_url,
            courses_in_progress: self.courses_in_progress,
            completed_courses: self.completed_courses,
            total_points: self.total_points,
        })
    }
}

/// The single learner the app is showing.
///
/// Counters are stored as reported by the profile; they are not derived from
/// the course list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDraft")]
pub struct User {
    name: String,
    photo_url: String,
    courses_in_progress: u32,
    completed_courses: u32,
    total_points: u32,
}

impl TryFrom<UserDraft> for User {
    type Error = UserError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl User {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.trim()
    }

    #[must_use]
    pub fn photo_url(&self) -> Option<&str> {
        let url = self.photo_url.trim();
        (!url.is_empty()).then_some(url)
    }

    #[must_use]
    pub fn courses_in_progress(&self) -> u32 {
        self.courses_in_progress
    }

    #[must_use]
    pub fn completed_courses(&self) -> u32 {
        self.completed_courses
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.total_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_trimmed() {
        let user = UserDraft {
            name: "Abel Huallullo Matos  ".to_string(),
            photo_url: String::new(),
            courses_in_progress: 3,
            completed_courses: 12,
            total_points: 2450,
        }
        .validate()
        .unwrap();
        assert_eq!(user.display_name(), "Abel Huallullo Matos");
        assert_eq!(user.photo_url(), None);
    }

    #[test]
    fn rejects_blank_name() {
        let err = UserDraft {
            name: " ".to_string(),
            photo_url: String::new(),
            courses_in_progress: 0,
            completed_courses: 0,
            total_points: 0,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, UserError::EmptyName);
    }
}
