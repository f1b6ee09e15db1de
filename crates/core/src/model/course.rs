use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::CourseId;

/// Upper bound for `Course::progress` (percent).
pub const MAX_PROGRESS: u8 = 100;

/// Upper bound for `Course::rating` (stars).
pub const MAX_RATING: f32 = 5.0;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course progress must be in 0..=100, got {0}")]
    ProgressOutOfRange(u8),

    #[error("course rating must be in 0.0..=5.0, got {0}")]
    RatingOutOfRange(f32),
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Unvalidated course fields, as read from a fixture source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub id: CourseId,
    pub title: String,
    pub category: String,
    pub progress: u8,
    pub duration: String,
    pub rating: f32,
    pub students: u32,
    pub is_popular: bool,
    pub description: String,
    pub modules: u32,
    pub lessons: u32,
}

impl CourseDraft {
    /// Validate the draft into a `Course`.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyTitle` if the title is blank.
    /// Returns `CourseError::ProgressOutOfRange` if progress exceeds 100.
    /// Returns `CourseError::RatingOutOfRange` if the rating is not a finite value in `0.0..=5.0`.
    pub fn validate(self) -> Result<Course, CourseError> {
        if self.title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        if self.progress > MAX_PROGRESS {
            return Err(CourseError::ProgressOutOfRange(self.progress));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CourseError::RatingOutOfRange(self.rating));
        }

        Ok(Course {
            id: self.id,
            title: self.title,
            category: self.category,
            progress: self.progress,
            duration: self.duration,
            rating: self.rating,
            students: self.students,
            is_popular: self.is_popular,
            description: self.description,
            modules: self.modules,
            lessons: self.lessons,
        })
    }
}

/// A course offered by the catalog, together with the learner's progress in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CourseDraft")]
pub struct Course {
    id: CourseId,
    title: String,
    category: String,
    progress: u8,
    duration: String,
    rating: f32,
    students: u32,
    is_popular: bool,
    description: String,
    modules: u32,
    lessons: u32,
}

impl TryFrom<CourseDraft> for Course {
    type Error = CourseError;

    fn try_from(draft: CourseDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl Course {
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Completion in percent, always within `0..=100`.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Human-readable duration label (e.g. "12 horas").
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn rating(&self) -> f32 {
        self.rating
    }

    #[must_use]
    pub fn students(&self) -> u32 {
        self.students
    }

    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.is_popular
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared module count. Not tied to the catalog's module outline.
    #[must_use]
    pub fn modules(&self) -> u32 {
        self.modules
    }

    #[must_use]
    pub fn lessons(&self) -> u32 {
        self.lessons
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.progress > 0
    }

    /// Started but not finished.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.progress > 0 && self.progress < MAX_PROGRESS
    }
}

//
// ─── MODULE OUTLINE ────────────────────────────────────────────────────────────
//

/// One entry of the course content outline shown on the details screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    pub number: u32,
    pub title: String,
    pub lessons: u32,
    pub completed: bool,
    #[serde(default)]
    pub current: bool,
}

impl CourseModule {
    #[must_use]
    pub fn new(number: u32, title: impl Into<String>, lessons: u32, completed: bool) -> Self {
        Self {
            number,
            title: title.into(),
            lessons,
            completed,
            current: false,
        }
    }

    /// Mark this module as the one the learner is currently on.
    #[must_use]
    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(progress: u8, rating: f32) -> CourseDraft {
        CourseDraft {
            id: CourseId::new(1),
            title: "Kotlin Avanzado".to_string(),
            category: "Programación".to_string(),
            progress,
            duration: "12 horas".to_string(),
            rating,
            students: 15_420,
            is_popular: true,
            description: "Corrutinas".to_string(),
            modules: 8,
            lessons: 45,
        }
    }

    #[test]
    fn accepts_progress_boundaries() {
        let untouched = draft(0, 4.8).validate().unwrap();
        assert!(!untouched.is_started());
        assert!(!untouched.is_active());

        let finished = draft(100, 4.8).validate().unwrap();
        assert!(finished.is_started());
        assert!(!finished.is_active());
    }

    #[test]
    fn rejects_progress_above_hundred() {
        let err = draft(101, 4.8).validate().unwrap_err();
        assert_eq!(err, CourseError::ProgressOutOfRange(101));
    }

    #[test]
    fn rejects_rating_out_of_range() {
        assert!(draft(10, 5.0).validate().is_ok());
        assert!(draft(10, 0.0).validate().is_ok());
        assert!(matches!(
            draft(10, 5.1).validate(),
            Err(CourseError::RatingOutOfRange(_))
        ));
        assert!(matches!(
            draft(10, f32::NAN).validate(),
            Err(CourseError::RatingOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_blank_title() {
        let mut blank = draft(10, 4.0);
        blank.title = "   ".to_string();
        assert_eq!(blank.validate().unwrap_err(), CourseError::EmptyTitle);
    }

    #[test]
    fn deserialization_runs_validation() {
        let json = serde_json::to_string(&draft(150, 4.0)).unwrap();
        let result = serde_json::from_str::<Course>(&json);
        assert!(result.is_err());
    }
}
