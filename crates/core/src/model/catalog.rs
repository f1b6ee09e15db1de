use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::achievement::Achievement;
use crate::model::certificate::Certificate;
use crate::model::course::{Course, CourseModule};
use crate::model::ids::{AchievementId, CertificateId, CourseId};
use crate::model::user::User;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate course id {0}")]
    DuplicateCourse(CourseId),

    #[error("duplicate achievement id {0}")]
    DuplicateAchievement(AchievementId),

    #[error("duplicate certificate id {0}")]
    DuplicateCertificate(CertificateId),
}

/// How a requested course id was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseResolution {
    Exact,
    /// No course had the requested id; the first course was used instead.
    Fallback { requested: CourseId },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCourse<'a> {
    pub course: &'a Course,
    pub resolution: CourseResolution,
}

impl ResolvedCourse<'_> {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.resolution, CourseResolution::Fallback { .. })
    }
}

/// Catalog contents before id uniqueness has been checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDraft {
    pub user: User,
    pub courses: Vec<Course>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub module_outline: Vec<CourseModule>,
}

impl CatalogDraft {
    /// # Errors
    ///
    /// Returns `CatalogError` if any course, achievement or certificate id repeats.
    pub fn validate(self) -> Result<Catalog, CatalogError> {
        first_duplicate(self.courses.iter().map(Course::id))
            .map_or(Ok(()), |id| Err(CatalogError::DuplicateCourse(id)))?;
        first_duplicate(self.achievements.iter().map(Achievement::id))
            .map_or(Ok(()), |id| Err(CatalogError::DuplicateAchievement(id)))?;
        first_duplicate(self.certificates.iter().map(Certificate::id))
            .map_or(Ok(()), |id| Err(CatalogError::DuplicateCertificate(id)))?;

        Ok(Catalog {
            user: self.user,
            courses: self.courses,
            achievements: self.achievements,
            certificates: self.certificates,
            module_outline: self.module_outline,
        })
    }
}

fn first_duplicate<T: Eq + Hash + Copy>(mut ids: impl Iterator<Item = T>) -> Option<T> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

/// Everything the screens render: one learner plus the course, achievement
/// and certificate lists. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDraft")]
pub struct Catalog {
    user: User,
    courses: Vec<Course>,
    achievements: Vec<Achievement>,
    certificates: Vec<Certificate>,
    module_outline: Vec<CourseModule>,
}

impl TryFrom<CatalogDraft> for Catalog {
    type Error = CatalogError;

    fn try_from(draft: CatalogDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl Catalog {
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    #[must_use]
    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    /// Content outline shown on every course details screen.
    ///
    /// This list is shared across courses and is not derived from `Course::modules`.
    #[must_use]
    pub fn module_outline(&self) -> &[CourseModule] {
        &self.module_outline
    }

    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    #[must_use]
    pub fn achievement(&self, id: AchievementId) -> Option<&Achievement> {
        self.achievements
            .iter()
            .find(|achievement| achievement.id() == id)
    }

    /// Resolve a course id, falling back to the first course when it is unknown.
    ///
    /// Returns `None` only when the catalog has no courses.
    #[must_use]
    pub fn resolve_course(&self, id: CourseId) -> Option<ResolvedCourse<'_>> {
        if let Some(course) = self.course(id) {
            return Some(ResolvedCourse {
                course,
                resolution: CourseResolution::Exact,
            });
        }

        self.courses.first().map(|course| ResolvedCourse {
            course,
            resolution: CourseResolution::Fallback { requested: id },
        })
    }
}
