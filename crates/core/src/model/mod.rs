mod achievement;
mod catalog;
mod certificate;
mod course;
mod ids;
mod user;

pub use ids::{AchievementId, CertificateId, CourseId, ParseIdError};

pub use achievement::{Achievement, AchievementDraft, AchievementError, LOCKED_DATE_PLACEHOLDER};
pub use catalog::{Catalog, CatalogDraft, CatalogError, CourseResolution, ResolvedCourse};
pub use certificate::Certificate;
pub use course::{Course, CourseDraft, CourseError, CourseModule, MAX_PROGRESS, MAX_RATING};
pub use user::{User, UserDraft, UserError};
