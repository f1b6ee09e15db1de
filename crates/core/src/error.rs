use thiserror::Error;

use crate::model::{AchievementError, CatalogError, CourseError, UserError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Achievement(#[from] AchievementError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
