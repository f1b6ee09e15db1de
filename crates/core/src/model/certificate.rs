use serde::{Deserialize, Serialize};

use crate::model::ids::CertificateId;

/// A completion certificate earned for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    id: CertificateId,
    course: String,
    date: String,
    verified: bool,
}

impl Certificate {
    #[must_use]
    pub fn new(
        id: CertificateId,
        course: impl Into<String>,
        date: impl Into<String>,
        verified: bool,
    ) -> Self {
        Self {
            id,
            course: course.into(),
            date: date.into(),
            verified,
        }
    }

    #[must_use]
    pub fn id(&self) -> CertificateId {
        self.id
    }

    /// Name of the course the certificate was issued for.
    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verified
    }
}
