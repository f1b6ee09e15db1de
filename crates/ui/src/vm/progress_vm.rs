use learn_core::model::{Catalog, Certificate, CertificateId};

use crate::vm::achievements_vm::AchievementVm;
use crate::vm::course_vm::{CourseCardVm, map_course_cards};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateVm {
    pub id: CertificateId,
    pub course: String,
    pub completed_label: String,
    pub verified: bool,
}

impl From<&Certificate> for CertificateVm {
    fn from(certificate: &Certificate) -> Self {
        Self {
            id: certificate.id(),
            course: certificate.course().to_owned(),
            completed_label: format!("Completed: {}", certificate.date()),
            verified: certificate.is_verified(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub total_points: u32,
    /// Taken from the user profile, not counted from the course list.
    pub completed_courses: u32,
    pub courses_in_progress: u32,
    /// Courses started but not finished.
    pub active: Vec<CourseCardVm>,
    pub badges: Vec<AchievementVm>,
    pub certificates: Vec<CertificateVm>,
}

impl ProgressVm {
    /// Badges laid out two per row.
    #[must_use]
    pub fn badge_rows(&self) -> Vec<Vec<AchievementVm>> {
        self.badges.chunks(2).map(<[AchievementVm]>::to_vec).collect()
    }
}

#[must_use]
pub fn build_progress_vm(catalog: &Catalog) -> ProgressVm {
    let user = catalog.user();

    ProgressVm {
        total_points: user.total_points(),
        completed_courses: user.completed_courses(),
        courses_in_progress: user.courses_in_progress(),
        active: map_course_cards(catalog.courses().iter().filter(|course| course.is_active())),
        badges: catalog
            .achievements()
            .iter()
            .map(AchievementVm::from)
            .collect(),
        certificates: catalog
            .certificates()
            .iter()
            .map(CertificateVm::from)
            .collect(),
    }
}
