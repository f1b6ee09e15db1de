use learn_core::model::{Course, CourseId};

use crate::vm::format::{percent_label, rating_label};

/// UI-ready representation of a course for list cards and headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub category: String,
    pub progress: u8,
    pub progress_label: String,
    pub rating_label: String,
    pub students_label: String,
    pub duration: String,
    pub is_popular: bool,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id(),
            title: course.title().to_owned(),
            category: course.category().to_owned(),
            progress: course.progress(),
            progress_label: percent_label(course.progress()),
            rating_label: rating_label(course.rating()),
            students_label: course.students().to_string(),
            duration: course.duration().to_owned(),
            is_popular: course.is_popular(),
        }
    }
}

pub(crate) fn map_course_cards<'a>(
    courses: impl Iterator<Item = &'a Course>,
) -> Vec<CourseCardVm> {
    courses.map(CourseCardVm::from).collect()
}
