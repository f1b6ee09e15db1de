use learn_core::model::Catalog;

use crate::vm::course_vm::{CourseCardVm, map_course_cards};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub greeting: String,
    pub total_points: u32,
    pub courses_in_progress: u32,
    pub completed_courses: u32,
    /// Courses with any progress. May overlap with `popular`.
    pub in_progress: Vec<CourseCardVm>,
    pub popular: Vec<CourseCardVm>,
}

#[must_use]
pub fn build_home_vm(catalog: &Catalog) -> HomeVm {
    let user = catalog.user();
    let courses = catalog.courses();

    HomeVm {
        greeting: format!("Hi, {}!", user.display_name()),
        total_points: user.total_points(),
        courses_in_progress: user.courses_in_progress(),
        completed_courses: user.completed_courses(),
        in_progress: map_course_cards(courses.iter().filter(|course| course.is_started())),
        popular: map_course_cards(courses.iter().filter(|course| course.is_popular())),
    }
}
