use learn_core::model::{Catalog, CourseId, CourseModule};

use crate::vm::course_vm::CourseCardVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRowVm {
    pub number: u32,
    pub title: String,
    pub lessons_label: String,
    pub completed: bool,
    pub current: bool,
}

impl From<&CourseModule> for ModuleRowVm {
    fn from(module: &CourseModule) -> Self {
        Self {
            number: module.number,
            title: module.title.clone(),
            lessons_label: format!("{} lessons", module.lessons),
            completed: module.completed,
            current: module.current,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailsVm {
    pub course: CourseCardVm,
    pub description: String,
    pub declared_modules: u32,
    pub lessons: u32,
    pub outline: Vec<ModuleRowVm>,
    /// Whether the shared outline length equals the course's declared module count.
    pub outline_matches_declared: bool,
    /// The requested id was unknown and the first course is shown instead.
    pub is_fallback: bool,
}

/// Build the details view for `course_id`.
///
/// Unknown ids fall back to the first course; `None` means the catalog has no courses.
#[must_use]
pub fn build_course_details_vm(catalog: &Catalog, course_id: CourseId) -> Option<CourseDetailsVm> {
    let resolved = catalog.resolve_course(course_id)?;
    if resolved.is_fallback() {
        tracing::warn!(
            requested = %course_id,
            shown = %resolved.course.id(),
            "unknown course id, showing first course"
        );
    }

    let course = resolved.course;
    let outline: Vec<ModuleRowVm> = catalog
        .module_outline()
        .iter()
        .map(ModuleRowVm::from)
        .collect();
    let outline_matches_declared =
        u32::try_from(outline.len()).is_ok_and(|len| len == course.modules());

    Some(CourseDetailsVm {
        course: CourseCardVm::from(course),
        description: course.description().to_owned(),
        declared_modules: course.modules(),
        lessons: course.lessons(),
        outline,
        outline_matches_declared,
        is_fallback: resolved.is_fallback(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::test_support::{catalog_with, fixture_catalog};

    #[test]
    fn resolves_requested_course() {
        let vm = build_course_details_vm(&fixture_catalog(), CourseId::new(2)).unwrap();
        assert_eq!(vm.course.title, "Jetpack Compose");
        assert!(!vm.is_fallback);
        assert_eq!(vm.declared_modules, 6);
        assert_eq!(vm.lessons, 38);
    }

    #[test]
    fn unknown_course_shows_first_course() {
        let vm = build_course_details_vm(&fixture_catalog(), CourseId::new(999)).unwrap();
        assert_eq!(vm.course.id, CourseId::new(1));
        assert_eq!(vm.course.title, "Kotlin Avanzado");
        assert!(vm.is_fallback);
    }

    #[test]
    fn empty_catalog_has_no_details() {
        let catalog = catalog_with(Vec::new(), Vec::new());
        assert!(build_course_details_vm(&catalog, CourseId::new(1)).is_none());
    }

    #[test]
    fn outline_is_shared_and_does_not_follow_declared_modules() {
        let catalog = fixture_catalog();
        for course in catalog.courses() {
            let vm = build_course_details_vm(&catalog, course.id()).unwrap();
            assert_eq!(vm.outline.len(), 4);
            assert_eq!(vm.outline[2].title, "Conceptos Avanzados");
            assert!(vm.outline[2].current);
            assert_eq!(vm.outline[0].lessons_label, "5 lessons");
        }

        // Kotlin Avanzado declares 8 modules while the outline lists 4.
        let kotlin = build_course_details_vm(&catalog, CourseId::new(1)).unwrap();
        assert_eq!(kotlin.declared_modules, 8);
        assert!(!kotlin.outline_matches_declared);

        let mismatched = catalog
            .courses()
            .iter()
            .filter(|course| {
                !build_course_details_vm(&catalog, course.id())
                    .unwrap()
                    .outline_matches_declared
            })
            .count();
        assert_eq!(mismatched, 4);
    }
}
