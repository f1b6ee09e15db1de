mod achievements_vm;
mod course_details_vm;
mod course_vm;
mod format;
mod home_vm;
mod progress_vm;

pub use achievements_vm::{AchievementVm, AchievementsVm, build_achievements_vm};
pub use course_details_vm::{CourseDetailsVm, ModuleRowVm, build_course_details_vm};
pub use course_vm::CourseCardVm;
pub use format::{completion_percentage, percent_label, rating_label};
pub use home_vm::{HomeVm, build_home_vm};
pub use progress_vm::{CertificateVm, ProgressVm, build_progress_vm};
