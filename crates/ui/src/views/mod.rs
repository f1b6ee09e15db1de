mod achievements;
mod components;
mod course_details;
mod home;
mod progress;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use achievements::AchievementsView;
pub use course_details::CourseDetailsView;
pub use home::HomeView;
pub use progress::ProgressView;
pub use state::{ViewError, ViewState, view_state_from_resource};
