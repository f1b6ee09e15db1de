//! Root composition state: the catalog, the back stack and the analytics
//! handle, plus the intents screens raise against them.

use std::sync::Arc;

use learn_core::model::{AchievementId, Catalog, CourseId};
use services::{Analytics, events};

use crate::routes::{Navigator, Route};
use crate::vm::{
    AchievementsVm, CourseDetailsVm, HomeVm, ProgressVm, build_achievements_vm,
    build_course_details_vm, build_home_vm, build_progress_vm,
};

/// User interactions raised by the screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Tap on a course in the home "My courses" section.
    OpenCourse(CourseId),
    /// Tap on a course in the home "Popular courses" section.
    OpenPopularCourse(CourseId),
    OpenProgress,
    OpenAchievements,
    /// "Continue learning" on the details screen. Does not navigate.
    ContinueLearning,
    SelectAchievement(AchievementId),
    Back,
}

/// View model for whichever screen is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Home(HomeVm),
    /// `None` when the catalog has no course to show.
    CourseDetails(Option<CourseDetailsVm>),
    Progress(ProgressVm),
    Achievements(AchievementsVm),
}

pub struct AppShell {
    catalog: Arc<Catalog>,
    navigator: Navigator,
    analytics: Analytics,
}

impl AppShell {
    /// Open the app on `start` and record the entry event for that screen.
    #[must_use]
    pub fn start(catalog: Arc<Catalog>, analytics: Analytics, start: Route) -> Self {
        let shell = Self {
            catalog,
            navigator: Navigator::from_deep_link(start),
            analytics,
        };
        shell.log_screen_entry();
        shell
    }

    #[must_use]
    pub fn active_route(&self) -> Route {
        *self.navigator.active()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::OpenCourse(course_id) => {
                if let Some(course) = self.catalog.course(course_id) {
                    self.analytics.log(&events::course_selected(course));
                }
                self.go_to(Route::course_details(course_id));
            }
            Intent::OpenPopularCourse(course_id) => {
                if let Some(course) = self.catalog.course(course_id) {
                    self.analytics.log(&events::popular_course_clicked(course));
                }
                self.go_to(Route::course_details(course_id));
            }
            Intent::OpenProgress => self.go_to(Route::Progress),
            Intent::OpenAchievements => self.go_to(Route::Achievements),
            Intent::ContinueLearning => {
                if let Route::CourseDetails { course_id } = self.active_route()
                    && let Some(resolved) = self.catalog.resolve_course(course_id)
                {
                    self.analytics
                        .log(&events::continue_learning_clicked(resolved.course));
                }
            }
            Intent::SelectAchievement(achievement_id) => {
                if let Some(achievement) = self
                    .catalog
                    .achievement(achievement_id)
                    .filter(|achievement| achievement.is_unlocked())
                {
                    self.analytics.log(&events::achievement_clicked(achievement));
                }
            }
            Intent::Back => {
                if self.navigator.back() {
                    self.log_screen_entry();
                }
            }
        }
    }

    /// Derive the view model of the active screen.
    #[must_use]
    pub fn screen(&self) -> ScreenVm {
        match self.active_route() {
            Route::Home => ScreenVm::Home(build_home_vm(&self.catalog)),
            Route::CourseDetails { course_id } => {
                ScreenVm::CourseDetails(build_course_details_vm(&self.catalog, course_id))
            }
            Route::Progress => ScreenVm::Progress(build_progress_vm(&self.catalog)),
            Route::Achievements => ScreenVm::Achievements(build_achievements_vm(&self.catalog)),
        }
    }

    fn go_to(&mut self, route: Route) {
        self.navigator.navigate(route);
        self.log_screen_entry();
    }

    fn log_screen_entry(&self) {
        let event = match self.active_route() {
            Route::Home => events::screen_view(events::HOME_SCREEN),
            Route::Progress => events::screen_view(events::PROGRESS_SCREEN),
            Route::Achievements => events::screen_view(events::ACHIEVEMENTS_SCREEN),
            Route::CourseDetails { course_id } => {
                match self.catalog.resolve_course(course_id) {
                    Some(resolved) => events::course_details_viewed(resolved.course),
                    None => return,
                }
            }
        };
        self.analytics.log(&event);
    }
}
