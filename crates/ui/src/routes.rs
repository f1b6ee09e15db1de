//! Typed routes and the back stack that drives which screen is shown.

use std::fmt;
use std::str::FromStr;

use learn_core::model::CourseId;
use thiserror::Error;

/// Every screen the app can show, with the parameters it needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    CourseDetails {
        course_id: CourseId,
    },
    Progress,
    Achievements,
}

impl Route {
    #[must_use]
    pub fn course_details(course_id: CourseId) -> Self {
        Self::CourseDetails { course_id }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("home"),
            Route::CourseDetails { course_id } => write!(f, "course_details/{course_id}"),
            Route::Progress => f.write_str("progress"),
            Route::Achievements => f.write_str("achievements"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RouteParseError {
    #[error("unknown route: {0}")]
    UnknownRoute(String),
    #[error("invalid course id in route: {0}")]
    InvalidCourseId(String),
}

impl FromStr for Route {
    type Err = RouteParseError;

    /// Parse a deep link such as `course_details/2`. A leading `/` is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim().trim_start_matches('/');
        match path {
            "" | "home" => Ok(Route::Home),
            "progress" => Ok(Route::Progress),
            "achievements" => Ok(Route::Achievements),
            _ => {
                let raw_id = path
                    .strip_prefix("course_details/")
                    .ok_or_else(|| RouteParseError::UnknownRoute(s.to_owned()))?;
                let course_id = raw_id
                    .parse::<CourseId>()
                    .map_err(|_| RouteParseError::InvalidCourseId(raw_id.to_owned()))?;
                Ok(Route::course_details(course_id))
            }
        }
    }
}

/// Back stack of routes. Never empty; the bottom entry is the root screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on `Home`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    /// Start on `route`, keeping `Home` underneath so back still works.
    #[must_use]
    pub fn from_deep_link(route: Route) -> Self {
        let mut navigator = Self::new();
        if route != Route::Home {
            navigator.navigate(route);
        }
        navigator
    }

    #[must_use]
    pub fn active(&self) -> &Route {
        // The stack always holds at least the root entry.
        self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.active(), to = %route, "navigate");
        self.stack.push(route);
    }

    /// Pop the active route. At the root this is a no-op and returns `false`.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let left = self.stack.pop();
        tracing::debug!(left = ?left, to = %self.active(), "back");
        true
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
