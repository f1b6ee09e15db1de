use dioxus::prelude::*;

use crate::shell::Intent;
use crate::views::components::{CourseCard, EmptyNote, StatTile};
use crate::vm::HomeVm;

#[component]
pub fn HomeView(vm: HomeVm, on_intent: EventHandler<Intent>) -> Element {
    rsx! {
        div { class: "page home",
            header { class: "home-header",
                h1 { "{vm.greeting}" }
                p { class: "subtitle", "What do you want to learn today?" }
            }

            section { class: "stats-row",
                StatTile { label: "Points", value: vm.total_points.to_string() }
                StatTile { label: "In progress", value: vm.courses_in_progress.to_string() }
                StatTile { label: "Completed", value: vm.completed_courses.to_string() }
            }

            section { class: "course-section",
                h2 { "My courses" }
                if vm.in_progress.is_empty() {
                    EmptyNote { text: "You have not started any course yet." }
                } else {
                    div { class: "course-list",
                        for card in vm.in_progress {
                            CourseCard {
                                key: "mine-{card.id}",
                                card,
                                on_select: move |id| on_intent.call(Intent::OpenCourse(id)),
                            }
                        }
                    }
                }
            }

            section { class: "course-section",
                h2 { "Popular courses" }
                if vm.popular.is_empty() {
                    EmptyNote { text: "No popular courses right now." }
                } else {
                    div { class: "course-list horizontal",
                        for card in vm.popular {
                            CourseCard {
                                key: "popular-{card.id}",
                                card,
                                on_select: move |id| on_intent.call(Intent::OpenPopularCourse(id)),
                            }
                        }
                    }
                }
            }

            nav { class: "bottom-nav",
                button { class: "nav-item active", r#type: "button", "Home" }
                button {
                    class: "nav-item",
                    r#type: "button",
                    onclick: move |_| on_intent.call(Intent::OpenProgress),
                    "Progress"
                }
                button {
                    class: "nav-item",
                    r#type: "button",
                    onclick: move |_| on_intent.call(Intent::OpenAchievements),
                    "Achievements"
                }
            }
        }
    }
}
