use dioxus::prelude::*;

use crate::shell::Intent;
use crate::views::components::{AchievementTile, BackHeader, EmptyNote, ProgressBar};
use crate::vm::AchievementsVm;

#[component]
pub fn AchievementsView(vm: AchievementsVm, on_intent: EventHandler<Intent>) -> Element {
    let summary = vm.summary_label();

    rsx! {
        div { class: "page achievements",
            BackHeader {
                title: "Achievements".to_string(),
                on_back: move |()| on_intent.call(Intent::Back),
            }

            section { class: "achievement-summary",
                div { class: "summary-counts",
                    span { class: "summary-unlocked", "{summary}" }
                    span { "unlocked" }
                }
                ProgressBar { percent: vm.completion_percentage }
                span { class: "summary-percent", "{vm.completion_percentage}% complete" }
                span { class: "summary-points", "{vm.total_points} points" }
            }

            section { class: "achievement-grid",
                if vm.items.is_empty() {
                    EmptyNote { text: "No achievements yet." }
                } else {
                    for achievement in vm.items {
                        AchievementTile {
                            key: "{achievement.id}",
                            on_select: {
                                let id = achievement.id;
                                move |()| on_intent.call(Intent::SelectAchievement(id))
                            },
                            achievement,
                        }
                    }
                }
            }
        }
    }
}
