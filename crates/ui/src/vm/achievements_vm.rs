use learn_core::model::{Achievement, AchievementId, Catalog};

use crate::vm::format::completion_percentage;

const LOCKED_HINT: &str = "Keep learning to unlock";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementVm {
    pub id: AchievementId,
    pub title: String,
    pub icon: String,
    pub date: String,
    pub description: String,
    pub unlocked: bool,
    pub hint: Option<&'static str>,
}

impl From<&Achievement> for AchievementVm {
    fn from(achievement: &Achievement) -> Self {
        let unlocked = achievement.is_unlocked();
        Self {
            id: achievement.id(),
            title: achievement.title().to_owned(),
            icon: achievement.icon().to_owned(),
            date: achievement.date().to_owned(),
            description: achievement.description().to_owned(),
            unlocked,
            hint: (!unlocked).then_some(LOCKED_HINT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementsVm {
    pub unlocked_count: usize,
    pub total_count: usize,
    pub completion_percentage: u8,
    pub total_points: u32,
    pub items: Vec<AchievementVm>,
}

impl AchievementsVm {
    /// `"4 / 8"`.
    #[must_use]
    pub fn summary_label(&self) -> String {
        format!("{} / {}", self.unlocked_count, self.total_count)
    }
}

#[must_use]
pub fn build_achievements_vm(catalog: &Catalog) -> AchievementsVm {
    let achievements = catalog.achievements();
    let unlocked_count = achievements
        .iter()
        .filter(|achievement| achievement.is_unlocked())
        .count();
    let total_count = achievements.len();

    AchievementsVm {
        unlocked_count,
        total_count,
        completion_percentage: completion_percentage(unlocked_count, total_count),
        total_points: catalog.user().total_points(),
        items: achievements.iter().map(AchievementVm::from).collect(),
    }
}
