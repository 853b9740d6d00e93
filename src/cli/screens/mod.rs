//! Text renderings of the wallet screens. Renderers return lines so the
//! commands decide when to print and tests can inspect the output.

pub mod categories;
pub mod idikhar;
pub mod savings;
pub mod wallet_home;
pub mod wizard;

use colored::Color;
use wallet_domain::{PlanCategory, PlanStatus, SavingsPlan, SpendCategory};

/// Glyph and accent colour of a plan card. Completed plans share the
/// success look regardless of category.
pub fn plan_visual(plan: &SavingsPlan) -> (&'static str, Color) {
    if plan.status == PlanStatus::Completed {
        return ("✔", Color::Green);
    }
    match plan.category {
        PlanCategory::Vacation => ("◎", Color::Blue),
        PlanCategory::Emergency => ("↗", Color::Green),
        PlanCategory::House => ("◎", Color::Magenta),
        PlanCategory::Car => ("◎", Color::Yellow),
        PlanCategory::Education => ("◎", Color::BrightBlue),
        PlanCategory::Other => ("◎", Color::BrightBlack),
    }
}

pub fn spend_visual(category: SpendCategory) -> (&'static str, Color) {
    match category {
        SpendCategory::Food => ("🛒", Color::Yellow),
        SpendCategory::Transport => ("🚗", Color::Blue),
        SpendCategory::Housing => ("🏠", Color::Green),
        SpendCategory::Entertainment => ("☕", Color::Magenta),
        SpendCategory::Shopping => ("🎮", Color::BrightMagenta),
        SpendCategory::Health => ("♥", Color::Red),
    }
}
