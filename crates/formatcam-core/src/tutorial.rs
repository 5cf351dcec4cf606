//! Composition lessons, each paired with a practice grid.

use serde::Serialize;

use crate::grid::GridVariant;
use crate::session::{Session, ShootingMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialLesson {
    pub title: &'static str,
    pub concept: &'static str,
    pub master_name: &'static str,
    pub master_bio: &'static str,
    /// Grid switched on when the lesson's practice starts.
    pub practice_grid: GridVariant,
    pub challenge_name: &'static str,
}

impl TutorialLesson {
    /// Put `session` into practice mode with this lesson's grid.
    pub fn start_practice(&self, session: &mut Session) {
        session.set_mode(ShootingMode::Practice);
        session.set_grid(self.practice_grid);
    }
}

const RULE_OF_THIRDS: TutorialLesson = TutorialLesson {
    title: "Tutorial 1: The Rule of Thirds",
    concept: "Split the frame into nine equal parts with two horizontal and two \
              vertical lines. Putting the subject on one of those lines, or where \
              two of them cross, usually gives a livelier and better balanced \
              picture than placing it dead center.",
    master_name: "Henri Cartier-Bresson",
    master_bio: "French photographer and an early master of candid street \
                 photography. His \"decisive moment\" pictures are known for \
                 their precise geometry, often built on the thirds.",
    practice_grid: GridVariant::ThirdsIntersections,
    challenge_name: "Rule of Thirds",
};

/// Lessons shipped with the app, in teaching order.
pub fn builtin_lessons() -> &'static [TutorialLesson] {
    &[RULE_OF_THIRDS]
}
