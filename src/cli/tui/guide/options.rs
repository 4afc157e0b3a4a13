//! Selectable options per step and the cursor over them

use crate::i18n::Localizer;
use crate::wizard::{
    AnswersPatch, ApplicationType, OrientationChoice, PoleCount, Step, WizardAnswers,
};

/// Optional step-4 refinement checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refinement {
    Locking,
    Special,
    Keying,
}

impl Refinement {
    pub const ALL: [Refinement; 3] = [Refinement::Locking, Refinement::Special, Refinement::Keying];

    pub fn label_key(&self) -> &'static str {
        match self {
            Refinement::Locking => "guide.refinements.requires_locking",
            Refinement::Special => "guide.refinements.special_version",
            Refinement::Keying => "guide.refinements.specific_keying",
        }
    }

    pub fn is_set(&self, answers: &WizardAnswers) -> bool {
        match self {
            Refinement::Locking => answers.requires_locking,
            Refinement::Special => answers.special_version,
            Refinement::Keying => answers.specific_keying,
        }
    }

    /// Patch flipping this checkbox
    pub fn toggle(&self, answers: &WizardAnswers) -> AnswersPatch {
        let value = Some(!self.is_set(answers));
        match self {
            Refinement::Locking => AnswersPatch {
                requires_locking: value,
                ..Default::default()
            },
            Refinement::Special => AnswersPatch {
                special_version: value,
                ..Default::default()
            },
            Refinement::Keying => AnswersPatch {
                specific_keying: value,
                ..Default::default()
            },
        }
    }
}

/// A rendered option: label and whether it is the current answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub label: String,
    pub chosen: bool,
}

/// Number of options on a step (zero on results)
pub fn option_count(step: Step) -> usize {
    match step {
        Step::ApplicationType => ApplicationType::ALL.len(),
        Step::PoleCount => PoleCount::options().count(),
        Step::Orientation => OrientationChoice::ALL.len(),
        Step::Refinements => Refinement::ALL.len(),
        Step::Results => 0,
    }
}

/// Localized options for a step, marking the current answers
pub fn option_items(step: Step, answers: &WizardAnswers, localizer: &Localizer) -> Vec<OptionItem> {
    match step {
        Step::ApplicationType => ApplicationType::ALL
            .iter()
            .map(|app| OptionItem {
                label: localizer
                    .t(&format!("guide.application.{}", app.as_str()))
                    .to_string(),
                chosen: answers.application_type == Some(*app),
            })
            .collect(),
        Step::PoleCount => PoleCount::options()
            .map(|poles| OptionItem {
                label: localizer.t_with("guide.poles.option", &[("count", &poles.to_string())]),
                chosen: answers.pole_count == Some(poles),
            })
            .collect(),
        Step::Orientation => OrientationChoice::ALL
            .iter()
            .map(|choice| OptionItem {
                label: localizer
                    .t(&format!("guide.orientation.{}", choice.as_str()))
                    .to_string(),
                chosen: answers.orientation == Some(*choice),
            })
            .collect(),
        Step::Refinements => Refinement::ALL
            .iter()
            .map(|refinement| OptionItem {
                label: localizer.t(refinement.label_key()).to_string(),
                chosen: refinement.is_set(answers),
            })
            .collect(),
        Step::Results => Vec::new(),
    }
}

/// Patch produced by pressing Space on option `index` of `step`
pub fn select(step: Step, index: usize, answers: &WizardAnswers) -> Option<AnswersPatch> {
    match step {
        Step::ApplicationType => ApplicationType::ALL
            .get(index)
            .map(|app| AnswersPatch::application_type(*app)),
        Step::PoleCount => PoleCount::options().nth(index).map(AnswersPatch::pole_count),
        Step::Orientation => OrientationChoice::ALL
            .get(index)
            .map(|choice| AnswersPatch::orientation(*choice)),
        Step::Refinements => Refinement::ALL
            .get(index)
            .map(|refinement| refinement.toggle(answers)),
        Step::Results => None,
    }
}

/// Cursor position on each question step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    positions: [usize; 4],
}

impl Cursor {
    pub fn get(&self, step: Step) -> usize {
        self.slot(step).map(|i| self.positions[i]).unwrap_or(0)
    }

    pub fn up(&mut self, step: Step) {
        if let Some(i) = self.slot(step) {
            self.positions[i] = self.positions[i].saturating_sub(1);
        }
    }

    pub fn down(&mut self, step: Step) {
        if let Some(i) = self.slot(step) {
            let last = option_count(step).saturating_sub(1);
            if self.positions[i] < last {
                self.positions[i] += 1;
            }
        }
    }

    pub fn reset(&mut self) {
        self.positions = [0; 4];
    }

    fn slot(&self, step: Step) -> Option<usize> {
        match step {
            Step::Results => None,
            other => Some(other.index() - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamps_to_options() {
        let mut cursor = Cursor::default();
        cursor.up(Step::ApplicationType);
        assert_eq!(cursor.get(Step::ApplicationType), 0);

        for _ in 0..10 {
            cursor.down(Step::ApplicationType);
        }
        assert_eq!(cursor.get(Step::ApplicationType), 2);
        assert_eq!(cursor.get(Step::PoleCount), 0);
    }

    #[test]
    fn test_refinement_toggle_flips_only_its_field() {
        let answers = WizardAnswers {
            special_version: true,
            ..Default::default()
        };
        let patch = Refinement::Special.toggle(&answers);
        assert_eq!(patch.special_version, Some(false));
        assert_eq!(patch.requires_locking, None);
    }

    #[test]
    fn test_pole_options_are_localized() {
        let localizer = Localizer::new("de").unwrap();
        let items = option_items(Step::PoleCount, &WizardAnswers::default(), &localizer);
        assert_eq!(items.len(), 11);
        assert_eq!(items[0].label, "2-polig");
    }
}
