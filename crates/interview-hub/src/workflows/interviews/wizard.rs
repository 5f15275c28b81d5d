use serde::Serialize;

use super::assembler::InterviewDraft;
use super::domain::{ClassificationProfile, Question, QuestionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Parameters,
    QuestionSelection,
}

impl WizardStep {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Parameters => "Define Interview Parameters",
            Self::QuestionSelection => "Select Questions",
        }
    }
}

/// Two-step interview creation: define parameters, then pick from the suggested questions.
#[derive(Debug, Clone)]
pub struct InterviewWizard {
    title: String,
    profile: ClassificationProfile,
    step: WizardStep,
    suggestions: Vec<Question>,
    selected: Vec<Question>,
}

impl Default for InterviewWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewWizard {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            profile: ClassificationProfile::default(),
            step: WizardStep::Parameters,
            suggestions: Vec::new(),
            selected: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn profile(&self) -> ClassificationProfile {
        self.profile
    }

    pub fn suggestions(&self) -> &[Question] {
        &self.suggestions
    }

    pub fn selected(&self) -> &[Question] {
        &self.selected
    }

    pub fn can_generate(&self) -> bool {
        self.step == WizardStep::Parameters && !self.title.trim().is_empty()
    }

    pub fn can_create(&self) -> bool {
        self.step == WizardStep::QuestionSelection && !self.selected.is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), WizardError> {
        self.require(WizardStep::Parameters)?;
        self.title = title.into();
        Ok(())
    }

    pub fn set_profile(&mut self, profile: ClassificationProfile) -> Result<(), WizardError> {
        self.require(WizardStep::Parameters)?;
        self.profile = profile;
        Ok(())
    }

    /// Store the matcher output for the current parameters and move to question selection.
    ///
    /// Any earlier selection is discarded.
    pub fn generate_suggestions(&mut self, suggestions: Vec<Question>) -> Result<(), WizardError> {
        self.require(WizardStep::Parameters)?;
        if self.title.trim().is_empty() {
            return Err(WizardError::MissingTitle);
        }
        self.suggestions = suggestions;
        self.selected.clear();
        self.step = WizardStep::QuestionSelection;
        Ok(())
    }

    /// Flip a suggested question in or out of the selection. Returns whether it is now selected.
    pub fn toggle(&mut self, question_id: &QuestionId) -> Result<bool, WizardError> {
        self.require(WizardStep::QuestionSelection)?;

        if let Some(position) = self
            .selected
            .iter()
            .position(|question| &question.id == question_id)
        {
            self.selected.remove(position);
            return Ok(false);
        }

        let question = self
            .suggestions
            .iter()
            .find(|question| &question.id == question_id)
            .ok_or_else(|| WizardError::NotSuggested {
                question_id: question_id.clone(),
            })?;
        self.selected.push(question.clone());
        Ok(true)
    }

    pub fn select_all(&mut self) -> Result<(), WizardError> {
        self.require(WizardStep::QuestionSelection)?;
        self.selected = self.suggestions.clone();
        Ok(())
    }

    /// Return to parameter editing, keeping the title and classification.
    pub fn back(&mut self) {
        self.step = WizardStep::Parameters;
    }

    pub fn into_draft(self) -> Result<InterviewDraft, WizardError> {
        self.require(WizardStep::QuestionSelection)?;
        if self.selected.is_empty() {
            return Err(WizardError::NothingSelected);
        }
        Ok(InterviewDraft {
            title: self.title,
            profile: self.profile,
            questions: self.selected,
        })
    }

    fn require(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("enter an interview title before generating suggestions")]
    MissingTitle,
    #[error("select at least one question before creating the interview")]
    NothingSelected,
    #[error("question '{question_id}' is not among the suggestions")]
    NotSuggested { question_id: QuestionId },
    #[error("wizard is at '{}' but the action needs '{}'", actual.label(), expected.label())]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::interviews::domain::ExperienceLevel;
    use crate::workflows::interviews::fixtures::CatalogFixtures;
    use crate::workflows::interviews::matcher::match_questions;

    fn suggestions_for(wizard: &InterviewWizard) -> Vec<Question> {
        let fixtures = CatalogFixtures::standard();
        match_questions(&fixtures.questions, &wizard.profile())
    }

    fn id(raw: &str) -> QuestionId {
        QuestionId(raw.to_string())
    }

    #[test]
    fn suggestions_require_a_title() {
        let mut wizard = InterviewWizard::new();
        assert!(!wizard.can_generate());
        assert_eq!(
            wizard.generate_suggestions(Vec::new()),
            Err(WizardError::MissingTitle)
        );

        wizard.set_title("Frontend loop").expect("title editable");
        let suggestions = suggestions_for(&wizard);
        wizard
            .generate_suggestions(suggestions)
            .expect("suggestions generated");
        assert_eq!(wizard.step(), WizardStep::QuestionSelection);
        assert_eq!(wizard.suggestions().len(), 2);
    }

    #[test]
    fn toggle_tracks_selection_in_click_order() {
        let mut wizard = InterviewWizard::new();
        wizard.set_title("Frontend loop").expect("title editable");
        let suggestions = suggestions_for(&wizard);
        wizard.generate_suggestions(suggestions).expect("generated");

        assert_eq!(wizard.toggle(&id("q2")), Ok(true));
        assert_eq!(wizard.toggle(&id("q1")), Ok(true));
        let order: Vec<_> = wizard.selected().iter().map(|q| q.id.0.as_str()).collect();
        assert_eq!(order, vec!["q2", "q1"]);

        assert_eq!(wizard.toggle(&id("q2")), Ok(false));
        assert_eq!(wizard.selected().len(), 1);
        assert_eq!(
            wizard.toggle(&id("q7")),
            Err(WizardError::NotSuggested {
                question_id: id("q7")
            })
        );

        let draft = wizard.into_draft().expect("draft ready");
        assert_eq!(draft.title, "Frontend loop");
        assert_eq!(draft.questions.len(), 1);
        assert_eq!(draft.questions[0].id, id("q1"));
    }

    #[test]
    fn parameters_are_locked_during_selection() {
        let mut wizard = InterviewWizard::new();
        wizard.set_title("Backend loop").expect("title editable");
        wizard.generate_suggestions(Vec::new()).expect("generated");

        let senior = ClassificationProfile {
            experience_level: ExperienceLevel::Senior,
            ..ClassificationProfile::default()
        };
        assert!(matches!(
            wizard.set_profile(senior),
            Err(WizardError::WrongStep {
                expected: WizardStep::Parameters,
                actual: WizardStep::QuestionSelection,
            })
        ));
        assert!(!wizard.can_create());
        assert_eq!(
            wizard.clone().into_draft(),
            Err(WizardError::NothingSelected)
        );

        wizard.back();
        wizard.set_profile(senior).expect("editable after back");
        assert_eq!(wizard.title(), "Backend loop");
        let suggestions = suggestions_for(&wizard);
        wizard.generate_suggestions(suggestions).expect("regenerated");
        wizard.select_all().expect("select all");
        assert!(wizard.can_create());
        let draft = wizard.into_draft().expect("draft ready");
        assert_eq!(draft.profile.experience_level, ExperienceLevel::Senior);
        assert_eq!(draft.questions[0].id, id("q3"));
    }
}
