use super::domain::{ClassificationProfile, Question};

/// Questions whose four classification attributes all equal `profile`, in catalog order.
///
/// An empty result means nothing in the catalog fits; it is not an error.
pub fn match_questions<'a, I>(questions: I, profile: &ClassificationProfile) -> Vec<Question>
where
    I: IntoIterator<Item = &'a Question>,
{
    questions
        .into_iter()
        .filter(|question| question.profile == *profile)
        .cloned()
        .collect()
}
