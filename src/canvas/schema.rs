use getset::Getters;
use serde::Serialize;
use typed_builder::TypedBuilder;

#[derive(
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    derive_more::From,
    derive_more::AsRef,
    derive_more::Display,
    Serialize,
)]
#[as_ref(forward)]
pub struct QuestionText(String);

#[derive(
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    derive_more::From,
    derive_more::AsRef,
    derive_more::Display,
    Serialize,
)]
#[as_ref(forward)]
pub struct AnswerText(String);

/// One question extracted from a quiz review page.
///
/// Two records are equal iff the question text, the full ordered answer list,
/// and the correct answer (or its absence) all coincide.  Answer order is part
/// of the identity.
#[derive(Clone, PartialEq, Eq, Hash, Debug, TypedBuilder, Getters, Serialize)]
#[getset(get = "pub")]
pub struct QuestionRecord {
    question: QuestionText,
    /// Answer options in source markup order.
    answers: Vec<AnswerText>,
    /// `None` when no option carries the correct-answer marker.
    correct_answer: Option<AnswerText>,
}
