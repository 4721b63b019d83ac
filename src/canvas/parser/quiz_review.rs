use itertools::Itertools;
use log::warn;
use scraper::{ElementRef, Html};

use crate::canvas::schema::{AnswerText, QuestionRecord};

/// Parses a saved Canvas quiz review page.
///
/// Question prompts and answer containers are laid out as two parallel flat
/// lists in this page format, so they are paired by position rather than by
/// DOM relationship.  When the counts differ, pairing stops at the shorter
/// list and the extra elements are ignored.
pub fn parse(html: &Html) -> Vec<QuestionRecord> {
    let questions = html.select(selector!("div.question_text")).collect_vec();
    let answers_divs = html.select(selector!("div.answers")).collect_vec();
    if questions.len() != answers_divs.len() {
        warn!(
            "Found {} question block(s) but {} answer container(s); extra elements are ignored",
            questions.len(),
            answers_divs.len(),
        );
    }
    questions
        .into_iter()
        .zip(answers_divs)
        .map(|(question, answers_div)| parse_question(question, answers_div))
        .collect()
}

fn parse_question(question: ElementRef, answers_div: ElementRef) -> QuestionRecord {
    let answers = answers_div
        .select(selector!("div.answer_text"))
        .map(|e| AnswerText::from(flattened_text(e)))
        .collect();
    let correct_answer = answers_div
        .select(selector!("div.answer.correct_answer div.answer_text"))
        .next()
        .map(|e| flattened_text(e).into());
    QuestionRecord::builder()
        .question(flattened_text(question).into())
        .answers(answers)
        .correct_answer(correct_answer)
        .build()
}

/// Text content of the element with every text fragment trimmed and empty
/// fragments dropped, concatenated without separators.
fn flattened_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
