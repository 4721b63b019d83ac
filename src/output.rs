use std::io::{BufWriter, Write};
use std::path::Path;

use fs_err::File;
use itertools::chain;
use serde::Serialize;

use crate::canvas::schema::{AnswerText, QuestionRecord};

pub fn save_txt(path: &Path, records: &[QuestionRecord]) -> anyhow::Result<()> {
    write_txt(BufWriter::new(File::create(path)?), records)
}

pub fn save_csv(path: &Path, records: &[QuestionRecord]) -> anyhow::Result<()> {
    write_csv(File::create(path)?, records)
}

pub fn write_txt(mut out: impl Write, records: &[QuestionRecord]) -> anyhow::Result<()> {
    for record in records {
        writeln!(out, "Question: {}", record.question())?;
        for answer in record.answers() {
            writeln!(out, " - {answer}")?;
        }
        match record.correct_answer() {
            Some(correct) => writeln!(out, "Correct Answer: {correct}")?,
            None => writeln!(out, "Correct Answer: None")?,
        }
        writeln!(out)?;
    }
    write!(out, "\n\n")?;
    Ok(())
}

/// A row in the Quizlet import format: the term is the question followed by
/// every answer option on its own line, the definition is the correct answer.
#[derive(Serialize)]
struct QuizletRow<'a> {
    term: String,
    definition: Option<&'a AnswerText>,
}

pub fn write_csv(out: impl Write, records: &[QuestionRecord]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    // Written explicitly so that an empty record list still gets the header
    writer.write_record(["term", "definition"])?;
    for record in records {
        let term = chain(
            [record.question().as_ref()],
            record.answers().iter().map(AsRef::as_ref),
        )
        .collect::<Vec<&str>>()
        .join("\n");
        writer.serialize(QuizletRow {
            term,
            definition: record.correct_answer().as_ref(),
        })?;
    }
    Ok(writer.flush()?)
}

#[cfg(test)]
mod tests {
    use crate::canvas::schema::QuestionRecord;

    use super::{write_csv, write_txt};

    fn record(question: &str, answers: &[&str], correct: Option<&str>) -> QuestionRecord {
        QuestionRecord::builder()
            .question(question.to_owned().into())
            .answers(answers.iter().map(|&a| a.to_owned().into()).collect())
            .correct_answer(correct.map(|c| c.to_owned().into()))
            .build()
    }

    fn txt(records: &[QuestionRecord]) -> String {
        let mut out = vec![];
        write_txt(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn csv(records: &[QuestionRecord]) -> String {
        let mut out = vec![];
        write_csv(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn txt_single_record() {
        let records = [record("2+2=?", &["3", "4", "5"], Some("4"))];
        assert_eq!(
            txt(&records),
            "Question: 2+2=?\n - 3\n - 4\n - 5\nCorrect Answer: 4\n\n\n\n"
        );
    }

    #[test]
    fn txt_absent_correct_answer_prints_none() {
        let records = [record("Q", &["A"], None)];
        assert_eq!(txt(&records), "Question: Q\n - A\nCorrect Answer: None\n\n\n\n");
    }

    #[test]
    fn txt_records_are_separated_by_blank_lines() {
        let records = [
            record("Q1", &["A"], Some("A")),
            record("Q2", &["B"], Some("B")),
        ];
        assert_eq!(
            txt(&records),
            "Question: Q1\n - A\nCorrect Answer: A\n\nQuestion: Q2\n - B\nCorrect Answer: B\n\n\n\n"
        );
    }

    #[test]
    fn txt_empty_list_writes_only_the_trailing_separator() {
        assert_eq!(txt(&[]), "\n\n");
    }

    #[test]
    fn csv_single_record() {
        let records = [record("2+2=?", &["3", "4", "5"], Some("4"))];
        assert_eq!(csv(&records), "term,definition\n\"2+2=?\n3\n4\n5\",4\n");
    }

    #[test]
    fn csv_absent_correct_answer_is_an_empty_field() {
        let records = [record("Q", &["A", "B"], None)];
        assert_eq!(csv(&records), "term,definition\n\"Q\nA\nB\",\n");
    }

    #[test]
    fn csv_header_is_written_for_an_empty_list() {
        assert_eq!(csv(&[]), "term,definition\n");
    }

    #[test]
    fn csv_quotes_are_doubled() {
        let records = [record(r#"Who said "no"?"#, &["Ann"], Some("Ann"))];
        assert_eq!(
            csv(&records),
            "term,definition\n\"Who said \"\"no\"\"?\nAnn\",Ann\n"
        );
    }
}
