use super::catalog::QuestionnaireCatalog;
use super::domain::{Answer, QuestionId, WeightedAnswer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Wire shape for one submitted answer.
///
/// Clients normally send the structured record; legacy clients send the same
/// record JSON-encoded inside a string. Both variants are handled explicitly
/// and anything else is a validation error, never best-effort parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerPayload {
    Record(AnswerRecord),
    Legacy(String),
}

/// Structured answer record as accepted over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: QuestionId,
    pub value: i32,
}

/// Validation failures raised while normalizing submitted answers.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("malformed legacy answer payload: {detail}")]
    MalformedLegacyAnswer { detail: String },
    #[error("unknown question '{0}'")]
    UnknownQuestion(QuestionId),
    #[error("question '{0}' is no longer active")]
    InactiveQuestion(QuestionId),
    #[error("duplicate answer for question '{0}'")]
    DuplicateAnswer(QuestionId),
}

/// Normalize submitted payloads into validated [`Answer`]s.
///
/// Enforces the upstream invariants the engine assumes: every answer targets
/// a known, active question and no question is answered twice.
pub fn resolve_answers(
    payloads: Vec<AnswerPayload>,
    catalog: &QuestionnaireCatalog,
) -> Result<Vec<Answer>, IngestError> {
    let mut answers = Vec::with_capacity(payloads.len());
    let mut seen: HashSet<QuestionId> = HashSet::new();

    for payload in payloads {
        let record = match payload {
            AnswerPayload::Record(record) => record,
            AnswerPayload::Legacy(raw) => serde_json::from_str::<AnswerRecord>(&raw)
                .map_err(|err| IngestError::MalformedLegacyAnswer {
                    detail: err.to_string(),
                })?,
        };

        let question = catalog
            .question(&record.question)
            .ok_or_else(|| IngestError::UnknownQuestion(record.question.clone()))?;
        if !question.is_active {
            return Err(IngestError::InactiveQuestion(record.question.clone()));
        }
        if !seen.insert(record.question.clone()) {
            return Err(IngestError::DuplicateAnswer(record.question.clone()));
        }

        answers.push(Answer {
            question: record.question,
            value: record.value,
        });
    }

    Ok(answers)
}

/// Pair validated answers with their question weights for the calculator.
///
/// The weight default (missing or non-positive becomes 1.0) is resolved here
/// so the engine only ever sees a fully populated pair.
pub fn weighted_answers(answers: &[Answer], catalog: &QuestionnaireCatalog) -> Vec<WeightedAnswer> {
    answers
        .iter()
        .map(|answer| {
            let weight = catalog.question(&answer.question).map(|q| q.weight);
            WeightedAnswer::new(f64::from(answer.value), weight)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(question: &str, value: i32) -> AnswerPayload {
        AnswerPayload::Record(AnswerRecord {
            question: QuestionId(question.to_string()),
            value,
        })
    }

    #[test]
    fn resolves_structured_records() {
        let catalog = QuestionnaireCatalog::standard();
        let answers = resolve_answers(vec![record("PM_PLAN-01", 4)], &catalog)
            .expect("record variant resolves");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].value, 4);
    }

    #[test]
    fn resolves_legacy_string_records() {
        let catalog = QuestionnaireCatalog::standard();
        let payload = AnswerPayload::Legacy(r#"{"question":"HC_CHANGE-02","value":3}"#.to_string());
        let answers = resolve_answers(vec![payload], &catalog).expect("legacy variant resolves");
        assert_eq!(answers[0].question, QuestionId("HC_CHANGE-02".to_string()));
        assert_eq!(answers[0].value, 3);
    }

    #[test]
    fn malformed_legacy_payload_is_an_error_not_a_skip() {
        let catalog = QuestionnaireCatalog::standard();
        let payload = AnswerPayload::Legacy("not a record".to_string());
        let err = resolve_answers(vec![payload], &catalog).expect_err("malformed rejected");
        assert!(matches!(err, IngestError::MalformedLegacyAnswer { .. }));
    }

    #[test]
    fn unknown_question_is_rejected() {
        let catalog = QuestionnaireCatalog::standard();
        let err = resolve_answers(vec![record("GHOST-01", 2)], &catalog)
            .expect_err("unknown question rejected");
        assert!(matches!(err, IngestError::UnknownQuestion(_)));
    }

    #[test]
    fn duplicate_answers_for_a_question_are_rejected() {
        let catalog = QuestionnaireCatalog::standard();
        let err = resolve_answers(
            vec![record("PR_GOV-01", 5), record("PR_GOV-01", 1)],
            &catalog,
        )
        .expect_err("duplicate rejected");
        assert!(matches!(err, IngestError::DuplicateAnswer(_)));
    }

    #[test]
    fn inactive_question_is_rejected() {
        let standard = QuestionnaireCatalog::standard();
        let retired_id = QuestionId("COMP_CTRL-01".to_string());
        let questions = standard
            .active_questions()
            .cloned()
            .map(|mut question| {
                if question.id == retired_id {
                    question.is_active = false;
                }
                question
            })
            .collect();
        let catalog = QuestionnaireCatalog::new(standard.dimensions().to_vec(), questions);

        let err = resolve_answers(vec![record("COMP_CTRL-01", 3)], &catalog)
            .expect_err("inactive rejected");
        assert!(matches!(err, IngestError::InactiveQuestion(_)));
    }

    #[test]
    fn weighted_answers_carry_question_weights() {
        let catalog = QuestionnaireCatalog::standard();
        let answers = vec![
            Answer {
                question: QuestionId("PM_PLAN-01".to_string()),
                value: 4,
            },
            Answer {
                question: QuestionId("PM_PLAN-02".to_string()),
                value: 3,
            },
        ];
        let weighted = weighted_answers(&answers, &catalog);
        assert_eq!(weighted.len(), 2);
        assert_eq!(weighted[0].value, 4.0);
        assert_eq!(weighted[0].weight, 1.0);
    }
}
