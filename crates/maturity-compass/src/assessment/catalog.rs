use super::domain::{Dimension, DimensionCode, Framework, Question, QuestionId};
use serde::Serialize;

/// Read-only questionnaire definition: dimensions and their weighted
/// questions. Assessments answer against one catalog snapshot.
pub struct QuestionnaireCatalog {
    dimensions: Vec<Dimension>,
    questions: Vec<Question>,
}

impl QuestionnaireCatalog {
    pub fn new(dimensions: Vec<Dimension>, questions: Vec<Question>) -> Self {
        Self {
            dimensions,
            questions,
        }
    }

    /// The standard governance questionnaire: four framework-aligned
    /// dimensions and ten questions, all at the default weight.
    pub fn standard() -> Self {
        let seeds: [(&str, &str, Framework, &[&str]); 4] = [
            (
                "PM_PLAN",
                "Planejamento",
                Framework::Pmbok,
                &[
                    "Existe um plano de projeto formalmente aprovado?",
                    "O cronograma foi desenvolvido com estimativas confiáveis?",
                    "Os riscos foram identificados e possuem planos de resposta?",
                ],
            ),
            (
                "HC_CHANGE",
                "Gestão de Mudanças",
                Framework::Hcmbok,
                &[
                    "Há plano estruturado de gestão de mudanças?",
                    "Comunicação com stakeholders é contínua e segmentada?",
                ],
            ),
            (
                "PR_GOV",
                "Governança do Projeto",
                Framework::Prince,
                &[
                    "Papéis e responsabilidades estão claros?",
                    "Decisões e exceções são registradas e rastreáveis?",
                    "Há checkpoints/gates definidos e aplicados?",
                ],
            ),
            (
                "COMP_CTRL",
                "Controles de Compliance",
                Framework::Compliance,
                &[
                    "O projeto segue políticas e procedimentos internos?",
                    "Registros de compliance são mantidos e auditáveis?",
                ],
            ),
        ];

        let mut dimensions = Vec::new();
        let mut questions = Vec::new();
        for (code, title, framework, texts) in seeds {
            dimensions.push(Dimension {
                code: DimensionCode(code.to_string()),
                title: title.to_string(),
                framework,
            });
            for (idx, text) in texts.iter().enumerate() {
                let order = idx as u32 + 1;
                questions.push(Question {
                    id: QuestionId(format!("{code}-{order:02}")),
                    dimension: DimensionCode(code.to_string()),
                    text: text.to_string(),
                    weight: 1.0,
                    order,
                    is_active: true,
                });
            }
        }

        Self::new(dimensions, questions)
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }

    pub fn active_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|question| question.is_active)
    }

    /// Published questionnaire shape: dimensions with their active questions
    /// nested in catalog order.
    pub fn questionnaire_view(&self) -> Vec<DimensionView> {
        self.dimensions
            .iter()
            .map(|dimension| DimensionView {
                code: dimension.code.clone(),
                title: dimension.title.clone(),
                framework: dimension.framework.label(),
                questions: self
                    .active_questions()
                    .filter(|question| question.dimension == dimension.code)
                    .map(|question| QuestionView {
                        id: question.id.clone(),
                        text: question.text.clone(),
                        weight: question.weight,
                        order: question.order,
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for QuestionnaireCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Dimension plus nested questions for the questionnaire endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionView {
    pub code: DimensionCode,
    pub title: String,
    pub framework: &'static str,
    pub questions: Vec<QuestionView>,
}

/// Sanitized question representation for public consumption.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: String,
    pub weight: f64,
    pub order: u32,
}
