use super::RecommendationKind;
use serde::{Deserialize, Serialize};

/// Target language for rendered recommendations. The advisory content was
/// authored in Brazilian Portuguese; further locales extend this enum and the
/// message table below without touching selection logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    PtBr,
}

impl RecommendationKind {
    pub fn message(self, locale: Locale) -> &'static str {
        match locale {
            Locale::PtBr => self.message_pt_br(),
        }
    }

    fn message_pt_br(self) -> &'static str {
        match self {
            RecommendationKind::FormalizePlanning => {
                "Formalize planejamento: escopo, cronograma e riscos com aprovações claras."
            }
            RecommendationKind::MinimumComplianceControls => {
                "Implemente controles mínimos de compliance (políticas internas e registros)."
            }
            RecommendationKind::RefineChangeManagement => {
                "Aprimore gestão de mudanças (comunicação segmentada e patrocínio ativo)."
            }
            RecommendationKind::StrengthenGovernance => {
                "Fortaleça governança: papéis claros, registro de decisões e checkpoints."
            }
            RecommendationKind::ConsolidateLessonsLearned => {
                "Consolide lições aprendidas e amplie automação de controles e métricas."
            }
            RecommendationKind::IncrementalDelivery => {
                "Priorize entregas incrementais com métricas de valor e adoção pelo usuário."
            }
        }
    }
}
