use crate::infra::{InMemoryAssessmentRepository, InMemoryProjectRepository};
use clap::Args;
use std::sync::Arc;

use maturity_compass::assessment::{
    AnswerPayload, AnswerRecord, AssessmentService, AssessmentSubmission, Locale, NewProject,
    QuestionnaireCatalog, RecommendationEngine, ScoreCalculator, WeightedAnswer,
};
use maturity_compass::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer values (0-5), comma separated, e.g. `4,3,5`
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) values: Vec<f64>,
    /// Question weights matching the values; missing entries default to 1.0
    #[arg(long, value_delimiter = ',')]
    pub(crate) weights: Option<Vec<f64>>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Project name used for the walkthrough
    #[arg(long)]
    pub(crate) project_name: Option<String>,
    /// Answer every question with this value instead of the sample spread
    #[arg(long)]
    pub(crate) uniform_answer: Option<i32>,
}

/// Score raw (value, weight) pairs without any catalog or storage involved.
pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { values, weights } = args;

    let weights = weights.unwrap_or_default();
    let pairs: Vec<WeightedAnswer> = values
        .iter()
        .enumerate()
        .map(|(idx, value)| WeightedAnswer::new(*value, weights.get(idx).copied()))
        .collect();

    let calculator = ScoreCalculator::default();
    let scores = calculator.compute(&pairs);

    println!("Scored {} answer(s)", pairs.len());
    println!("- compliance: {:.2}", scores.compliance);
    println!("- maturity:   {:.2}", scores.maturity);

    let engine = RecommendationEngine::new(Locale::PtBr);
    println!("Recommendations:");
    for recommendation in engine.build(scores.compliance, scores.maturity) {
        println!("  - {recommendation}");
    }

    Ok(())
}

/// End-to-end walkthrough: register a project, answer the standard
/// questionnaire, and print the resulting report.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        project_name,
        uniform_answer,
    } = args;

    let catalog = Arc::new(QuestionnaireCatalog::standard());
    let service = AssessmentService::new(
        Arc::new(InMemoryProjectRepository::default()),
        Arc::new(InMemoryAssessmentRepository::default()),
        catalog,
        Locale::PtBr,
    );

    let project = service.create_project(NewProject {
        name: project_name.unwrap_or_else(|| "Projeto Demo".to_string()),
        description: "Walkthrough over the standard questionnaire".to_string(),
    })?;
    println!(
        "Assessment demo for {} ({}) on {}",
        project.name,
        project.id.0,
        chrono::Local::now().date_naive()
    );

    let sample_values = [4, 3, 5, 2, 3, 4, 3, 2, 4, 3];
    let questionnaire = service.questionnaire();

    let mut answers = Vec::new();
    let mut sample = sample_values.iter().cycle();
    println!("\nQuestionnaire:");
    for dimension in &questionnaire {
        println!("- {} [{}]", dimension.title, dimension.framework);
        for question in &dimension.questions {
            let value = uniform_answer
                .unwrap_or_else(|| *sample.next().expect("cycle never ends"))
                .clamp(0, 5);
            println!("    {} -> {}", question.text, value);
            answers.push(AnswerPayload::Record(AnswerRecord {
                question: question.id.clone(),
                value,
            }));
        }
    }

    let record = service.submit(AssessmentSubmission {
        project: project.id,
        answers,
    })?;
    println!("\nScores for {}:", record.assessment.id.0);
    println!("- compliance: {:.2}", record.assessment.compliance_score);
    println!("- maturity:   {:.2}", record.assessment.maturity_score);

    let report = service.report(&record.assessment.id)?;
    println!("Recommendations:");
    for recommendation in &report.recommendations {
        println!("  - {recommendation}");
    }

    Ok(())
}
