use crate::infra::sample_submission;
use clap::Args;
use ecoscore::error::AppError;
use ecoscore::survey::{
    survey_questions, CalculationOutcome, CarbonSurveyService, Category, ResponseSet,
    SurveySubmission,
};

#[derive(Args, Debug, Default)]
pub(crate) struct CalculateArgs {
    /// Transportation rating (1 low, 2 medium, 3 high)
    #[arg(long)]
    pub(crate) transportation: Option<i32>,
    /// Appliances rating (1 low, 2 medium, 3 high)
    #[arg(long)]
    pub(crate) appliances: Option<i32>,
    /// Diet rating (1 low, 2 medium, 3 high)
    #[arg(long)]
    pub(crate) diet: Option<i32>,
    /// Shopping rating (1 low, 2 medium, 3 high)
    #[arg(long)]
    pub(crate) shopping: Option<i32>,
    /// Energy usage rating (1 low, 2 medium, 3 high)
    #[arg(long)]
    pub(crate) energy_usage: Option<i32>,
    /// Waste management rating (1 low, 2 medium, 3 high)
    #[arg(long)]
    pub(crate) waste_management: Option<i32>,
    /// Water usage rating (1 low, 2 medium, 3 high)
    #[arg(long)]
    pub(crate) water_usage: Option<i32>,
    /// Emit the outcome as pretty-printed JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl CalculateArgs {
    /// Builds the raw submission; omitted flags stay absent so validation
    /// reports them as missing categories.
    fn submission(&self) -> SurveySubmission {
        let provided = [
            (Category::Transportation, self.transportation),
            (Category::Appliances, self.appliances),
            (Category::Diet, self.diet),
            (Category::Shopping, self.shopping),
            (Category::EnergyUsage, self.energy_usage),
            (Category::WasteManagement, self.waste_management),
            (Category::WaterUsage, self.water_usage),
        ];

        let mut submission = SurveySubmission::default();
        for (category, points) in provided {
            if let Some(points) = points {
                submission.record(category, points);
            }
        }
        submission
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the questionnaire listing in the demo output
    #[arg(long)]
    pub(crate) skip_questionnaire: bool,
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let submission = args.submission();
    let outcome = CarbonSurveyService::new().calculate(&submission)?;

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Calculation payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { skip_questionnaire } = args;

    println!("Carbon survey demo");

    if !skip_questionnaire {
        println!("\nQuestionnaire (rate each area 1-3)");
        for question in survey_questions() {
            let choices: Vec<String> = question
                .choices
                .iter()
                .map(|choice| format!("{} {}", choice.rating.points(), choice.label))
                .collect();
            println!(
                "- [{}] {} ({})",
                question.category.key(),
                question.prompt,
                choices.join(" / ")
            );
        }
    }

    let submission = sample_submission();
    let responses = ResponseSet::try_from(&submission)?;
    println!("\nSample responses");
    for (category, rating) in responses.iter() {
        println!(
            "- {}: {} ({})",
            category.label(),
            rating.label(),
            rating.points()
        );
    }

    let outcome = CarbonSurveyService::new().calculate(&submission)?;
    println!();
    render_outcome(&outcome);

    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("\nCalculation payload:\n{json}"),
        Err(err) => println!("\nCalculation payload unavailable: {err}"),
    }

    Ok(())
}

fn render_outcome(outcome: &CalculationOutcome) {
    println!("Carbon score: {}", outcome.score);
    println!("Recommendations");
    for recommendation in &outcome.recommendations {
        println!("- {recommendation}");
    }
}
