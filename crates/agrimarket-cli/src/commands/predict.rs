use agrimarket_core::{
    DashboardSession, EnhancedPredictor, ExportDate, MovingAveragePredictor, PredictionStatus,
    Predictor, Product,
};

use crate::cli::{ModelChoice, PredictArgs};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &PredictArgs, session: &mut DashboardSession) -> Result<CommandResult, CliError> {
    let product: Product = args.product.parse()?;
    let target_date = ExportDate::parse(&args.target_date)?;

    let predictor: Box<dyn Predictor> = match args.model {
        ModelChoice::Baseline => Box::new(MovingAveragePredictor::default()),
        ModelChoice::Enhanced => Box::new(EnhancedPredictor::default()),
    };

    let result = predictor.predict(
        session.analysis_records(),
        target_date,
        product,
        &args.destination,
    )?;
    session.record_prediction(result.clone());

    let text = format!(
        "Prediction: {} TND/ton for {} to {} on {}\n  confidence: {:.1}%  model: {}  status: {}",
        result.predicted_price_per_ton,
        result.product,
        result.destination,
        result.target_date,
        result.confidence * 100.0,
        result.model,
        result.status,
    );

    let mut command_result = CommandResult::ok(serde_json::to_value(&result)?).with_text(text);
    if result.status == PredictionStatus::FallbackUsed {
        command_result =
            command_result.with_warning("a fallback path produced this result; see status field");
    }
    Ok(command_result)
}
