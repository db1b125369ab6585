//! LLM-backed report generation over a local Ollama endpoint.
//!
//! Transport or decode failures never surface: the deterministic template
//! report is used instead.

use agrimarket_core::{
    prompt_summary, ExportRecord, PredictionResult, ReportError, ReportGenerator,
    StatisticsSnapshot, TemplateReportGenerator,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama2";

const ANALYST_INSTRUCTION: &str = "\n\nYou are an economic analyst. Generate a structured, \
concise market intelligence report in Markdown about agricultural exports based on the data above.";

pub struct ReportOutcome {
    pub text: String,
    /// True when the template backend substituted for the LLM.
    pub used_fallback: bool,
}

pub struct OllamaReportGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl Default for OllamaReportGenerator {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }
}

impl OllamaReportGenerator {
    pub async fn generate(
        &self,
        records: &[ExportRecord],
        predictions: &[PredictionResult],
        statistics: &StatisticsSnapshot,
    ) -> Result<ReportOutcome, ReportError> {
        let prompt = format!(
            "{}{ANALYST_INSTRUCTION}",
            prompt_summary(records, predictions, statistics)
        );

        match self.complete(&prompt).await {
            Ok(text) => {
                info!(chars = text.len(), "LLM report generated");
                Ok(ReportOutcome {
                    text,
                    used_fallback: false,
                })
            }
            Err(error) => {
                warn!(%error, "Ollama call failed, using template report instead");
                let text =
                    TemplateReportGenerator.generate_report(records, predictions, statistics)?;
                Ok(ReportOutcome {
                    text,
                    used_fallback: true,
                })
            }
        }
    }

    async fn complete(&self, prompt: &str) -> Result<String, reqwest::Error> {
        #[derive(Serialize)]
        struct GenerateRequest<'a> {
            model: &'a str,
            prompt: &'a str,
            stream: bool,
        }

        #[derive(Deserialize)]
        struct GenerateResponse {
            response: String,
        }

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        Ok(response.response)
    }
}
