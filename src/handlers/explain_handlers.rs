use actix_web::{HttpResponse, web};
use log::debug;

use crate::clients::openai_client::OpenAiClient;
use crate::error::AppError;
use crate::models::explain::{ExplainRequest, ExplainResponse};

const MAX_TEXT_CHARS: usize = 1000;

/// Builds the completion prompt for the selected text. The language check is
/// a prefix match so regional tags like "fr-CA" also select French.
fn build_prompt(text: &str, language: &str) -> String {
    if language.starts_with("fr") {
        format!(
            "Expliquez ce que signifie le texte suivant de manière claire et concise : \"{}\"",
            text
        )
    } else {
        format!(
            "Explain what the following text means in a clear and concise way: \"{}\"",
            text
        )
    }
}

/// `POST /api/explain` - validate the snippet, relay it to the completion
/// API, and return the generated explanation.
pub async fn explain(
    openai_client: web::Data<OpenAiClient>,
    body: web::Json<ExplainRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let text = request.text.unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AppError::Validation("Texte requis".to_string()));
    }

    // The bound applies to the raw string, not the trimmed one.
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(AppError::Validation(
            "Texte trop long (max 1000 caractères)".to_string(),
        ));
    }

    let language = request.language.as_deref().unwrap_or("fr");
    let prompt = build_prompt(&text, language);

    debug!("Explain request ({} chars, language: {})", text.chars().count(), language);

    let explanation = openai_client.explain(&prompt).await?;

    Ok(HttpResponse::Ok().json(ExplainResponse {
        success: true,
        explanation,
        original_text: text,
    }))
}
