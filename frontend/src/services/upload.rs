//! HTTP service uploading a document to the analysis backend.

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::{upload_url, AnalysisResult, AppError, AppResult, UploadOutcome};

/// Upload a document and classify the answer.
///
/// Never fails: transport and parse errors end up in
/// [`UploadOutcome::Failed`].
pub async fn upload_document(file: &File, backend_url: &str) -> UploadOutcome {
    match send(file, backend_url).await {
        Ok(outcome) => outcome,
        Err(e) => UploadOutcome::Failed(e),
    }
}

async fn send(file: &File, backend_url: &str) -> AppResult<UploadOutcome> {
    // Single part named "file"
    let form_data = FormData::new().map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| AppError::Request(format!("Failed to append file: {:?}", e)))?;

    let url = upload_url(backend_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let status = response.status();
    if !is_success(status) {
        return Ok(UploadOutcome::Rejected { status });
    }

    let body = response
        .json::<Value>()
        .await
        .map_err(|e| AppError::Parse(e.to_string()))?;

    Ok(outcome_from_body(&body))
}

/// Any 2xx status counts as success, whatever the body says.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a successful JSON body into an outcome.
pub fn outcome_from_body(body: &Value) -> UploadOutcome {
    match AnalysisResult::from_response(body) {
        Ok(result) => UploadOutcome::Success(result),
        Err(e) => UploadOutcome::Failed(e),
    }
}
