//! AWS Lambda handler for the business analysis
//!
//! Accepts a BusinessParameters JSON body through a Lambda Function URL and
//! returns the ten-year analysis. An empty body analyzes the default plant.

use std::time::Instant;

use aws_lambda_events::event::lambda_function_urls::{
    LambdaFunctionUrlRequest, LambdaFunctionUrlResponse,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::Serialize;

use cup_analysis::params::loader;
use cup_analysis::{analyze, AnalysisError, AnalysisResult, BusinessParameters};

/// Successful response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisResponse {
    #[serde(flatten)]
    result: AnalysisResult,
    execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct FieldError {
    field: String,
    message: String,
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    field_errors: Vec<FieldError>,
}

fn json_response<T: Serialize>(status: i64, body: &T) -> Result<LambdaFunctionUrlResponse, Error> {
    Ok(LambdaFunctionUrlResponse {
        status_code: status,
        headers: Default::default(),
        body: Some(serde_json::to_string(body)?),
        is_base64_encoded: false,
        cookies: Vec::new(),
    })
}

fn error_response(status: i64, err: &AnalysisError) -> Result<LambdaFunctionUrlResponse, Error> {
    let field_errors = err
        .parameter_errors()
        .iter()
        .map(|e| FieldError {
            field: e.field.clone(),
            message: e.message.clone(),
        })
        .collect();

    json_response(
        status,
        &ErrorResponse {
            error: err.to_string(),
            field_errors,
        },
    )
}

fn parse_params(request: &LambdaFunctionUrlRequest) -> Result<BusinessParameters, AnalysisError> {
    match request.body.as_deref().map(str::trim) {
        None | Some("") => Ok(BusinessParameters::default_plant()),
        Some(body) => loader::from_json_str(body),
    }
}

async fn handler(
    event: LambdaEvent<LambdaFunctionUrlRequest>,
) -> Result<LambdaFunctionUrlResponse, Error> {
    let start = Instant::now();
    let request = event.payload;

    if request.is_base64_encoded {
        return json_response(
            400,
            &ErrorResponse {
                error: "base64-encoded bodies are not supported, send application/json".into(),
                field_errors: Vec::new(),
            },
        );
    }

    let params = match parse_params(&request) {
        Ok(params) => params,
        Err(err) => {
            warn!("Rejected request body: {}", err);
            return error_response(400, &err);
        }
    };

    match analyze(&params) {
        Ok(result) => {
            let execution_time_ms = start.elapsed().as_millis() as u64;
            info!(
                "Analysis done in {} ms: payback {} years, ROI {:.2}%",
                execution_time_ms, result.summary.payback_period_years, result.summary.avg_roi_percent
            );
            json_response(
                200,
                &AnalysisResponse {
                    result,
                    execution_time_ms,
                },
            )
        }
        Err(err) => {
            warn!("Invalid parameters: {}", err);
            error_response(400, &err)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
