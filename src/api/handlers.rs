//! HTTP request handlers for the billing engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::billing::{Invoice, build_invoice};
use crate::calculation::price_breakdown;
use crate::error::EngineError;
use crate::models::ChargeableTransfer;

use super::request::{InvoiceRequest, PriceRequest};
use super::response::{ApiError, ApiErrorResponse, PriceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/price", post(price_handler))
        .route("/invoice", post(invoice_handler))
        .with_state(state)
}

/// Handler for the POST /price endpoint.
///
/// Accepts a single transfer and returns its full price decomposition.
async fn price_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing price request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let transfer: ChargeableTransfer = request.transfer.into();

    if let Err(err) = validate_transfers(std::slice::from_ref(&transfer)) {
        warn!(correlation_id = %correlation_id, error = %err, "Transfer validation failed");
        let api_error: ApiErrorResponse = err.into();
        return error_response(api_error);
    }

    let breakdown = price_breakdown(&transfer);
    info!(
        correlation_id = %correlation_id,
        transfer_id = %transfer.id,
        total_price = %breakdown.total_price,
        "Price computed"
    );

    let response = PriceResponse {
        transfer_id: transfer.id,
        currency: state.config().billing().currency.clone(),
        breakdown,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for the POST /invoice endpoint.
///
/// Builds an invoice for the selected transfers, falling back to the
/// configured tax defaults when the request omits them.
async fn invoice_handler(
    State(state): State<AppState>,
    payload: Result<Json<InvoiceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing invoice request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let tax_rate = request.tax_rate.unwrap_or_else(|| config.default_tax_rate());
    let tax_application = request
        .tax_application
        .unwrap_or_else(|| config.default_tax_application());

    let transfers: Vec<ChargeableTransfer> =
        request.transfers.into_iter().map(Into::into).collect();

    if let Err(err) = validate_tax_rate(tax_rate) {
        warn!(correlation_id = %correlation_id, error = %err, "Tax rate validation failed");
        let api_error: ApiErrorResponse = err.into();
        return error_response(api_error);
    }

    if let Err(err) = validate_transfers(&transfers) {
        warn!(correlation_id = %correlation_id, error = %err, "Transfer validation failed");
        let api_error: ApiErrorResponse = err.into();
        return error_response(api_error);
    }

    let invoice: Invoice = build_invoice(
        &transfers,
        request.client_name,
        config.billing().currency.clone(),
        tax_rate,
        tax_application,
    );

    info!(
        correlation_id = %correlation_id,
        invoice_id = %invoice.invoice_id,
        transfers_count = transfers.len(),
        sub_total = %invoice.sub_total,
        total = %invoice.total,
        "Invoice generated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(invoice),
    )
        .into_response()
}

/// Boundary validation: the engine itself never guards prices, so negative
/// required prices are rejected before pricing starts.
fn validate_transfers(transfers: &[ChargeableTransfer]) -> Result<(), EngineError> {
    for transfer in transfers {
        if transfer.price < Decimal::ZERO {
            return Err(EngineError::InvalidTransfer {
                transfer_id: transfer.id.clone(),
                message: "price is negative".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_tax_rate(rate: Decimal) -> Result<(), EngineError> {
    if rate < Decimal::ZERO {
        return Err(EngineError::InvalidTaxRate { rate });
    }
    Ok(())
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> axum::response::Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/billing").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();

        (status, json)
    }

    #[tokio::test]
    async fn test_price_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let body = json!({
            "transfer": {
                "id": "tr_001",
                "date": "2026-03-14",
                "service_type": "transfer",
                "price": "100",
                "discount_type": "percentage",
                "discount_value": "10",
                "commission": "20",
                "commission_type": "percentage"
            }
        });

        let (status, result) = post_json(router, "/price", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["transfer_id"], "tr_001");
        assert_eq!(result["currency"], "EUR");
        assert_eq!(dec(result["total_price"].as_str().unwrap()), dec("72"));
    }

    #[tokio::test]
    async fn test_price_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/price")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_price_negative_price_returns_400() {
        let router = create_router(create_test_state());

        let body = json!({
            "transfer": {
                "id": "tr_bad",
                "date": "2026-03-14",
                "service_type": "transfer",
                "price": "-10"
            }
        });

        let (status, result) = post_json(router, "/price", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(result["code"], "INVALID_TRANSFER");
    }

    #[tokio::test]
    async fn test_invoice_uses_configured_tax_defaults() {
        let router = create_router(create_test_state());

        // Config defaults: rate 10, included
        let body = json!({
            "transfers": [
                {
                    "id": "tr_001",
                    "date": "2026-03-14",
                    "service_type": "transfer",
                    "price": "1100"
                }
            ]
        });

        let (status, result) = post_json(router, "/invoice", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["tax_application"], "included");
        assert_eq!(dec(result["tax_rate"].as_str().unwrap()), dec("10"));
        assert_eq!(dec(result["tax_amount"].as_str().unwrap()), dec("100"));
        assert_eq!(dec(result["total"].as_str().unwrap()), dec("1100"));
    }

    #[tokio::test]
    async fn test_invoice_negative_tax_rate_returns_400() {
        let router = create_router(create_test_state());

        let body = json!({
            "tax_rate": "-5",
            "transfers": []
        });

        let (status, result) = post_json(router, "/invoice", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(result["code"], "INVALID_TAX_RATE");
    }
}
