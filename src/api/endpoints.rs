use actix_web::{
    get, post,
    web::{Data, Form, Json, Query},
    Either, HttpResponse, Responder,
};
use log::{log, Level};

use crate::{
    app::AppState,
    error::QuoteError,
    schema::api::{FetchParams, MessageResponse, NewQuote, Quote, VersionResponse},
    service::RECEIVED_MESSAGE,
};

#[utoipa::path(
    get,
    path = "/v1/quote",
    params(FetchParams),
    responses(
        (status = 200, description = "The stored quote", body = Quote),
        (status = 404, description = "mortId missing or no quote stored for it"),
        (status = 500, description = "Quote store failure")
    )
)]
#[get("/quote")]
pub async fn get_quote(state: Data<AppState>, params: Query<FetchParams>) -> impl Responder {
    match state.quotes.get_quote(params.mort_id.as_deref()).await {
        Ok(quote) => HttpResponse::Ok().json(quote),
        Err(QuoteError::Validation(msg)) => HttpResponse::NotFound().body(msg),
        Err(QuoteError::NotFound(what)) => {
            HttpResponse::NotFound().body(format!("{what} could not be found"))
        }
        Err(e) => {
            log!(Level::Error, "Failed to fetch quote: {e}");
            HttpResponse::InternalServerError().body("Internal DB Error")
        }
    }
}

#[utoipa::path(
    post,
    path = "/v1/quote",
    request_body(content = NewQuote, description = "JSON or form encoded"),
    responses(
        (status = 200, description = "Quote creation started", body = MessageResponse),
        (status = 404, description = "mortId or value missing, or value negative"),
        (status = 500, description = "Mortgage could not be fetched from the registry")
    )
)]
#[post("/quote")]
pub async fn create_quote(
    state: Data<AppState>,
    body: Either<Json<NewQuote>, Form<NewQuote>>,
) -> impl Responder {
    log!(Level::Info, "POST /v1/quote");
    let body = body.into_inner();

    match state
        .quotes
        .request_quote(body.mort_id.as_deref(), body.value.as_ref())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: RECEIVED_MESSAGE.to_owned(),
        }),
        Err(QuoteError::Validation(msg)) => {
            log!(Level::Debug, "Rejected quote request: {msg}");
            HttpResponse::NotFound().body(msg)
        }
        Err(e) => {
            log!(Level::Warn, "Could not start insurance quote: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/version",
    responses((status = 200, description = "Build information", body = VersionResponse))
)]
#[get("/version")]
pub async fn get_version() -> impl Responder {
    HttpResponse::Ok().json(VersionResponse {
        build_date: option_env!("VERGEN_BUILD_TIMESTAMP")
            .unwrap_or("unknown")
            .to_owned(),
        revision: option_env!("VERGEN_GIT_SHA").unwrap_or("unknown").to_owned(),
        commit_date: option_env!("VERGEN_GIT_COMMIT_TIMESTAMP")
            .unwrap_or("unknown")
            .to_owned(),
    })
}
