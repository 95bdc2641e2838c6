use std::sync::Arc;

use actix_web::{
    error::InternalError,
    web::{self, scope, Data, FormConfig, JsonConfig},
    HttpResponse,
};
use anyhow::Context;
use isahc::HttpClient;
use log::{log, Level};
use sqlx::postgres::PgPoolOptions;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::endpoints::*,
    config::Config,
    schema::api::{MessageResponse, NewQuote, Quote, VersionResponse},
    service::QuoteService,
    store::PgQuoteStore,
    upstream::{MortgageClient, ServiceCodeClient},
};

pub struct AppState {
    pub quotes: QuoteService,
}

#[derive(OpenApi)]
#[openapi(
    paths(get_quote, create_quote, get_version),
    components(schemas(Quote, NewQuote, MessageResponse, VersionResponse)),
    tags(
        (name = "Insinc", description = "Mortgage insurance quote API")
    ),
)]
pub struct ApiDoc;

pub fn configure_app(cfg: &mut web::ServiceConfig) {
    // Existing callers expect 404 for any unusable quote request, malformed
    // bodies included.
    let json_config = JsonConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, HttpResponse::NotFound().finish()).into()
    });
    let form_config = FormConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, HttpResponse::NotFound().finish()).into()
    });

    cfg.service(SwaggerUi::new("/api/docs/{_:.*}").url("/api/openapi.json", ApiDoc::openapi()))
        .service(
            scope("/v1")
                .wrap(actix_cors::Cors::permissive())
                .app_data(json_config)
                .app_data(form_config)
                .service(get_quote)
                .service(create_quote)
                .service(get_version),
        );
}

pub async fn get_app_data(config: &Config) -> anyhow::Result<Data<AppState>> {
    let db = PgPoolOptions::new()
        .connect(&config.database_url)
        .await
        .context("Could not connect to database")?;
    let store = PgQuoteStore::new(db);
    store.migrate().await.context("Failed to run migrations")?;
    log!(Level::Info, "Successfully connected to database");

    let http = HttpClient::new().context("Could not build HTTP client")?;
    let quotes = QuoteService::start(
        Arc::new(store),
        MortgageClient::new(http.clone(), &config.mbr_url),
        ServiceCodeClient::new(http, &config.mun_url),
    );
    Ok(Data::new(AppState { quotes }))
}
