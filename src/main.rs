use actix_web::{self, middleware::Logger, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use insinc_backend::{
    app::{configure_app, get_app_data},
    config::Config,
};
use log::{log, Level};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let app_data = get_app_data(&config).await?;
    log!(Level::Info, "Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new(
                "%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %T",
            ))
            .configure(configure_app)
            .app_data(app_data.clone())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
