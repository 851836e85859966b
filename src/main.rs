use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;

use planhub::auth::AuthMiddleware;
use planhub::config::Config;
use planhub::routes;
use planhub::services::{
    ActivationStore, EventService, PgActivationStore, PgEventService, PgTaskService, TaskService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let events: Arc<dyn EventService> = Arc::new(PgEventService::new(pool.clone()));
    let tasks: Arc<dyn TaskService> = Arc::new(PgTaskService::new(pool.clone()));
    let activations: Arc<dyn ActivationStore> = Arc::new(PgActivationStore::new(pool));

    log::info!("Starting planhub server at {}", config.server_url());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .wrap(AuthMiddleware)
            .app_data(web::Data::from(events.clone()))
            .app_data(web::Data::from(tasks.clone()))
            .app_data(web::Data::from(activations.clone()))
            .service(routes::health::health)
            .service(web::scope("/api").configure(routes::config))
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
