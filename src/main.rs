use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use config::{Config, Environment, File};
use tera::Tera;

use pushkind_inventory::db::establish_connection_pool;
use pushkind_inventory::models::config::ServerConfig;
use pushkind_inventory::repository::DieselRepository;
use pushkind_inventory::routes::main::{index, logout, not_assigned};
use pushkind_inventory::routes::product_types::{
    add_product_type, add_product_type_form, show_product_types,
};
use pushkind_inventory::routes::products::{add_product, add_product_form, show_products};

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

fn other_error(message: String) -> std::io::Error {
    std::io::Error::other(message)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = load_config().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        other_error(e.to_string())
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to establish database connection: {e}");
        other_error(e.to_string())
    })?;
    let repo = DieselRepository::new(pool);

    let tera = Tera::new(&format!("{}/**/*", server_config.templates_dir)).map_err(|e| {
        log::error!("Failed to parse templates: {e}");
        other_error(e.to_string())
    })?;

    let secret_key = Key::try_from(server_config.secret.as_bytes()).map_err(|e| {
        log::error!("Invalid secret key: {e}");
        other_error(e.to_string())
    })?;

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    let domain = server_config.domain.clone();
    let server_config = web::Data::new(server_config);
    let repo = web::Data::new(repo);
    let tera = web::Data::new(tera);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(index)
            .service(not_assigned)
            .service(logout)
            .service(show_product_types)
            .service(add_product_type_form)
            .service(add_product_type)
            .service(show_products)
            .service(add_product_form)
            .service(add_product)
            .app_data(server_config.clone())
            .app_data(repo.clone())
            .app_data(tera.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
