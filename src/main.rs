use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use employee_directory::catalog::CatalogLoader;
use employee_directory::config::Config;
use employee_directory::router;
use employee_directory::utils::id_generator::IdGenerator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    // Built once and shared read-only by every worker
    let loader = CatalogLoader::new(IdGenerator::default());
    let catalog = loader.load_bundled()?;
    if catalog.is_empty() {
        warn!("Bundled employee data is empty");
    }
    let catalog = web::Data::new(catalog);

    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(catalog.clone())
            .configure(router::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
