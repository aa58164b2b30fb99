#[macro_use]
extern crate rocket;

use std::sync::Arc;

use log::warn;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::{FileServer, Options};
use rocket::http::Header;
use rocket::response::content::RawHtml;

mod boot;
mod config;
mod contact;
mod designs;
mod error;
mod grid;
mod loader;
mod models;
mod render;
mod routes;
mod selector;
mod site;
mod theme;


use config::SiteConfig;
use contact::{Dispatcher, HttpDispatcher};
use routes::public::SharedDispatcher;

/// Pages are rebuilt from the content document on every load; never let a
/// browser or proxy cache them.
pub struct NoStorePages;

#[rocket::async_trait]
impl Fairing for NoStorePages {
    fn info(&self) -> Info {
        Info { name: "No-Store Pages", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        if !req.uri().path().starts_with("/static") {
            res.set_header(Header::new("Cache-Control", "no-store, no-cache, must-revalidate, max-age=0"));
            res.set_header(Header::new("Pragma", "no-cache"));
        }
    }
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Assemble the server around a config and webhook transport.
pub fn app(config: SiteConfig, dispatcher: Arc<dyn Dispatcher>) -> rocket::Rocket<rocket::Build> {
    let static_files = FileServer::new(&config.static_dir, Options::Missing | Options::NormalizeDirs);

    rocket::build()
        .manage(config)
        .manage(SharedDispatcher(dispatcher))
        .attach(NoStorePages)
        .mount("/static", static_files)
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config: SiteConfig = rocket::Config::figment()
        .extract()
        .unwrap_or_else(|e| {
            warn!("Invalid site config ({}), using defaults", e);
            SiteConfig::default()
        });

    // Boot check: verify/create directories, look for the content document
    boot::run(&config);

    app(config, Arc::new(HttpDispatcher))
}
