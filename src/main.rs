use crate::app::App;
use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;

mod amenities;
mod app;
mod config;
mod errors;
mod listings;
mod map;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load configuration (env vars with defaults)
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the shared app state (HTTP clients + map slot)
    let app = match App::new(config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("❌ Startup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = app.config.bind_addr;
    println!("Starting server at http://{addr}");
    println!("Default suburb: {}", app.config.default_suburb);

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing app state into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
