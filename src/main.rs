use crate::config::Config;
use crate::router::handle;
use astra::Server;
use clap::Parser;

mod bootstrap;
mod config;
mod domain;
mod errors;
mod estates;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    bootstrap::init_logger();
    let config = Config::parse();

    // 1️⃣ Mount the view; this starts the one listings fetch in the background
    let (state, _fetch) = match bootstrap::mount(&config) {
        Ok(mounted) => mounted,
        Err(e) => {
            log::error!("Could not set up the estate feed client: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Start the server
    log::info!("Starting server at http://{}", config.bind);

    let server = Server::bind(&config.bind).max_workers(config.workers);

    // 3️⃣ Serve requests, sharing the app state with every worker
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
