use passin::attendees::AttendeeClient;
use passin::ui::{make_config, App};
use passin::Config;
use tracing::{error, info};

fn main() {
    let config = Config::load();
    config.init_tracing();

    let client = match AttendeeClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create attendee client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Listing attendees from {}", client.endpoint());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(client)
        .launch(App);
}
