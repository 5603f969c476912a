mod client;

use client::App;

fn main() {
    // Desktop builds read LEAGUE_* variables from a local .env file
    #[cfg(feature = "desktop")]
    dotenvy::dotenv().ok();

    dioxus::launch(App);
}
