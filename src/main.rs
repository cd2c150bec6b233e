use anyhow::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;

use birthday_adventure::app::{demo_script, App};

fn main() -> Result<()> {
    // Setup tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");

    let mut app = App::new(demo_script())?;
    loop {
        if !app.run() {
            break;
        }
    }

    Ok(())
}
