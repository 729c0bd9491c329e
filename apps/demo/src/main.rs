//! Headless driver for the instrumentation demo workflow: initializes the
//! recording client, mirrors its lifecycle into the controller, runs every
//! user action once, and prints the resulting page state.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use controller::{DemoController, SDK_STATUS_REGION, SESSION_INFO_REGION};
use replay_client::SimulatedReplayClient;
use shared::domain::{IdentityContext, ReplayPluginConfig};

#[derive(Parser, Debug)]
struct Args {
    /// Client-side id handed to the recording client at initialization.
    #[arg(long, default_value = "demo-client-side-id")]
    client_side_id: String,
    /// Start with an unusable client-side id to exercise the failed path.
    #[arg(long)]
    fail_init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let client_side_id = if args.fail_init {
        String::new()
    } else {
        args.client_side_id
    };

    let context = IdentityContext::new("Test User", "test@example.com");
    let client = Arc::new(SimulatedReplayClient::initialize(
        client_side_id,
        context.clone(),
        ReplayPluginConfig::default(),
    ));
    let mut lifecycle = client.subscribe();
    let mut controller = DemoController::new(client.clone(), context);

    client.start();
    while let Ok(event) = lifecycle.try_recv() {
        controller.on_lifecycle_event(event);
    }

    if let Some(status) = controller.status().get(SDK_STATUS_REGION) {
        println!("[{:?}] {}", status.category, status.message);
    }

    println!("{}", controller.simulate_click());
    println!("{}", controller.tag_session());

    controller.fetch_session_info().await;
    if let Some(info) = controller.status().get(SESSION_INFO_REGION) {
        println!("[{:?}] {}", info.category, info.message);
    }

    controller.draw_canvas();
    for command in controller.canvas().commands() {
        println!("canvas: {command:?}");
    }

    println!(
        "tagged properties: {}",
        serde_json::to_string(&client.tagged_properties())?
    );

    Ok(())
}
