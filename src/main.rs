use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use storeflow::application::coordinator::PurchaseCoordinator;
use storeflow::application::host::HostSlot;
use storeflow::domain::billing::StoreId;
use storeflow::infrastructure::console::{ConsoleHost, ConsoleNativeBridge};
use storeflow::infrastructure::simulated::ScriptedBillingSource;
use storeflow::interfaces::script::{ScriptEvent, ScriptOp, ScriptReader};

/// Replays a recorded billing session against the purchase coordinator.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input session script CSV file
    script: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let billing = ScriptedBillingSource::new();
    let host = HostSlot::new();
    host.attach(Arc::new(ConsoleHost));
    let coordinator = PurchaseCoordinator::new(
        Box::new(billing.clone()),
        Arc::new(ConsoleNativeBridge),
        host,
    );

    let file = File::open(cli.script).into_diagnostic()?;
    let reader = ScriptReader::new(file);
    for event in reader.events() {
        match event {
            Ok(event) => run_event(&coordinator, &billing, event).await,
            Err(e) => eprintln!("Error reading script row: {e}"),
        }
    }

    Ok(())
}

async fn run_event(
    coordinator: &PurchaseCoordinator,
    billing: &ScriptedBillingSource,
    event: ScriptEvent,
) {
    match event.op {
        ScriptOp::Reply => match event.code {
            Some(code) => {
                billing
                    .queue_reply(code, event.message.unwrap_or_default())
                    .await;
            }
            None => eprintln!("Error in script: reply row is missing a result code"),
        },
        ScriptOp::Purchase => match event.store_id {
            Some(raw) => match StoreId::new(raw) {
                Ok(store_id) => {
                    let consumable = event.consumable.unwrap_or(false);
                    let outcome = coordinator.purchase(store_id, consumable).await;
                    println!("[outcome] {outcome:?}");
                }
                Err(e) => eprintln!("Error in script: {e}"),
            },
            None => eprintln!("Error in script: purchase row is missing a store id"),
        },
        ScriptOp::Acknowledge => {
            for outcome in coordinator.acknowledge_pending_purchases().await {
                println!("[outcome] {outcome:?}");
            }
        }
        ScriptOp::Restore => {
            for outcome in coordinator.restore_purchases().await {
                println!("[outcome] {outcome:?}");
            }
        }
    }
}
