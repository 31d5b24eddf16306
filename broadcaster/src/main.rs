use std::time::Duration;

use clap::Parser;
use tracing_subscriber::FmtSubscriber;

use broadcaster::broadcast::{self, BodyParameter, DirectBroadcast, Language, Parameters};
use broadcaster::client::MekariClient;
use broadcaster::config::{Cli, Settings};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // logger
    let subscriber = FmtSubscriber::builder().with_target(false).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;

    let params = match body_parameters(&cli.params) {
        Ok(p) => p,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Example: broadcaster --param customer_name=Iqbal --param link_pdf=https://...");
            std::process::exit(2);
        }
    };

    let client = MekariClient::new(&settings)?;
    let message = DirectBroadcast {
        to_number: settings.to_number.clone(),
        to_name: settings.to_name.clone(),
        message_template_id: settings.message_template_id.clone(),
        channel_integration_id: settings.channel_integration_id.clone(),
        language: Language {
            code: settings.language_code.clone(),
        },
        parameters: Parameters { body: params },
    };

    println!("==[ Sending Broadcast (POST) ]==");
    let sent = broadcast::send_direct(&client, &message).await;
    println!("Status Code: {}", sent.status_code);
    println!("{}", pretty(&sent.body));

    if sent.status_code != 201 {
        tracing::error!(status = sent.status_code, "failed to send broadcast");
        std::process::exit(1);
    }
    let id = match broadcast::broadcast_id(&sent) {
        Some(id) => id,
        None => {
            tracing::error!("broadcast id not found in response");
            std::process::exit(1);
        }
    };

    tracing::info!(
        delay_secs = settings.log_delay_secs,
        "waiting before fetching delivery log"
    );
    tokio::time::sleep(Duration::from_secs(settings.log_delay_secs)).await;

    println!();
    println!("==[ Getting Broadcast Log (GET) ]==");
    let log = broadcast::fetch_log(&client, &id).await;
    println!("Status Code: {}", log.status_code);
    println!("{}", pretty(&log.body));

    Ok(())
}

/// Turn `--param NAME=TEXT` arguments into template body variables, keys
/// numbered from 1 in argument order.
fn body_parameters(params: &[String]) -> Result<Vec<BodyParameter>, String> {
    params
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let (name, text) = raw
                .split_once('=')
                .ok_or_else(|| format!("invalid --param {raw:?}, expected NAME=TEXT"))?;
            Ok(BodyParameter {
                key: (i + 1).to_string(),
                value: name.trim().to_string(),
                value_text: text.to_string(),
            })
        })
        .collect()
}

fn pretty(body: &Option<serde_json::Value>) -> String {
    match body {
        Some(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
        None => "null".into(),
    }
}
