// ABOUTME: Command line tool that decodes CDMA SMS PDUs and builds submit PDUs
// ABOUTME: Shows the decode anomaly log and the hex form modems exchange

//! # CDMA SMS PDU tool
//!
//! Decodes hex-encoded CDMA SMS transport layer PDUs given on the command
//! line, or one per line on stdin when none are given. With `--number` and
//! `--text` it builds a WMT submit PDU instead.
//!
//! ## Usage
//!
//! ```bash
//! # Decode a received message
//! cargo run --example cdma_pdu -- \
//!   000002100202070 28CE95DCC65800601FC08150003168D3001061024183060800306101004044847
//!
//! # Decode PDUs piped in, with codec debug logging
//! cat pdus.txt | cargo run --example cdma_pdu -- -d
//!
//! # Build a submit PDU
//! cargo run --example cdma_pdu -- --number 3305773196 --text "Hello"
//! ```

use argh::FromArgs;
use cdma_sms::{LogContext, Message, to_hex};
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Decode CDMA SMS PDUs or build a submit PDU
#[derive(FromArgs)]
struct CliArgs {
    /// whether or not to enable debugging
    #[argh(switch, short = 'd')]
    debugging: bool,

    /// the recipient telephone number of the submit PDU to build
    #[argh(option, short = 'n')]
    number: Option<String>,

    /// the text of the submit PDU to build
    #[argh(option, short = 't')]
    text: Option<String>,

    /// hex-encoded PDUs to decode (read from stdin if none are given)
    #[argh(positional)]
    pdus: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli_args.debugging { Level::DEBUG } else { Level::INFO })
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Some(number) = cli_args.number {
        let text = cli_args.text.unwrap_or_default();
        return encode(&number, &text);
    }

    // Arguments may split one PDU across several words
    if !cli_args.pdus.is_empty() {
        decode(1, &cli_args.pdus.concat());
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut index = 0;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        index += 1;
        decode(index, &line);
    }

    Ok(())
}

fn decode(index: usize, hex_pdu: &str) {
    let mut ctx = LogContext::with_label(format!("sms/{index}"));

    let message = match Message::from_hex_pdu(hex_pdu, &mut ctx) {
        Ok(message) => message,
        Err(e) => {
            error!("{ctx} failed to decode PDU: {e}");
            return;
        }
    };

    info!("{ctx} message type: {}", message.message_type);
    info!("{ctx} PDU type: {}", message.pdu_type);
    if let Some(teleservice_id) = message.teleservice_id {
        info!("{ctx} teleservice: {teleservice_id}");
    }
    if let Some(service_category) = message.service_category {
        info!("{ctx} service category: {service_category}");
    }
    if let Some(address) = &message.address {
        info!("{ctx} address: {address}");
    }
    if let Some(reference) = message.message_reference {
        info!("{ctx} message reference: {reference}");
    }
    if let Some(state) = message.delivery_state {
        info!("{ctx} delivery state: {state} (0x{:04x})", state.code());
    }
    if let Some(text) = &message.text {
        info!("{ctx} text: {text}");
    }
    if let Some(data) = &message.data {
        info!("{ctx} data: {} bytes ({})", data.len(), to_hex(data));
    }

    for anomaly in ctx.take_anomalies() {
        warn!("{ctx} {anomaly}");
    }
}

fn encode(number: &str, text: &str) -> Result<(), Box<dyn Error>> {
    let mut ctx = LogContext::with_label("submit");

    let pdu = Message::submit(number, text)
        .to_submit_pdu(&mut ctx)
        .map_err(|e| {
            error!("{ctx} failed to build PDU: {e}");
            e
        })?;

    info!("{ctx} {} bytes", pdu.len());
    println!("{}", to_hex(&pdu));

    Ok(())
}
