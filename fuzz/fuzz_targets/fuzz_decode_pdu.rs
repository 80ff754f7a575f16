#![no_main]

use cdma_sms::{LogContext, decode_hex_pdu, decode_pdu};
use libfuzzer_sys::fuzz_target;

/// Fuzz the PDU decoder with arbitrary octets.
///
/// Decoding must never panic: a broken frame is an `Err`, anything else
/// becomes anomalies on the log context.
fuzz_target!(|data: &[u8]| {
    let mut ctx = LogContext::new();
    let _ = decode_pdu(data, &mut ctx);

    if let Ok(hex_pdu) = std::str::from_utf8(data) {
        let mut ctx = LogContext::new();
        let _ = decode_hex_pdu(hex_pdu, &mut ctx);
    }
});
