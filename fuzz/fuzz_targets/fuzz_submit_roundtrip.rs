#![no_main]

use cdma_sms::{LogContext, Message, decode_pdu};
use libfuzzer_sys::fuzz_target;

/// Any text that encodes must decode back to itself.
fuzz_target!(|text: &str| {
    let mut ctx = LogContext::new();
    let Ok(pdu) = Message::submit("3305773196", text).to_submit_pdu(&mut ctx) else {
        return;
    };

    let message = decode_pdu(&pdu, &mut ctx).expect("encoded PDU decodes");
    assert_eq!(message.text.as_deref(), Some(text));
    assert!(ctx.anomalies().is_empty());
});
