//! Integration tests for CDMA SMS PDU encoding and decoding

use crate::datatypes::*;
use crate::log::{Anomaly, LogContext};
use crate::message::Message;
use crate::pdu::{decode_hex_pdu, decode_pdu, encode_submit_pdu, to_hex};
use crate::CodecError;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use proptest::prelude::*;

    /// Header shared by the received-message vectors: point-to-point, WMT,
    /// originating address 3305773196, bearer reply option 63
    const RECEIVED_HEADER: &str = "00 0002 1002 0207 028CE95DCC6580 0601 FC";

    fn decode(hex_pdu: &str) -> (Message, LogContext) {
        let mut ctx = LogContext::with_label("test");
        let message = decode_hex_pdu(hex_pdu, &mut ctx).unwrap();
        (message, ctx)
    }

    #[test]
    fn test_decode_pdu1() {
        let pdu = format!(
            "{RECEIVED_HEADER} 0815 0003168D30 0106102418306080 0306101004044847"
        );
        let (message, ctx) = decode(&pdu);

        assert_eq!(message.message_type, MessageType::PointToPoint);
        assert_eq!(message.teleservice_id, Some(TeleserviceId::Wmt));
        assert_eq!(message.address.as_deref(), Some("3305773196"));
        assert_eq!(message.message_reference, Some(63));
        assert_eq!(message.pdu_type, PduType::Deliver);
        assert_eq!(message.text.as_deref(), Some("AAAA"));
        assert!(message.data.is_none());
        assert!(message.delivery_state.is_none());
        assert!(ctx.anomalies().is_empty());
    }

    #[test]
    fn test_decode_invalid_parameter_length() {
        // Bearer data length 0x20 runs past the end of the PDU
        let pdu = format!(
            "{RECEIVED_HEADER} 0820 0003168D30 0106102418306080 0306101004044847"
        );
        let mut ctx = LogContext::new();
        let result = decode_hex_pdu(&pdu, &mut ctx);

        match result {
            Err(CodecError::Incomplete {
                context,
                required,
                available,
            }) => {
                assert_eq!(context, "cannot read parameter value");
                assert_eq!(required, 51);
                assert_eq!(available, 40);
            }
            other => panic!("expected a fatal error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_invalid_address_length() {
        // Address claims 14 digits in a 7 byte value
        let pdu = "00 0002 1002 0207 038CE95DCC6580 0601 FC \
                   0815 0003168D30 0106102418306080 0306101004044847";
        let (message, ctx) = decode(pdu);

        assert_eq!(message.address, None);
        assert_eq!(message.teleservice_id, Some(TeleserviceId::Wmt));
        assert_eq!(message.message_reference, Some(63));
        assert_eq!(message.text.as_deref(), Some("AAAA"));
        assert_eq!(
            ctx.anomalies(),
            &[Anomaly::Truncated {
                field: "address",
                required: 9,
                available: 7
            }]
        );
    }

    #[test]
    fn test_decode_created_by_us() {
        let (message, ctx) =
            decode("00 0002 1002 0407 028CE95DCC6580 080D 0003200000 0106102418306080");

        assert_eq!(message.teleservice_id, Some(TeleserviceId::Wmt));
        assert_eq!(message.address.as_deref(), Some("3305773196"));
        assert_eq!(message.pdu_type, PduType::Submit);
        assert_eq!(message.text.as_deref(), Some("AAAA"));
        assert_eq!(message.message_reference, None);
        assert!(ctx.anomalies().is_empty());
    }

    #[test]
    fn test_decode_latin_encoding() {
        let pdu = format!(
            "{RECEIVED_HEADER} 0839 000313 8D20 \
             0127 4129 1922 E119 1AE1 1A01 19A1 19A1 A9B1 B9E9 534B 23AB 5323 AB23 \
             2BAB AB2B 23AB 5323 2BAB 53AB 20 \
             0306 1310 2320 0637 0801 00"
        );
        let (message, ctx) = decode(&pdu);

        assert_eq!(message.address.as_deref(), Some("3305773196"));
        assert_eq!(
            message.text.as_deref(),
            Some("#$\\##\\#@#4#4567=*idujdudeuuedujdeujud")
        );
        assert!(ctx.anomalies().is_empty());
    }

    #[test]
    fn test_decode_latin_encoding_2() {
        let pdu = format!(
            "{RECEIVED_HEADER} 081C 0003138D20 010A40421B0B6B832F9B7108 \
             0306131023200637 080100"
        );
        let (message, _) = decode(&pdu);

        assert_eq!(message.text.as_deref(), Some("Campeón!"));
    }

    #[test]
    fn test_decode_unicode_encoding() {
        let pdu = format!(
            "{RECEIVED_HEADER} 0828 00031B73F0 \
             0116205271 6AB85AA792 DBC337C4B7 DADA8298B4 504294 18 \
             0306131024104528 080100"
        );
        let (message, _) = decode(&pdu);

        assert_eq!(message.text.as_deref(), Some("中國哲學書電子化計劃"));
    }

    #[test]
    fn test_decode_acknowledgement() {
        // Acknowledge, destination address, cause codes: seq 5, temporary, busy
        let (message, ctx) = decode("02 0407 028CE95DCC6580 0702 1621");

        assert_eq!(message.message_type, MessageType::Acknowledge);
        assert_eq!(message.address.as_deref(), Some("3305773196"));
        assert_eq!(message.message_reference, Some(5));
        assert_eq!(
            message.delivery_state,
            Some(DeliveryState::Temporary(CauseCode::DestinationBusy))
        );
        assert_eq!(message.delivery_state.map(|s| s.code()), Some(0x0321));
        assert!(ctx.anomalies().is_empty());
    }

    #[test]
    fn test_decode_acknowledgement_without_cause_codes() {
        let (message, ctx) = decode("02 0407 028CE95DCC6580");

        assert_eq!(message.message_reference, None);
        assert_eq!(ctx.anomalies(), &[Anomaly::MandatoryMissing("cause codes")]);
    }

    #[test]
    fn test_decode_duplicate_address() {
        let (message, ctx) = decode("00 0002 1002 0207 028CE95DCC6580 0403 0040 40");

        assert_eq!(message.address.as_deref(), Some("3305773196"));
        assert_eq!(
            ctx.anomalies(),
            &[Anomaly::DuplicateAddress(ParameterId::DestinationAddress)]
        );
    }

    #[test]
    fn test_decode_skips_unknown_parameters() {
        let (message, ctx) = decode("00 2A03 010203 0002 1002 0300 0800");

        assert_eq!(message.teleservice_id, Some(TeleserviceId::Wmt));
        assert_eq!(ctx.anomalies(), &[Anomaly::UnknownParameter(0x2A)]);
    }

    #[test]
    fn test_decode_unknown_teleservice_is_not_fatal() {
        let (message, ctx) = decode("00 0002 2000 0601 FC");

        assert_eq!(message.teleservice_id, None);
        assert_eq!(message.message_reference, Some(63));
        assert_eq!(
            ctx.anomalies(),
            &[
                Anomaly::UnknownValue {
                    field: "teleservice ID",
                    value: 0x2000
                },
                Anomaly::MandatoryMissing("teleservice ID"),
            ]
        );
    }

    #[test]
    fn test_decode_octet_data() {
        // Octet encoding, 4 fields: DE AD BE EF
        let (message, ctx) = decode("00 0002 1002 0808 0106 0026F56DF778");

        assert_eq!(message.text, None);
        assert_eq!(message.data.as_deref(), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
        assert!(ctx.anomalies().is_empty());
    }

    #[test]
    fn test_encode_ascii() {
        let mut ctx = LogContext::new();
        let pdu = encode_submit_pdu(&Message::submit("3305773196", "AAAA"), &mut ctx).unwrap();

        assert_eq!(
            to_hex(&pdu),
            "00 0002 1002 0407 028CE95DCC6580 080D 0003200000 0106102418306080".replace(' ', "")
        );
    }

    #[test]
    fn test_encode_latin() {
        let mut ctx = LogContext::new();
        let pdu =
            encode_submit_pdu(&Message::submit("3305773196", "Campeón!"), &mut ctx).unwrap();

        assert_eq!(
            to_hex(&pdu),
            "00 0002 1002 0407 028CE95DCC6580 0811 0003200000 010A40421B0B6B832F9B7108"
                .replace(' ', "")
        );
    }

    #[test]
    fn test_encode_unicode() {
        let mut ctx = LogContext::new();
        let pdu = encode_submit_pdu(
            &Message::submit("3305773196", "中國哲學書電子化計劃"),
            &mut ctx,
        )
        .unwrap();

        assert_eq!(
            to_hex(&pdu),
            "00 0002 1002 0407 028CE95DCC6580 081D 0003200000 \
             0116205271 6AB85AA792 DBC337C4B7 DADA8298B4 504294 18"
                .replace(' ', "")
        );
    }

    #[test]
    fn test_encode_missing_address() {
        let message = Message {
            address: None,
            ..Message::submit("", "AAAA")
        };
        let mut ctx = LogContext::new();

        assert!(matches!(
            encode_submit_pdu(&message, &mut ctx),
            Err(CodecError::MissingField("address"))
        ));
    }

    #[test]
    fn test_encode_invalid_dtmf_number() {
        let mut ctx = LogContext::new();
        let err = encode_submit_pdu(&Message::submit("+13305773196", "A"), &mut ctx).unwrap_err();

        assert!(matches!(err, CodecError::InvalidDtmfDigit('+')));
        assert_eq!(
            err.to_string(),
            "Unsupported character in number: '+'. Cannot convert to DTMF"
        );
    }

    #[test]
    fn test_encode_text_too_long_for_user_data() {
        // 255 Latin characters fit NUM_FIELDS but not a one byte length
        let text = "é".repeat(255);
        let mut ctx = LogContext::new();

        assert!(matches!(
            encode_submit_pdu(&Message::submit("1", text), &mut ctx),
            Err(CodecError::TooLong {
                field: "user data",
                max: 255,
                actual: 257
            })
        ));
    }

    #[test]
    fn test_encode_decode_data() {
        let data = vec![0x00, 0x01, 0xFE, 0xFF];
        let mut ctx = LogContext::new();
        let pdu = encode_submit_pdu(&Message::submit_data("123", data.clone()), &mut ctx).unwrap();

        let message = decode_pdu(&pdu, &mut ctx).unwrap();
        assert_eq!(message.data.as_deref(), Some(&data[..]));
        assert_eq!(message.text, None);
        assert_eq!(message.address.as_deref(), Some("123"));
    }

    #[test]
    fn test_encode_decode_text_lengths() {
        for len in 1..=100 {
            let text = "A".repeat(len);
            let mut ctx = LogContext::new();
            let pdu = Message::submit("123456789", text.as_str())
                .to_submit_pdu(&mut ctx)
                .unwrap();

            let message = Message::from_pdu(&pdu, &mut ctx).unwrap();
            assert_eq!(message.teleservice_id, Some(TeleserviceId::Wmt));
            assert_eq!(message.pdu_type, PduType::Submit);
            assert_eq!(message.address.as_deref(), Some("123456789"));
            assert_eq!(message.text.as_deref(), Some(text.as_str()), "length {len}");
            assert!(ctx.anomalies().is_empty());
        }
    }

    proptest! {
        #[test]
        fn proptest_decode_never_panics(pdu in proptest::collection::vec(any::<u8>(), 0..300)) {
            let mut ctx = LogContext::new();
            if let Ok(message) = decode_pdu(&pdu, &mut ctx) {
                prop_assert!(message.text.is_none() || message.data.is_none());
            }
        }

        #[test]
        fn proptest_decode_well_framed_point_to_point(
            parameters in proptest::collection::vec(
                (0u8..12, proptest::collection::vec(any::<u8>(), 0..40)),
                0..8,
            )
        ) {
            let mut pdu = vec![0x00];
            for (id, value) in &parameters {
                pdu.push(*id);
                pdu.push(value.len() as u8);
                pdu.extend_from_slice(value);
            }

            let mut ctx = LogContext::new();
            // Every frame is intact, so only field level anomalies remain
            prop_assert!(decode_pdu(&pdu, &mut ctx).is_ok());
        }

        #[test]
        fn proptest_text_round_trip(text in "\\PC{0,60}") {
            let mut ctx = LogContext::new();
            let pdu = Message::submit("5551234", text.as_str()).to_submit_pdu(&mut ctx).unwrap();
            let message = Message::from_pdu(&pdu, &mut ctx).unwrap();
            prop_assert_eq!(message.text.as_deref(), Some(text.as_str()));
        }
    }
}
