use cartouche_core::prelude::*;
use cartouche_formats::prelude::*;
use proptest::prelude::*;

proptest! {
    //Identification must be a pure function of the bytes
    #[test]
    fn identification_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(identify(&data, None), identify(&data, None));
        prop_assert_eq!(identify_all(&data), identify_all(&data));
    }

    #[test]
    fn every_envelope_echoes_the_source_size(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(identify(&data, None).source_size, data.len());
        for report in identify_all(&data) {
            prop_assert_eq!(report.source_size, data.len());
        }
    }

    #[test]
    fn valid_implies_recognised(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        for report in identify_all(&data) {
            prop_assert!(report.recognised || !report.valid);
        }
    }

    #[test]
    fn refusals_carry_zeroed_payloads(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        for report in identify_all(&data) {
            if !report.recognised {
                prop_assert_eq!(report.payload, Payload::zeroed(report.format));
            }
        }
    }

    //Sweeping the length floor around small formats must never panic or misreport
    #[test]
    fn short_buffers_never_panic(len in 0usize..64, byte in any::<u8>()) {
        let data = vec![byte; len];
        let report = identify(&data, None);
        prop_assert_eq!(report.source_size, len);
        for hinted in [FormatId::Bps, FormatId::Swf, FormatId::Gdi, FormatId::M3u] {
            let report = identify(&data, Some(hinted));
            prop_assert_eq!(report.format, hinted);
        }
    }
}
