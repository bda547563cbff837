use std::io::{self, Cursor};

use pcx_provider::{probe_pcx, Error, FormatProbe, PcxReaderProvider, ProbeInput};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

mod support;
use support::sources::InstrumentedSource;
use support::synthetic::{self, VALID_BPP, VALID_COMPRESSIONS, VALID_VERSIONS};

fn can_decode(data: &[u8]) -> pcx_provider::Result<bool> {
    let provider = PcxReaderProvider::new();
    let mut cursor = Cursor::new(data.to_vec());
    let result = provider.can_decode(ProbeInput::from(&mut cursor));
    assert_eq!(cursor.position(), 0, "probe moved the stream for {data:02X?}");
    result
}

#[test]
fn accepts_every_valid_prefix() {
    for &version in &VALID_VERSIONS {
        for &compression in &VALID_COMPRESSIONS {
            for &bpp in &VALID_BPP {
                let data = [0x0A, version, compression, bpp];
                assert!(
                    can_decode(&data).unwrap(),
                    "expected PCX for {data:02X?}"
                );
            }
        }
    }
}

#[test]
fn concrete_scenarios() {
    assert!(can_decode(&[0x0A, 0x05, 0x01, 0x08, 0x00]).unwrap());
    assert!(!can_decode(&[0x0A, 0x05, 0x01, 0x03, 0x00]).unwrap());
    assert!(!can_decode(&[0x0A, 0x09, 0x01, 0x08, 0x00]).unwrap());
    assert!(!can_decode(&[0x42, 0x05, 0x01, 0x08, 0x00]).unwrap());
}

#[test]
fn single_byte_stream_is_io_failure() {
    let mut source = InstrumentedSource::new(vec![0x0A]);
    let result = probe_pcx(&mut source);

    match result {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("expected I/O failure, got {other:?}"),
    }
    assert_eq!(source.position(), 0);
}

#[test]
fn non_seekable_input_reads_nothing() {
    let provider = PcxReaderProvider::new();
    let bytes: Vec<u8> = vec![0x0A, 0x05, 0x01, 0x08];

    // A plain byte vector is an object, not a stream.
    assert!(!provider.can_decode(ProbeInput::other(&bytes)).unwrap());
}

#[test]
fn device_error_is_propagated_not_negative() {
    let mut source = InstrumentedSource::new(vec![0x0A, 0x05, 0x01, 0x08]).failing_reads();
    let result = probe_pcx(&mut source);

    assert!(matches!(result, Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::Other));
    assert_eq!(source.position(), 0);
    assert_eq!(source.bytes_read, 0);
}

#[test]
fn restore_failure_is_distinct_from_mismatch() {
    let mut source = InstrumentedSource::new(vec![0x42, 0x00, 0x00, 0x00]).failing_restore();
    let result = probe_pcx(&mut source);

    assert!(matches!(result, Err(Error::Restore { read: None, .. })));
}

#[test]
fn restore_failure_after_read_failure_keeps_both() {
    let mut source = InstrumentedSource::new(vec![0x0A, 0x05]).failing_restore();
    let err = probe_pcx(&mut source).unwrap_err();

    assert!(err.is_io());
    assert!(matches!(err, Error::Restore { read: Some(_), .. }));
}

#[test]
fn probing_mid_stream_restores_offset() {
    let mut data = vec![0xEE; 10];
    data.extend_from_slice(&synthetic::file(5, 8, 1, 4, 4));
    let mut source = InstrumentedSource::new(data).at(10);

    assert!(probe_pcx(&mut source).unwrap());
    assert_eq!(source.position(), 10);
    assert_eq!(source.bytes_read, 4);
}

#[test]
fn successive_probers_see_same_bytes() {
    let provider = PcxReaderProvider::new();
    let mut cursor = Cursor::new(synthetic::file(5, 8, 1, 16, 16));

    let first = provider.can_decode(ProbeInput::from(&mut cursor)).unwrap();
    let second = provider.can_decode(ProbeInput::from(&mut cursor)).unwrap();
    assert!(first && second);

    let mut reader = provider.create_reader();
    let header = reader.read_header(&mut cursor).unwrap();
    assert_eq!((header.width(), header.height()), (16, 16));
}

#[test]
fn random_noise_never_moves_the_stream() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0A05);
    for _ in 0..256 {
        let len = rng.gen_range(4..64);
        let mut data = vec![0u8; len];
        rng.fill(data.as_mut_slice());

        let expected = data[0] == 0x0A
            && VALID_VERSIONS.contains(&data[1])
            && VALID_COMPRESSIONS.contains(&data[2])
            && VALID_BPP.contains(&data[3]);
        assert_eq!(can_decode(&data).unwrap(), expected, "{data:02X?}");
    }
}

#[test]
fn concurrent_probes_on_independent_sources() {
    let provider = PcxReaderProvider::new();
    std::thread::scope(|scope| {
        for version in VALID_VERSIONS {
            let provider = &provider;
            scope.spawn(move || {
                for _ in 0..100 {
                    let mut cursor = Cursor::new(vec![0x0A, version, 1, 8]);
                    assert!(provider.can_decode(ProbeInput::from(&mut cursor)).unwrap());
                    assert_eq!(cursor.position(), 0);
                }
            });
        }
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn prop_wrong_magic_is_negative(
        magic in any::<u8>().prop_filter("not PCX magic", |b| *b != 0x0A),
        rest in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut data = vec![magic];
        data.extend_from_slice(&rest);
        prop_assert!(!can_decode(&data).unwrap());
    }

    #[test]
    fn prop_unknown_version_is_negative(
        version in any::<u8>().prop_filter("unknown version", |v| !VALID_VERSIONS.contains(v)),
        rest in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut data = vec![0x0A, version];
        data.extend_from_slice(&rest);
        prop_assert!(!can_decode(&data).unwrap());
    }

    #[test]
    fn prop_valid_prefix_is_positive(
        version in proptest::sample::select(VALID_VERSIONS.to_vec()),
        compression in proptest::sample::select(VALID_COMPRESSIONS.to_vec()),
        bpp in proptest::sample::select(VALID_BPP.to_vec()),
        rest in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut data = vec![0x0A, version, compression, bpp];
        data.extend_from_slice(&rest);
        prop_assert!(can_decode(&data).unwrap());
    }

    #[test]
    fn prop_bad_compression_or_bpp_is_negative(
        version in proptest::sample::select(VALID_VERSIONS.to_vec()),
        compression in any::<u8>(),
        bpp in any::<u8>(),
    ) {
        prop_assume!(!VALID_COMPRESSIONS.contains(&compression) || !VALID_BPP.contains(&bpp));
        prop_assert!(!can_decode(&[0x0A, version, compression, bpp]).unwrap());
    }

    #[test]
    fn prop_probe_is_idempotent(data in proptest::collection::vec(any::<u8>(), 4..32)) {
        let mut cursor = Cursor::new(data);
        let first = probe_pcx(&mut cursor).unwrap();
        let second = probe_pcx(&mut cursor).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(cursor.position(), 0);
    }
}
