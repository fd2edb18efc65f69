//! Comprehensive MD5 digest tests.
//!
//! This test module validates the MD5 implementation against:
//! 1. RFC 1321 official test vectors
//! 2. Block and padding boundaries (55, 56, 63, 64, 119, 120 bytes)
//! 3. Streaming API chunking invariance
//! 4. The padded-stream layout produced during finalization
//! 5. The `md-5` crate as an independent reference

use libmd5::constants::{BLOCK_LEN, INIT_STATE, LENGTH_SUFFIX_LEN, PADDING};
use libmd5::padding::{length_suffix, padding_len};
use libmd5::{DIGEST_LEN, Md5, Md5Context, to_hex, transform};
use proptest::prelude::*;

fn reference_digest(data: &[u8]) -> [u8; 16] {
    use md5::Digest as _;
    md5::Md5::digest(data).into()
}

/// Builds the padded byte stream the hasher compresses for `message`.
fn padded_stream(message: &[u8]) -> Vec<u8> {
    let bits = (message.len() as u64).wrapping_mul(8);
    let mut stream = message.to_vec();
    stream.extend_from_slice(&PADDING[..padding_len(message.len())]);
    stream.extend_from_slice(&length_suffix([bits as u32, (bits >> 32) as u32]));
    stream
}

// ============================================================================
// RFC 1321 Official Test Vectors
// ============================================================================

/// RFC 1321 Section A.5 defines the official MD5 test suite.
mod rfc1321_test_vectors {
    use super::*;

    #[test]
    fn rfc1321_empty_string() {
        assert_eq!(to_hex(&Md5::digest(b"")), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn rfc1321_single_char_a() {
        assert_eq!(to_hex(&Md5::digest(b"a")), "0cc175b9c0f1b6a831c399e269772661");
    }

    #[test]
    fn rfc1321_abc() {
        assert_eq!(to_hex(&Md5::digest(b"abc")), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn rfc1321_message_digest() {
        assert_eq!(
            to_hex(&Md5::digest(b"message digest")),
            "f96b697d7cb7938d525a2f31aaf161d0"
        );
    }

    #[test]
    fn rfc1321_lowercase_alphabet() {
        assert_eq!(
            to_hex(&Md5::digest(b"abcdefghijklmnopqrstuvwxyz")),
            "c3fcd3d76192e4007dfb496cca67e13b"
        );
    }

    #[test]
    fn rfc1321_alphanumeric_mixed_case() {
        assert_eq!(
            to_hex(&Md5::digest(
                b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
            )),
            "d174ab98d277d9f5a5611c2c9f419d9f"
        );
    }

    #[test]
    fn rfc1321_numeric_sequence() {
        assert_eq!(
            to_hex(&Md5::digest(
                b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"
            )),
            "57edf4a22be3c955ac49da2e2107b67a"
        );
    }

    #[test]
    fn one_million_a() {
        let mut hasher = Md5::new();
        let chunk = [b'a'; 1000];
        for _ in 0..1000 {
            hasher.update(&chunk);
        }
        assert_eq!(to_hex(&hasher.finalize()), "7707d6ae4e027c70eea2a935c2296f21");
    }
}

// ============================================================================
// Block and padding boundaries
// ============================================================================

mod boundaries {
    use super::*;

    #[test]
    fn fifty_five_bytes_fit_in_one_block() {
        assert_eq!(
            to_hex(&Md5::digest(&[b'a'; 55])),
            "ef1772b6dff9a122358552954ad0df65"
        );
    }

    #[test]
    fn fifty_six_bytes_need_extra_padding_block() {
        assert_eq!(padded_stream(&[b'a'; 56]).len(), 2 * BLOCK_LEN);
        assert_eq!(
            to_hex(&Md5::digest(&[b'a'; 56])),
            "3b0c8ac703f828b04c6c197006d17218"
        );
    }

    #[test]
    fn exactly_one_block() {
        assert_eq!(
            to_hex(&Md5::digest(&[b'a'; 64])),
            "014842d480b571495a4a0363793f7367"
        );
    }

    #[test]
    fn lengths_around_block_edges_match_reference() {
        for len in [0, 1, 54, 55, 56, 57, 63, 64, 65, 119, 120, 121, 127, 128, 129] {
            let data: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
            assert_eq!(Md5::digest(&data), reference_digest(&data), "len {len}");
        }
    }

    #[test]
    fn byte_pattern_kibibyte() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1024).collect();
        assert_eq!(to_hex(&Md5::digest(&data)), "b2ea9f7fcea831a4a63b213f41a8855b");
    }

    #[test]
    fn digest_is_always_sixteen_bytes() {
        for len in [0usize, 1, 64, 1000] {
            assert_eq!(Md5::digest(&vec![0u8; len]).len(), DIGEST_LEN);
        }
    }
}

// ============================================================================
// Padded stream layout
// ============================================================================

mod padded_layout {
    use super::*;

    fn compress_all(stream: &[u8]) -> [u8; 16] {
        let (blocks, rest) = stream.as_chunks::<BLOCK_LEN>();
        assert!(rest.is_empty());

        let mut state = INIT_STATE;
        for block in blocks {
            transform(&mut state, block);
        }

        let mut digest = [0u8; 16];
        for (out, word) in digest.chunks_exact_mut(4).zip(&state) {
            out.copy_from_slice(&word.to_le_bytes());
        }
        digest
    }

    #[test]
    fn padded_stream_compresses_to_digest() {
        for len in [0usize, 3, 55, 56, 64, 100, 119, 120, 500] {
            let message = vec![0x42_u8; len];
            let stream = padded_stream(&message);
            assert_eq!(compress_all(&stream), Md5::digest(&message), "len {len}");
        }
    }

    proptest! {
        #[test]
        fn padded_stream_is_whole_blocks_ending_in_bit_length(
            message in prop::collection::vec(any::<u8>(), 0..=300)
        ) {
            let stream = padded_stream(&message);
            prop_assert_eq!(stream.len() % BLOCK_LEN, 0);
            prop_assert!(stream.len() > message.len());
            prop_assert_eq!(stream[message.len()], 0x80);

            let suffix = &stream[stream.len() - LENGTH_SUFFIX_LEN..];
            prop_assert_eq!(suffix, &(message.len() as u64 * 8).to_le_bytes()[..]);
        }
    }
}

// ============================================================================
// Streaming API
// ============================================================================

mod streaming {
    use super::*;

    fn chunked_sequences() -> impl Strategy<Value = Vec<Vec<u8>>> {
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..=150), 1..=8)
    }

    proptest! {
        #[test]
        fn split_point_does_not_change_digest(
            (data, split) in prop::collection::vec(any::<u8>(), 0..=512)
                .prop_flat_map(|data| {
                    let len = data.len();
                    (Just(data), 0..=len)
                })
        ) {
            let mut split_hasher = Md5::new();
            split_hasher.update(&data[..split]);
            split_hasher.update(&data[split..]);

            prop_assert_eq!(split_hasher.finalize(), Md5::digest(&data));
        }

        #[test]
        fn chunked_updates_match_reference(chunks in chunked_sequences()) {
            let mut hasher = Md5::new();
            let mut concatenated = Vec::new();
            for chunk in &chunks {
                hasher.update(chunk);
                concatenated.extend_from_slice(chunk);
                prop_assert_eq!(hasher.bit_len(), concatenated.len() as u64 * 8);
                prop_assert_eq!(hasher.buffered_len(), concatenated.len() % BLOCK_LEN);
            }

            prop_assert_eq!(hasher.finalize(), reference_digest(&concatenated));
        }

        #[test]
        fn context_matches_hasher(chunks in chunked_sequences()) {
            let mut ctx = Md5Context::init();
            let mut hasher = Md5::new();
            for chunk in &chunks {
                ctx.update(chunk, chunk.len()).unwrap();
                hasher.update(chunk);
            }

            let mut digest = [0u8; DIGEST_LEN];
            ctx.finalize(&mut digest).unwrap();
            prop_assert_eq!(digest, hasher.finalize());
        }
    }

    #[test]
    fn byte_at_a_time_matches_one_shot() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        let mut hasher = Md5::new();
        for byte in &data {
            hasher.update(std::slice::from_ref(byte));
        }
        assert_eq!(hasher.finalize(), Md5::digest(&data));
    }

    #[test]
    fn random_large_input_matches_reference() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let mut data = vec![0u8; 1 << 20];
        rng.fill(&mut data[..]);

        let mut hasher = Md5::new();
        for chunk in data.chunks(4093) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize(), reference_digest(&data));
    }

    #[test]
    fn word_at_a_time_quick_brown_fox() {
        let data = "The quick brown fox jumps over the lazy dog";
        let mut hasher = Md5::new();
        for word in data.split_inclusive(' ') {
            hasher.update(word.as_bytes());
        }
        assert_eq!(to_hex(&hasher.finalize()), "9e107d9d372bb6826bd81d3542a419d6");
    }
}
