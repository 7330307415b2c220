//! Test fixtures: payload byte blobs.

/// `count` zero bytes.
pub fn zero_bytes(count: usize) -> Vec<u8> {
    vec![0u8; count]
}

/// Minimal MP4-shaped blob (ftyp + mdat boxes). The service treats payloads
/// as opaque, so this only needs to be recognizable, not playable.
pub fn create_test_mp4() -> Vec<u8> {
    let mut mp4 = Vec::new();
    mp4.extend_from_slice(&[0x00, 0x00, 0x00, 0x20]);
    mp4.extend_from_slice(b"ftyp");
    mp4.extend_from_slice(b"isom");
    mp4.extend_from_slice(&[0x00, 0x00, 0x02, 0x00]);
    mp4.extend_from_slice(b"isomiso2mp41");
    mp4.extend_from_slice(&[0x00, 0x00, 0x00, 0x08]);
    mp4.extend_from_slice(b"mdat");
    mp4.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04]);
    mp4
}
