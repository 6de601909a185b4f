//! Read-only table of "interesting" byte sequences.
//!
//! Integer boundary values of every width a parser is likely to read, in
//! both endiannesses, plus a few well-known format markers. Consumed by the
//! `magic_overwrite`/`magic_insert` strategies, which truncate entries to
//! whatever space is available.

/// Magic values, ordered; indexed uniformly by the magic strategies
pub const MAGIC_VALUES: &[&[u8]] = &[
    // 1 byte
    b"\x00",
    b"\x01",
    b"\x10",
    b"\x20",
    b"\x40",
    b"\x7e",
    b"\x7f",
    b"\x80",
    b"\x81",
    b"\xc0",
    b"\xfe",
    b"\xff",
    // 2 bytes, little endian
    b"\x00\x00",
    b"\x01\x00",
    b"\x80\x00",
    b"\xff\x00",
    b"\xfe\xff",
    b"\xff\xff",
    b"\x00\x80",
    b"\xff\x7f",
    // 2 bytes, big endian
    b"\x00\x01",
    b"\x00\x80",
    b"\x00\xff",
    b"\xff\xfe",
    b"\x80\x00",
    b"\x7f\xff",
    // 4 bytes, little endian
    b"\x00\x00\x00\x00",
    b"\x01\x00\x00\x00",
    b"\xff\xff\xff\xff",
    b"\xfe\xff\xff\xff",
    b"\xff\xff\xff\x7f",
    b"\x00\x00\x00\x80",
    // 4 bytes, big endian
    b"\x00\x00\x00\x01",
    b"\x7f\xff\xff\xff",
    b"\x80\x00\x00\x00",
    b"\xff\xff\xff\xfe",
    // 8 bytes, little endian
    b"\x00\x00\x00\x00\x00\x00\x00\x00",
    b"\x01\x00\x00\x00\x00\x00\x00\x00",
    b"\xff\xff\xff\xff\xff\xff\xff\xff",
    b"\xff\xff\xff\xff\xff\xff\xff\x7f",
    b"\x00\x00\x00\x00\x00\x00\x00\x80",
    // 8 bytes, big endian
    b"\x00\x00\x00\x00\x00\x00\x00\x01",
    b"\x7f\xff\xff\xff\xff\xff\xff\xff",
    b"\x80\x00\x00\x00\x00\x00\x00\x00",
    // Format markers and parser irritants
    b"\x7fELF",
    b"PK\x03\x04",
    b"\xff\xd8\xff",
    b"%n%n%n%n",
    b"%s%s%s%s",
    b"-1",
    b"0x41414141",
    b"\r\n\r\n",
];
