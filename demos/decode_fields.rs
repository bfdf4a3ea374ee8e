//! Decodes the fields of a synthetic file record and prints them.

use field_bytes::{filetime, little_endian, unicode};

/// Builds the record buffer a format parser would have sliced out of a
/// larger artifact: flags (2 bytes), allocated size (4 bytes), modified
/// timestamp (8 bytes, FILETIME), name (UTF-16LE).
fn build_record() -> Vec<u8> {
    let mut record = Vec::new();

    record.extend([0x01, 0x00]);
    record.extend([0x00, 0x04, 0x00, 0x00]);
    record.extend(131_301_625_330_000_000u64.to_le_bytes());
    record.extend([0x24, 0x00, 0x4D, 0x00, 0x46, 0x00, 0x54, 0x00]);

    record
}

fn main() {
    let record = build_record();

    let flags = little_endian::u16_from_le_bytes(&record[0..2]).unwrap();
    let allocated_size = little_endian::u32_from_le_bytes(&record[2..6]).unwrap();
    let modified = filetime::timestamp_from_filetime_bytes(&record[6..14]).unwrap();
    let name = unicode::ascii_from_utf16le_bytes(&record[14..]).unwrap();

    println!("flags:          0x{:04X}", flags);
    println!("allocated size: {} bytes", allocated_size);
    println!("modified:       {}", modified);
    println!("name:           {}", name);

    // Cluster runs store their offsets as narrow signed fields; a set top
    // bit in the last byte means the run moves backwards.
    let relative_cluster = little_endian::i64_from_le_bytes(&[0x14, 0x15, 0xFF]).unwrap();
    println!("run offset:     {} clusters", relative_cluster);

    // Oversized slices are rejected instead of quietly truncated.
    let error = little_endian::u64_from_le_bytes(&record).unwrap_err();
    println!("whole record as one field: {}", error);
}
