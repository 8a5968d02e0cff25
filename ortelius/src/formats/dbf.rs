//! dBASE attribute table decoding (the `.dbf` member of a shapefile pair).
//!
//! Every cell is surfaced as a trimmed string regardless of its declared
//! column type; the viewer's attribute model is untyped.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::Error;
use crate::feature::Field;

const TABLE_HEADER_LEN: usize = 32;
const FIELD_DESCRIPTOR_LEN: usize = 32;
const HEADER_TERMINATOR: u8 = 0x0d;
const DELETED_FLAG: u8 = b'*';

struct FieldDescriptor {
    name: String,
    length: usize,
}

/// Decodes all records of a `.dbf` buffer into per-record field lists.
///
/// Records flagged as deleted keep their slot as an empty field list so the
/// table stays aligned with the geometry file.
pub fn decode(data: &[u8]) -> Result<Vec<Vec<Field>>, Error> {
    if data.len() < TABLE_HEADER_LEN {
        return Err(Error::Decoding("dbf file shorter than its header".into()));
    }

    let record_count = LittleEndian::read_u32(&data[4..8]) as usize;
    let header_len = LittleEndian::read_u16(&data[8..10]) as usize;
    let record_len = LittleEndian::read_u16(&data[10..12]) as usize;

    if header_len > data.len() || record_len == 0 {
        return Err(Error::Decoding("inconsistent dbf header".into()));
    }

    let mut descriptors = Vec::new();
    let mut offset = TABLE_HEADER_LEN;
    while offset + FIELD_DESCRIPTOR_LEN <= header_len && data[offset] != HEADER_TERMINATOR {
        let raw = &data[offset..offset + FIELD_DESCRIPTOR_LEN];
        let name_end = raw[..11].iter().position(|b| *b == 0).unwrap_or(11);
        descriptors.push(FieldDescriptor {
            name: String::from_utf8_lossy(&raw[..name_end]).into_owned(),
            length: raw[16] as usize,
        });
        offset += FIELD_DESCRIPTOR_LEN;
    }

    let mut records = Vec::with_capacity(record_count);
    let mut offset = header_len;
    while records.len() < record_count && offset + record_len <= data.len() {
        let row = &data[offset..offset + record_len];
        offset += record_len;

        if row[0] == DELETED_FLAG {
            records.push(Vec::new());
            continue;
        }

        let mut fields = Vec::with_capacity(descriptors.len());
        let mut cell = 1;
        for descriptor in &descriptors {
            let end = (cell + descriptor.length).min(row.len());
            let value = String::from_utf8_lossy(&row[cell..end]);
            fields.push(Field::new(descriptor.name.as_str(), value.trim()));
            cell = end;
        }
        records.push(fields);
    }

    Ok(records)
}
