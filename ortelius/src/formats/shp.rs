//! ESRI shapefile geometry decoding.
//!
//! Only what the viewer consumes is decoded: the XY coordinates of point,
//! multipoint, polyline and polygon records. The Z/M variants are accepted
//! too; their extra coordinate blocks sit after the XY data and are skipped
//! through the record length. Attributes live in the sibling `.dbf` table,
//! see [`super::dbf`].

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use ortelius_types::PlanePoint;

use crate::error::Error;

const FILE_CODE: i32 = 9994;
const HEADER_LEN: usize = 100;
const RECORD_HEADER_LEN: usize = 8;

/// Shape type codes from the shapefile specification.
mod shape_type {
    pub const NULL: i32 = 0;
    pub const POINT: i32 = 1;
    pub const POLYLINE: i32 = 3;
    pub const POLYGON: i32 = 5;
    pub const MULTIPOINT: i32 = 8;
    pub const POINT_Z: i32 = 11;
    pub const POLYLINE_Z: i32 = 13;
    pub const POLYGON_Z: i32 = 15;
    pub const MULTIPOINT_Z: i32 = 18;
    pub const POINT_M: i32 = 21;
    pub const POLYLINE_M: i32 = 23;
    pub const POLYGON_M: i32 = 25;
    pub const MULTIPOINT_M: i32 = 28;
}

/// Point lists of one shapefile record, one list per part.
///
/// A null shape decodes to an empty list so record indices stay aligned
/// with the attribute table.
pub type ShapeParts = Vec<Vec<PlanePoint>>;

/// Decodes the geometry of a `.shp` buffer.
pub fn decode(data: &[u8]) -> Result<Vec<ShapeParts>, Error> {
    if data.len() < HEADER_LEN {
        return Err(Error::Decoding("shp file shorter than its header".into()));
    }
    let file_code = BigEndian::read_i32(&data[0..4]);
    if file_code != FILE_CODE {
        return Err(Error::Decoding(format!("bad shp file code {file_code}")));
    }

    let mut shapes = Vec::new();
    let mut offset = HEADER_LEN;
    while offset + RECORD_HEADER_LEN <= data.len() {
        // Record header: record number, then content length in 16-bit words.
        let content_len = BigEndian::read_i32(&data[offset + 4..offset + 8]) as usize * 2;
        offset += RECORD_HEADER_LEN;
        if content_len < 4 || offset + content_len > data.len() {
            return Err(Error::Decoding("truncated shp record".into()));
        }
        shapes.push(decode_record(&data[offset..offset + content_len])?);
        offset += content_len;
    }

    Ok(shapes)
}

fn decode_record(record: &[u8]) -> Result<ShapeParts, Error> {
    let shape = LittleEndian::read_i32(&record[0..4]);
    let body = &record[4..];

    match shape {
        shape_type::NULL => Ok(Vec::new()),
        shape_type::POINT | shape_type::POINT_Z | shape_type::POINT_M => {
            require(body, 16)?;
            Ok(vec![vec![read_point(body, 0)]])
        }
        shape_type::MULTIPOINT | shape_type::MULTIPOINT_Z | shape_type::MULTIPOINT_M => {
            require(body, 36)?;
            let num_points = LittleEndian::read_i32(&body[32..36]) as usize;
            require(body, 36 + num_points * 16)?;
            let points = (0..num_points)
                .map(|i| read_point(body, 36 + i * 16))
                .collect();
            Ok(vec![points])
        }
        shape_type::POLYLINE
        | shape_type::POLYGON
        | shape_type::POLYLINE_Z
        | shape_type::POLYGON_Z
        | shape_type::POLYLINE_M
        | shape_type::POLYGON_M => {
            require(body, 40)?;
            let num_parts = LittleEndian::read_i32(&body[32..36]) as usize;
            let num_points = LittleEndian::read_i32(&body[36..40]) as usize;
            let points_start = 40 + num_parts * 4;
            require(body, points_start + num_points * 16)?;

            let mut starts = Vec::with_capacity(num_parts + 1);
            for i in 0..num_parts {
                starts.push(LittleEndian::read_i32(&body[40 + i * 4..44 + i * 4]) as usize);
            }
            starts.push(num_points);

            let mut parts = Vec::with_capacity(num_parts);
            for pair in starts.windows(2) {
                let (start, end) = (pair[0], pair[1]);
                if start > end || end > num_points {
                    return Err(Error::Decoding("shp part index out of range".into()));
                }
                parts.push(
                    (start..end)
                        .map(|i| read_point(body, points_start + i * 16))
                        .collect(),
                );
            }
            Ok(parts)
        }
        other => Err(Error::Decoding(format!("unsupported shape type {other}"))),
    }
}

fn require(body: &[u8], len: usize) -> Result<(), Error> {
    if body.len() < len {
        Err(Error::Decoding("truncated shp record".into()))
    } else {
        Ok(())
    }
}

fn read_point(body: &[u8], offset: usize) -> PlanePoint {
    PlanePoint::new(
        LittleEndian::read_f64(&body[offset..offset + 8]),
        LittleEndian::read_f64(&body[offset + 8..offset + 16]),
    )
}
