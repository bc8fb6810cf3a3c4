//! Import of spline parameter files
//!
//! Each row describes one segment as `c0,c1,...,ck,x_lo,x_hi`: the polynomial
//! coefficients followed by the two knots bounding the segment. Values are
//! usually WAD-scaled integers; plain decimals are accepted too. There is no
//! header row.

use crate::core::{error::*, types::Scalar};
use crate::segment::record::SegmentRecord;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read segment records from a CSV file
pub fn import_csv(path: &Path) -> Result<Vec<SegmentRecord>> {
    let file = std::fs::File::open(path)?;
    let records = import_reader(file)?;
    debug!(path = %path.display(), segments = records.len(), "Imported spline parameters");
    Ok(records)
}

/// Read segment records from any CSV source
pub fn import_reader<R: Read>(reader: R) -> Result<Vec<SegmentRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            SplineMerkleError::import(line, e.to_string())
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() < 2 {
            return Err(SplineMerkleError::import(
                line,
                format!("expected at least 2 columns, found {}", row.len()),
            ));
        }

        let values = row
            .iter()
            .map(|field| {
                field.parse::<Scalar>().map_err(|_| {
                    SplineMerkleError::import(line, format!("invalid number {:?}", field))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let (payload, bounds) = values.split_at(values.len() - 2);
        records.push(SegmentRecord {
            index: records.len() as u64,
            lower_bound: bounds[0],
            upper_bound: bounds[1],
            payload: payload.to_vec(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WAD;

    #[test]
    fn test_import_wad_rows() {
        let data = "\
1000000000000000000,-2000000000000000000,0,500000000000000000,-1024000000000000000,-1000000000000000000
3,4,5,6,-1000000000000000000,1500000000000000000
";
        let records = import_reader(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[0].lower_bound, Scalar::Int(-1024 * WAD / 1000));
        assert_eq!(records[0].upper_bound, Scalar::Int(-WAD));
        assert_eq!(records[0].payload.len(), 4);
        assert_eq!(records[0].payload[1], Scalar::Int(-2 * WAD));
        assert_eq!(records[1].index, 1);
        assert_eq!(records[1].upper_bound, Scalar::Int(3 * WAD / 2));
    }

    #[test]
    fn test_import_bounds_only_and_floats() {
        let records = import_reader("0.0, 10.5\n".as_bytes()).unwrap();
        assert_eq!(records[0].lower_bound, Scalar::Float(0.0));
        assert_eq!(records[0].upper_bound, Scalar::Float(10.5));
        assert!(records[0].payload.is_empty());
    }

    #[test]
    fn test_import_rejects_short_row() {
        let err = import_reader("1,2,3\n4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SplineMerkleError::Import { line: 2, .. }));
    }

    #[test]
    fn test_import_rejects_garbage() {
        let err = import_reader("1,two,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SplineMerkleError::Import { line: 1, .. }));
    }

    #[test]
    fn test_import_rejects_invalid_utf8() {
        let data: &[u8] = b"1,2\n\xff,3\n";
        let err = import_reader(data).unwrap_err();
        assert!(matches!(err, SplineMerkleError::Import { .. }));
    }

    #[test]
    fn test_import_empty() {
        assert!(import_reader("".as_bytes()).unwrap().is_empty());
    }
}
