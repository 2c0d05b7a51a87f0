use shared::errors::ServiceError;
use std::num::IntErrorKind;

/// A raw brand id sorted into what the catalog can do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandIdParam {
    Id(i32),
    /// All digits, but outside the range any brand id can take.
    OutOfRange,
    Malformed,
}

/// Parses the optional `limit` query parameter.
///
/// Absent means "no cap". Integers too large for `usize` saturate, since
/// they cap nothing. Anything other than a non-negative integer, including
/// the empty string, is an invalid parameter.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, ServiceError> {
    let Some(value) = raw else {
        return Ok(None);
    };

    match value.parse::<usize>() {
        Ok(limit) => Ok(Some(limit)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Some(usize::MAX)),
        Err(_) => Err(ServiceError::invalid_parameter("limit", value)),
    }
}

pub fn parse_brand_id(raw: &str) -> BrandIdParam {
    match raw.parse::<i32>() {
        Ok(id) => BrandIdParam::Id(id),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            BrandIdParam::OutOfRange
        }
        Err(_) => BrandIdParam::Malformed,
    }
}
