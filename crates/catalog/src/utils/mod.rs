mod params;

pub use self::params::{BrandIdParam, parse_brand_id, parse_limit};
