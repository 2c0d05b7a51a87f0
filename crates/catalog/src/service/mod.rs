mod brand;
mod product;

pub use self::brand::BrandQueryService;
pub use self::product::ProductQueryService;
