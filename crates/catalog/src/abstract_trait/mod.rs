mod brand;
mod product;

pub use self::brand::{BrandQueryServiceTrait, DynBrandQueryService};
pub use self::product::{DynProductQueryService, ProductQueryServiceTrait};
