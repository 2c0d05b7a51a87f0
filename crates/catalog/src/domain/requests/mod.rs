mod brand;
mod product;

pub use self::brand::FindAllBrands;
pub use self::product::FindAllProducts;
