mod brand;
mod product;

pub use self::brand::Brand;
pub use self::product::Product;
