pub mod lookup;
pub mod requests;
