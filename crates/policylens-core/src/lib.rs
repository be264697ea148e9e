pub mod classification;
pub mod policy;

pub use classification::{Classification, Strength};
pub use policy::{PolicyDocument, PolicyError};
