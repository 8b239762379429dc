//! Order-to-label transformation.
//!
//! - **registry**: country display name to carrier code and house number convention
//! - **address**: positional split of a street line into street name and house number
//! - **record**: assembly of one label row from an order row and the sender profile
//! - **batch**: in-order transformation of a whole export

pub mod address;
pub mod batch;
pub mod record;
pub mod registry;

pub use address::{SplitStreet, is_unsplittable, split_street};
pub use batch::{TransformReport, transform_all};
pub use record::{Transformed, transform_record};
pub use registry::{CountryRegistry, lookup_country};
