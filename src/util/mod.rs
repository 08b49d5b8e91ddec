pub use num_traits::Float;

pub mod indexing;
pub use indexing::*;

/// Element type the element-wise helpers are generic over.
pub trait NumTrait: Float + Send + Sync {}

impl<T: Float + Send + Sync> NumTrait for T {}
