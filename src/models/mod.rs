pub mod classifier;
pub mod encoder;
pub mod traits;
pub mod transformer;
pub mod types;

// Re-export commonly used types
pub use types::*;
pub use classifier::NearestCentroid;
pub use encoder::TargetEncoder;
pub use traits::{Classifier, FeatureTransformer, RawRow, TargetDecoder};
pub use transformer::FittedTransformer;
