// Dataset shell around the labeling engine: CSV inputs, the seed/auto
// merge, atomic outputs, and training example prep.

pub mod loader;
pub mod merger;
pub mod training;
pub mod writer;
