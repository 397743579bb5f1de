mod errors;
mod growth;

pub use errors::*;
pub use growth::DefaultGrowth;
pub use growth::GrowthPolicy;
