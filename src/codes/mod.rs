//! Closed enumerations with canonical string forms
//!
//! Every other layer leans on these codecs; the string tables here are the
//! single source of truth for what a report may say.

pub mod bearing;
pub mod direction;
pub mod edge;
pub mod resource;
pub mod result;
pub mod terrain;
pub mod wind;

pub use bearing::Bearing;
pub use direction::Direction;
pub use edge::Edge;
pub use resource::Resource;
pub use result::MoveResult;
pub use terrain::Terrain;
pub use wind::WindStrength;
