pub mod extract;
pub mod router;
pub mod routes;

pub use router::{LumenState, lumen_router};
