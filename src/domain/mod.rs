pub mod content;
pub mod errors;
pub mod navigation;
pub mod routes;
pub mod search;

pub use content::*;
pub use errors::*;
pub use navigation::*;
pub use routes::*;
pub use search::*;
