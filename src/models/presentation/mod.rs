pub mod types;
pub mod aggregate;
pub mod store;
pub mod memory;
pub mod postgres;
pub mod queries;

pub use types::*;
pub use store::PresentationStore;
pub use memory::MemoryPresentationStore;
pub use postgres::PgPresentationStore;
pub use queries::*;
