//! Command implementations.

pub mod audit;
pub mod claims;
pub mod links;
pub mod show;
pub mod supporters;

pub use self::audit::execute_audit;
pub use self::claims::execute_claims;
pub use self::links::execute_links;
pub use self::show::execute_show;
pub use self::supporters::execute_supporters;
