pub mod fee;
pub mod gas;
pub mod response;
pub mod transaction;

pub use fee::*;
pub use gas::*;
pub use response::*;
pub use transaction::*;
