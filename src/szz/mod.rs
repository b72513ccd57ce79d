pub mod attribution;
pub mod blame;
pub mod diff;
pub mod queries;
pub mod revision;
