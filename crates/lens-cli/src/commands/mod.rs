pub mod input;
pub mod locate;
pub mod report;
pub mod summary;
