pub mod creation;
pub mod growth;
