//! Core utilities shared by every module.

#[macro_use]
pub mod utils {
    #[macro_use]
    pub mod safety;
}
