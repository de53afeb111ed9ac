pub mod page;
pub mod redirect;
