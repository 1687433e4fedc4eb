pub mod config_helper;
pub mod markup;
pub mod numeric;
