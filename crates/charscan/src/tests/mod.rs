mod scan_good;
pub mod utils;
