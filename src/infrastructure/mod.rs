pub mod database;
pub mod repositories;
pub mod seed;
pub mod time;
pub mod util;
