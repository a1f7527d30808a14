pub mod currency;
pub mod db;
pub mod errors;
pub mod saving_goal;
