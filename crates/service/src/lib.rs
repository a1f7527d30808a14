pub mod db;
pub mod errors;
pub mod goal_service;
pub mod rates;

#[cfg(test)]
mod test_support;
