pub mod goal_store;
