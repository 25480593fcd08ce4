pub mod models;
pub mod ordering;
pub mod storage;
pub mod store;
pub mod task_edit;
pub mod task_list;
pub mod ui;
