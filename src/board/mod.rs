//! 看板数据模型与状态存储

mod column;
mod store;
mod task;

pub use column::{Column, ColumnKey};
pub use store::{BoardStore, EditDraft, EditField, NewTaskDraft};
pub use task::Task;
