pub mod files;
pub mod store;

pub use files::{
    atomic_write, ensure_storage_dir, get_storage_dir, init_local_storage, tasks_file,
};
pub use store::{load_tasks, save_tasks};
