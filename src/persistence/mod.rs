pub mod config;
pub mod files;
pub mod store;

pub use config::{load_config, save_config, AppConfig};
pub use files::{config_file, ensure_data_dir, init_local_dir, log_file};
pub use store::{FileStore, KeyValueStore, MemoryStore, Persisted};
