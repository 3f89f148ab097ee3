mod clients;
mod storage;

pub use clients::world_bank::{latest_value, WorldBankClient, WorldBankIndicator, DEFAULT_API_BASE};
pub use storage::fs_store::FileSystemStore;
