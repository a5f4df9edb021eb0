pub mod resolve;
pub mod types;

pub use resolve::{
    load_config_file, resolve_config, resolve_config_in, ResolvedConfig, GLOBAL_CONFIG_FILE,
    LOCAL_CONFIG_FILE,
};
pub use types::RunfoldConfig;
