pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use run::run;
pub use tracing::init_tracing_subscriber;
pub use wiring::build_paste_use_case;
