pub mod defaults;
pub mod endpoint;
pub mod logs_config;
pub mod timestamp;
pub mod tls;
pub mod validation;

pub use defaults::*;
pub use endpoint::*;
pub use logs_config::*;
pub use timestamp::*;
pub use tls::*;
pub use validation::*;
