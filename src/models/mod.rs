pub mod config;
pub mod response;

pub use config::{AppConfig, MaxDistances, PaletteConfig};
pub use response::{MatchResponse, ResponseBody};
