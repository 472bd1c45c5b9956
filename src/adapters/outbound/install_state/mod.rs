/// Installation state adapters
mod cellar;
mod fixed;

pub use cellar::{CellarInstallState, TAB_FILENAME};
pub use fixed::FixedInstallState;
