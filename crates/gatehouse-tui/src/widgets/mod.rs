//! Custom widget components

mod access_log;
pub(crate) mod background;
mod command_bar;
mod device_dialog;
mod device_list;
mod header;
pub mod modal_overlay;

pub use access_log::AccessLog;
pub use background::NetBackground;
pub use command_bar::CommandBar;
pub use device_dialog::DeviceDialog;
pub use device_list::DeviceList;
pub use header::DashboardHeader;
