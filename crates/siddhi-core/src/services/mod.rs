mod apps_service;
mod output;

pub use apps_service::AppsService;
pub use output::AppsOutput;
