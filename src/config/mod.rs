pub mod paths;
pub mod profile;

pub use paths::AppPaths;
pub use profile::normalize_profile_name;
