pub mod profile;
pub mod provider;

pub use profile::Profile;
