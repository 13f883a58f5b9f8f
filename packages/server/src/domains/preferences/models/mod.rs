pub mod preference;

pub use preference::Preference;
