pub use super::character::Entity as Character;
pub use super::film::Entity as Film;
