pub mod coach;
pub mod competition;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod matches;
pub mod media;
pub mod not_found;
pub mod organizer;
pub mod player;
pub mod profile;
pub mod register;
pub mod team;

pub use home::Home;
pub use login::Login;
pub use media::Media;
pub use not_found::NotFound;
pub use profile::{ProfileLink, PublicProfile};
pub use register::Register;
