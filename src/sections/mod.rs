pub mod about;
pub mod achievements;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;
