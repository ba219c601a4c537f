// Presentation layer - Board controller and terminal front end
pub mod board;
pub mod session;
pub mod terminal;
pub mod view;
