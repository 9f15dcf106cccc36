pub mod loading;
pub mod view_state;
