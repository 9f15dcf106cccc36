pub mod analysis;
pub mod calendar;
pub mod company;
pub mod indicator;
pub mod news;
pub mod settings;
pub mod watchlist;
