pub mod history;
pub mod home;
pub mod loading;
pub mod no_data;
pub mod quiz;
pub mod results;
