pub mod chart;
pub mod country;
pub mod request;
pub mod response;
pub mod series;
pub mod settings;
