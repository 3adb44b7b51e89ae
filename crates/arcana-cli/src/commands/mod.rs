pub mod cards;
pub mod history;
pub mod layouts;
pub mod read;
pub mod stats;
