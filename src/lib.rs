//! seismo-deck: Terminal slide-deck presenter with quizzes and charts.

pub mod charts;
pub mod deck;
pub mod outline;
pub mod quiz;
pub mod toc;
pub mod tui;
pub mod types;
