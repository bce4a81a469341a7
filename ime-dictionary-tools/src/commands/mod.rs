// Moduły dla poszczególnych komend
pub mod demo;
pub mod show;
