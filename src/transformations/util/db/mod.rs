pub mod adventurers;
pub mod battles;
pub mod beasts;
pub mod discoveries;
pub mod entropy;
pub mod items;
pub mod scores;
