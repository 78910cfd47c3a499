pub mod artist;
pub mod genre;
pub mod search;
pub mod show;
pub mod venue;
